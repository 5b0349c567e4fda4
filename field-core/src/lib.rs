//! Interactive particle-network animation core.
//!
//! Main components:
//! - [`animator`] — lifecycle controller (start, pause, resume, reseed).
//! - [`field`] — the particle batch and its per-frame update.
//! - [`particle`] — particle model, pointer repulsion, and damping.
//! - [`pointer`] — pointer presence and position.
//! - [`render`] — drawing onto an abstract [`render::Surface`].
//! - [`config`] — tunable constants and JSON loading.
//! - [`types`] — shared colour and run-state types.

pub mod animator;
pub mod config;
pub mod field;
pub mod particle;
pub mod pointer;
pub mod render;
pub mod types;
