//! Lifecycle controller for the particle network.
//!
//! An [`Animator`] owns all animation state: the particle field, the pointer
//! tracker, the RNG, and the [`RunState`]. The host feeds it signals
//! (pointer, visibility, resize) and calls [`Animator::frame`] whenever a
//! previously requested frame comes due. The animator asks for each next
//! frame through a [`FrameTicker`] only while it is running, so pausing is
//! simply the absence of a request.

use crate::{
    config::FieldConfig,
    field::ParticleField,
    particle::Particle,
    pointer::PointerState,
    render::{Surface, render_frame},
    types::RunState,
};
use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};

/// Receives "call me again on the next display refresh" requests.
pub trait FrameTicker {
    fn request_frame(&mut self);
}

#[derive(Debug)]
pub struct Animator {
    cfg: FieldConfig,
    field: ParticleField,
    pointer: PointerState,
    rng: StdRng,
    state: RunState,
}

impl Animator {
    /// Creates an animator in [`RunState::Uninitialized`].
    ///
    /// The RNG is seeded from `cfg.seed` when set, otherwise from the OS.
    pub fn new(cfg: FieldConfig) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            cfg,
            field: ParticleField::default(),
            pointer: PointerState::default(),
            rng,
            state: RunState::Uninitialized,
        }
    }

    /// Applies the startup contract.
    ///
    /// - No surface: nothing happens; the animator stays uninitialized.
    /// - `reduced_motion`: the surface is hidden and the animator becomes
    ///   [`RunState::Disabled`] for good.
    /// - Otherwise the field is seeded at the surface size, the state becomes
    ///   [`RunState::Running`], and the first frame is requested.
    ///
    /// Calling `start` on an animator that already left `Uninitialized` is
    /// a no-op.
    pub fn start<S: Surface>(
        &mut self,
        surface: Option<&mut S>,
        reduced_motion: bool,
        ticker: &mut impl FrameTicker,
    ) {
        if self.state != RunState::Uninitialized {
            return;
        }
        let Some(surface) = surface else {
            log::debug!("no drawable surface; network animation not started");
            return;
        };
        if reduced_motion {
            surface.hide();
            self.state = RunState::Disabled;
            log::info!("reduced motion requested; network animation disabled");
            return;
        }

        let size = surface.size();
        self.field.reseed(size, &self.cfg, &mut self.rng);
        self.pointer.leave();
        self.state = RunState::Running;
        log::info!(
            "network animation started with {} particles",
            self.field.particles.len()
        );
        ticker.request_frame();
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }

    pub fn particles(&self) -> &[Particle] {
        &self.field.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Surface size the current batch was seeded for.
    pub fn size(&self) -> Vec2 {
        self.field.size()
    }

    /// Pointer moved to `(x, y)` relative to the surface's top-left corner.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        if self.state.is_active() {
            self.pointer.move_to(Vec2::new(x, y));
        }
    }

    pub fn pointer_left(&mut self) {
        if self.state.is_active() {
            self.pointer.leave();
        }
    }

    /// Maps a tab visibility change onto [`Animator::pause`] / [`Animator::resume`].
    pub fn visibility_changed(&mut self, visible: bool, ticker: &mut impl FrameTicker) {
        if visible {
            self.resume(ticker);
        } else {
            self.pause();
        }
    }

    /// `Running → Paused`. Any other state is left untouched.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            log::debug!("network animation paused");
        }
    }

    /// `Paused → Running`, requesting one frame to restart the loop.
    ///
    /// Resuming while already running requests nothing, so the host never
    /// ends up with two frame requests in flight.
    pub fn resume(&mut self, ticker: &mut impl FrameTicker) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
            log::debug!("network animation resumed");
            ticker.request_frame();
        }
    }

    /// Reseeds the field for the new surface size and clears the pointer.
    ///
    /// Applies while running or paused; the run state itself is unchanged.
    pub fn resized(&mut self, width: f32, height: f32) {
        if !self.state.is_active() {
            return;
        }
        self.field
            .reseed(Vec2::new(width, height), &self.cfg, &mut self.rng);
        self.pointer.leave();
    }

    /// Handles a due frame: update, draw, and request the next one.
    ///
    /// ### Returns
    /// `true` if a frame was computed and drawn, `false` if the animator is
    /// not running (in which case no frame is requested either).
    pub fn frame(&mut self, surface: &mut impl Surface, ticker: &mut impl FrameTicker) -> bool {
        if self.state != RunState::Running {
            return false;
        }
        self.field.step(&self.cfg, &self.pointer);
        render_frame(&self.field, &self.pointer, &self.cfg, surface);
        log::trace!("frame drawn for {} particles", self.field.particles.len());
        ticker.request_frame();
        true
    }

    /// Draws the current state without advancing it.
    ///
    /// For immediate-mode hosts that repaint everything each UI pass and
    /// must keep showing a paused field.
    pub fn redraw(&self, surface: &mut impl Surface) {
        if self.state.is_active() {
            render_frame(&self.field, &self.pointer, &self.cfg, surface);
        }
    }
}
