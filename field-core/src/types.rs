use serde::{Deserialize, Serialize};

/// Straight-alpha colour used by draw commands.
///
/// Channels are 8-bit; alpha is a `0.0..=1.0` fraction so that link fades
/// can be expressed without rounding.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same colour with `a` as its alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Lifecycle state of an [`crate::animator::Animator`].
///
/// `Disabled` is terminal: it is entered only at startup when reduced motion
/// is requested, and no signal leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Uninitialized,
    Running,
    Paused,
    Disabled,
}

impl RunState {
    /// `true` for the states in which the animator holds a particle batch.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }
}
