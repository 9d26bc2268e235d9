//! Keyboard navigation commands.

/// Navigation intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Rotate one slot backwards (ArrowLeft).
    StepBackward,
    /// Rotate one slot forwards (ArrowRight), same direction as autoplay.
    StepForward,
    /// Activate the item at the front (Enter / Space).
    Activate,
}

impl NavKey {
    /// Slot direction of a step, or `None` for activation.
    pub fn direction(self) -> Option<f32> {
        match self {
            Self::StepBackward => Some(-1.0),
            Self::StepForward => Some(1.0),
            Self::Activate => None,
        }
    }
}
