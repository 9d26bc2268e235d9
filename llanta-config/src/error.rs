use llanta_core::WheelError;
use thiserror::Error;

/// Validation failures for a loaded [`crate::WheelConfig`].
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The merged tuning was rejected by the wheel.
    #[error("invalid wheel tuning: {0}")]
    Tuning(#[from] WheelError),

    #[error("window size must be positive, got {width}x{height}")]
    WindowSize { width: f32, height: f32 },

    /// Item `index` has a blank title.
    #[error("item {index} has an empty title")]
    UntitledItem { index: usize },
}
