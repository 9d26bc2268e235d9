use thiserror::Error;

/// Errors raised while building or configuring a wheel.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WheelError {
    /// A wheel was asked for with no items.
    #[error("Carousel needs at least one item")]
    EmptyCatalog,

    /// A tuning value is out of range; the message names it.
    #[error("Invalid tuning: {0}")]
    InvalidTuning(String),
}

/// Result alias for wheel construction and parsing.
pub type Result<T> = std::result::Result<T, WheelError>;
