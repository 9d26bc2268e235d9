//! Configuration library for the Llanta wheel.
//!
//! Centralizes the wheel's tunable settings: the serde models, the
//! environment/file loader and the validation that turns a loaded config
//! into a [`llanta_core::WheelTuning`]. The `llanta-config` binary and the
//! player both go through this crate so defaults live in one place.

pub mod error;
pub mod loader;
pub mod models;

pub use error::ConfigLoadError;
pub use loader::{CONFIG_JSON_ENV, CONFIG_PATH_ENV};
pub use models::{ConfigSource, TuningOverrides, WheelConfig, WindowConfig};
