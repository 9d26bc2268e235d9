use llanta_core::{CarouselItem, Easing, WheelProfile, WheelTuning, default_catalog};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigLoadError;

fn default_instruction() -> String {
    "Arrastra para explorar nuestro recorrido".to_string()
}

/// Source that produced the wheel configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "built-in defaults"),
            Self::EnvPath(path) => write!(f, "$LLANTA_CONFIG_PATH ({})", path.display()),
            Self::EnvInline => write!(f, "$LLANTA_CONFIG_JSON"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Top-level wheel settings. Every tuning value is optional and falls back
/// to the selected profile's defaults.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WheelConfig {
    /// `classic` (pointer + autoplay, two poles) or `accessible` (adds
    /// keyboard navigation, single front at the top).
    pub profile: WheelProfile,
    /// Hint shown under the wheel.
    #[serde(default = "default_instruction")]
    pub instruction: String,
    pub tuning: TuningOverrides,
    pub window: WindowConfig,
    /// Cards on the wheel. Empty means the built-in landscape set.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CarouselItem>,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            profile: WheelProfile::default(),
            instruction: default_instruction(),
            tuning: TuningOverrides::default(),
            window: WindowConfig::default(),
            items: Vec::new(),
        }
    }
}

impl WheelConfig {
    /// A config with every tuning value spelled out for `profile`.
    pub fn documented(profile: WheelProfile) -> Self {
        Self {
            profile,
            tuning: TuningOverrides::from_tuning(&WheelTuning::for_profile(profile)),
            items: default_catalog(),
            ..Self::default()
        }
    }

    /// Profile defaults with the overrides applied, validated.
    pub fn resolve_tuning(&self) -> Result<WheelTuning, ConfigLoadError> {
        let mut tuning = WheelTuning::for_profile(self.profile);
        self.tuning.apply(&mut tuning);
        tuning.validate()?;
        Ok(tuning)
    }

    /// Configured items, or the built-in catalog when none are set.
    pub fn catalog(&self) -> Vec<CarouselItem> {
        if self.items.is_empty() {
            default_catalog()
        } else {
            self.items.clone()
        }
    }

    /// Check everything the player needs before building a wheel.
    pub fn validate(&self) -> Result<WheelTuning, ConfigLoadError> {
        if !(self.window.width > 0.0 && self.window.height > 0.0) {
            return Err(ConfigLoadError::WindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        if let Some(index) = self.items.iter().position(|item| item.title.trim().is_empty()) {
            return Err(ConfigLoadError::UntitledItem { index });
        }
        self.resolve_tuning()
    }
}

/// Optional overrides for [`WheelTuning`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TuningOverrides {
    /// Card orbit radius in logical pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orbit_radius: Option<f32>,
    /// Angles (degrees) at which a card is fully prominent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front_angles: Option<Vec<f32>>,
    /// Angular window over which prominence fades out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub falloff: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mouse_damping: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_damping: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap_easing: Option<Easing>,
    /// Duration of autoplay and keyboard steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_easing: Option<Easing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay_interval_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<bool>,
}

impl TuningOverrides {
    /// Spell out every value of `tuning` as an override.
    pub fn from_tuning(tuning: &WheelTuning) -> Self {
        Self {
            orbit_radius: Some(tuning.transform.radius),
            front_angles: Some(tuning.transform.front_angles.clone()),
            falloff: Some(tuning.transform.falloff),
            mouse_damping: Some(tuning.damping.mouse),
            touch_damping: Some(tuning.damping.touch),
            snap_duration_ms: Some(millis(tuning.snap_duration)),
            snap_easing: Some(tuning.snap_easing),
            step_duration_ms: Some(millis(tuning.step_duration)),
            step_easing: Some(tuning.step_easing),
            autoplay_interval_ms: Some(millis(tuning.autoplay_interval)),
            autoplay: Some(tuning.autoplay_enabled),
            keyboard: Some(tuning.keyboard_enabled),
        }
    }

    pub fn apply(&self, tuning: &mut WheelTuning) {
        if let Some(radius) = self.orbit_radius {
            tuning.transform.radius = radius;
        }
        if let Some(angles) = &self.front_angles {
            tuning.transform.front_angles = angles.clone();
        }
        if let Some(falloff) = self.falloff {
            tuning.transform.falloff = falloff;
        }
        if let Some(mouse) = self.mouse_damping {
            tuning.damping.mouse = mouse;
        }
        if let Some(touch) = self.touch_damping {
            tuning.damping.touch = touch;
        }
        if let Some(ms) = self.snap_duration_ms {
            tuning.snap_duration = Duration::from_millis(ms);
        }
        if let Some(easing) = self.snap_easing {
            tuning.snap_easing = easing;
        }
        if let Some(ms) = self.step_duration_ms {
            tuning.step_duration = Duration::from_millis(ms);
        }
        if let Some(easing) = self.step_easing {
            tuning.step_easing = easing;
        }
        if let Some(ms) = self.autoplay_interval_ms {
            tuning.autoplay_interval = Duration::from_millis(ms);
        }
        if let Some(enabled) = self.autoplay {
            tuning.autoplay_enabled = enabled;
        }
        if let Some(enabled) = self.keyboard {
            tuning.keyboard_enabled = enabled;
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Initial window size of the player.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}
