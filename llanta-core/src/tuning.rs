//! Wheel profiles and the tuning bundle consumed by [`crate::Wheel`].

use std::time::Duration;

use crate::constants::{autoplay, snap};
use crate::easing::Easing;
use crate::error::{Result, WheelError};
use crate::gesture::Damping;
use crate::transform::TransformProfile;

/// The two iterations of the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WheelProfile {
    /// Pointer and autoplay only, prominence at both poles.
    Classic,
    /// Adds keyboard navigation and a single front position at the top.
    #[default]
    Accessible,
}

impl WheelProfile {
    pub const ALL: [Self; 2] = [Self::Classic, Self::Accessible];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Accessible => "accessible",
        }
    }
}

impl std::fmt::Display for WheelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WheelProfile {
    type Err = WheelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "accessible" => Ok(Self::Accessible),
            other => Err(WheelError::InvalidTuning(format!("unknown profile '{other}'"))),
        }
    }
}

/// Everything the wheel needs besides its items.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelTuning {
    pub transform: TransformProfile,
    pub damping: Damping,
    pub snap_duration: Duration,
    pub snap_easing: Easing,
    pub step_duration: Duration,
    pub step_easing: Easing,
    pub autoplay_interval: Duration,
    pub autoplay_enabled: bool,
    pub keyboard_enabled: bool,
}

impl WheelTuning {
    pub fn for_profile(profile: WheelProfile) -> Self {
        let transform = match profile {
            WheelProfile::Classic => TransformProfile::classic(),
            WheelProfile::Accessible => TransformProfile::accessible(),
        };
        Self {
            transform,
            damping: Damping::default(),
            snap_duration: Duration::from_millis(snap::DURATION_MS),
            snap_easing: Easing::bezier(snap::BEZIER),
            step_duration: Duration::from_millis(autoplay::STEP_DURATION_MS),
            step_easing: Easing::bezier(autoplay::BEZIER),
            autoplay_interval: Duration::from_millis(autoplay::INTERVAL_MS),
            autoplay_enabled: true,
            keyboard_enabled: matches!(profile, WheelProfile::Accessible),
        }
    }

    /// Reject values the wheel cannot animate or lay out.
    pub fn validate(&self) -> Result<()> {
        let t = &self.transform;
        let finite = [
            t.radius,
            t.x_stretch,
            t.upper_lift,
            t.falloff,
            t.scale.min,
            t.scale.max,
            t.opacity.min,
            t.opacity.max,
            t.tilt_factor,
            self.damping.mouse,
            self.damping.touch,
        ];
        if finite.iter().any(|v| !v.is_finite()) {
            return Err(invalid("tuning values must be finite"));
        }
        if t.radius <= 0.0 {
            return Err(invalid("orbit radius must be positive"));
        }
        if t.falloff <= 0.0 || t.falloff > 180.0 {
            return Err(invalid("falloff must be within (0, 180] degrees"));
        }
        if t.front_angles.is_empty() {
            return Err(invalid("at least one front angle is required"));
        }
        if t.front_angles.iter().any(|a| !a.is_finite()) {
            return Err(invalid("front angles must be finite"));
        }
        if t.scale.min <= 0.0 || t.scale.min > t.scale.max {
            return Err(invalid("scale range must be positive and ordered"));
        }
        if !(0.0..=1.0).contains(&t.opacity.min)
            || !(0.0..=1.0).contains(&t.opacity.max)
            || t.opacity.min > t.opacity.max
        {
            return Err(invalid("opacity range must be ordered within [0, 1]"));
        }
        if t.z_min > t.z_max {
            return Err(invalid("z range must be ordered"));
        }
        for (name, value) in [("mouse", self.damping.mouse), ("touch", self.damping.touch)] {
            if value <= 0.0 || value > 1.0 {
                return Err(invalid(&format!("{name} damping must be within (0, 1]")));
            }
        }
        if !self.snap_easing.is_valid() || !self.step_easing.is_valid() {
            return Err(invalid("easing control points must keep x within [0, 1]"));
        }
        if self.autoplay_enabled && self.autoplay_interval.is_zero() {
            return Err(invalid("autoplay interval must be positive"));
        }
        Ok(())
    }
}

impl Default for WheelTuning {
    fn default() -> Self {
        Self::for_profile(WheelProfile::default())
    }
}

fn invalid(message: &str) -> WheelError {
    WheelError::InvalidTuning(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_defaults_are_valid() {
        for profile in WheelProfile::ALL {
            WheelTuning::for_profile(profile).validate().unwrap();
        }
    }

    #[test]
    fn keyboard_follows_profile() {
        assert!(!WheelTuning::for_profile(WheelProfile::Classic).keyboard_enabled);
        assert!(WheelTuning::for_profile(WheelProfile::Accessible).keyboard_enabled);
    }

    #[test]
    fn parses_profile_names() {
        assert_eq!("Classic".parse::<WheelProfile>(), Ok(WheelProfile::Classic));
        assert_eq!(" accessible ".parse::<WheelProfile>(), Ok(WheelProfile::Accessible));
        assert!("wobbly".parse::<WheelProfile>().is_err());
    }

    #[test]
    fn rejects_bad_damping() {
        let mut tuning = WheelTuning::default();
        tuning.damping.touch = 0.0;
        assert!(matches!(tuning.validate(), Err(WheelError::InvalidTuning(_))));
    }

    #[test]
    fn rejects_zero_autoplay_interval() {
        let mut tuning = WheelTuning::default();
        tuning.autoplay_interval = Duration::ZERO;
        assert!(tuning.validate().is_err());
        tuning.autoplay_enabled = false;
        assert!(tuning.validate().is_ok());
    }
}
