//! Easing curves for rotation tweens.

use crate::error::{Result, WheelError};

/// Easing function applied to normalized animation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Build a cubic Bézier easing from `[x1, y1, x2, y2]` control points.
    pub const fn bezier(points: [f32; 4]) -> Self {
        Self::CubicBezier(points[0], points[1], points[2], points[3])
    }

    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Self::CubicBezier(x1, y1, x2, y2) => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let s = solve_bezier_x(t, x1, x2);
                bezier_component(s, y1, y2)
            }
        }
    }

    /// Control points must keep x inside `[0, 1]` so the curve is a function of time.
    pub fn is_valid(self) -> bool {
        match self {
            Self::CubicBezier(x1, y1, x2, y2) => {
                [x1, y1, x2, y2].iter().all(|v| v.is_finite())
                    && (0.0..=1.0).contains(&x1)
                    && (0.0..=1.0).contains(&x2)
            }
            _ => true,
        }
    }
}

impl std::fmt::Display for Easing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::EaseIn => write!(f, "ease-in"),
            Self::EaseOut => write!(f, "ease-out"),
            Self::EaseInOut => write!(f, "ease-in-out"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl std::str::FromStr for Easing {
    type Err = WheelError;

    /// Accepts CSS timing-function names and `cubic-bezier(x1, y1, x2, y2)`.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase().replace('_', "-");
        match name.as_str() {
            "linear" => return Ok(Self::Linear),
            "ease-in" => return Ok(Self::EaseIn),
            "ease-out" => return Ok(Self::EaseOut),
            "ease-in-out" => return Ok(Self::EaseInOut),
            _ => {}
        }

        let args = name
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| WheelError::InvalidTuning(format!("unknown easing '{s}'")))?;
        let points = args
            .split(',')
            .map(|part| part.trim().parse::<f32>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|err| WheelError::InvalidTuning(format!("bad easing '{s}': {err}")))?;
        let [x1, y1, x2, y2] = points[..] else {
            return Err(WheelError::InvalidTuning(format!(
                "cubic-bezier needs four control points, got '{s}'"
            )));
        };
        let easing = Self::CubicBezier(x1, y1, x2, y2);
        if !easing.is_valid() {
            return Err(WheelError::InvalidTuning(format!(
                "cubic-bezier x control points must be within [0, 1]: '{s}'"
            )));
        }
        Ok(easing)
    }
}

impl TryFrom<String> for Easing {
    type Error = WheelError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Easing> for String {
    fn from(value: Easing) -> Self {
        value.to_string()
    }
}

// One axis of a cubic Bézier with endpoints fixed at 0 and 1.
fn bezier_component(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_slope(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Find the curve parameter whose x equals `x`.
fn solve_bezier_x(x: f32, x1: f32, x2: f32) -> f32 {
    const EPSILON: f32 = 1e-6;

    let mut s = x;
    for _ in 0..8 {
        let err = bezier_component(s, x1, x2) - x;
        if err.abs() < EPSILON {
            return s;
        }
        let slope = bezier_slope(s, x1, x2);
        if slope.abs() < EPSILON {
            break;
        }
        s -= err / slope;
    }

    // Newton stalled; x(s) is monotonic for valid curves so bisection converges
    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = bezier_component(s, x1, x2);
        if (value - x).abs() < EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{autoplay, snap};

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::bezier(snap::BEZIER),
        Easing::bezier(autoplay::BEZIER),
    ];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing}");
        }
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn linear_bezier_matches_linear() {
        let curve = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for step in 1..10 {
            let t = step as f32 / 10.0;
            assert!((curve.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn ease_out_curves_lead_linear_progress() {
        for easing in [Easing::bezier(snap::BEZIER), Easing::bezier(autoplay::BEZIER)] {
            assert!(easing.apply(0.25) > 0.25);
            assert!(easing.apply(0.5) > 0.5);
        }
    }

    #[test]
    fn bezier_is_monotonic_for_presets() {
        for easing in [Easing::bezier(snap::BEZIER), Easing::bezier(autoplay::BEZIER)] {
            let mut last = 0.0;
            for step in 0..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value + 1e-4 >= last);
                last = value;
            }
        }
    }

    #[test]
    fn parses_css_timing_functions() {
        assert_eq!("ease-out".parse::<Easing>(), Ok(Easing::EaseOut));
        assert_eq!("ease_in_out".parse::<Easing>(), Ok(Easing::EaseInOut));
        assert_eq!(
            "cubic-bezier(0.33, 1, 0.68, 1)".parse::<Easing>(),
            Ok(Easing::bezier(snap::BEZIER))
        );
        assert!("cubic-bezier(0.3, 1)".parse::<Easing>().is_err());
        assert!("cubic-bezier(2, 0, 0.5, 1)".parse::<Easing>().is_err());
        assert!("bouncy".parse::<Easing>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for easing in ALL {
            assert_eq!(easing.to_string().parse::<Easing>(), Ok(easing));
        }
    }

    #[test]
    fn rejects_control_points_outside_time_range() {
        assert!(!Easing::CubicBezier(1.5, 0.0, 0.5, 1.0).is_valid());
        assert!(Easing::bezier(snap::BEZIER).is_valid());
    }
}
