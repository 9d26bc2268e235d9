//! Per-item screen transforms derived from the wheel rotation.
//!
//! Transforms are a pure function of `(rotation, index, count)` and are
//! recomputed every frame; nothing here is stored between frames.

use crate::angle::{HALF_TURN, shortest_arc};
use crate::constants::{layout, prominence};
use crate::slots::item_angle;

/// Inclusive interpolation range.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Value at zero prominence.
    pub min: f32,
    /// Value at full prominence.
    pub max: f32,
}

impl Range {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Linear interpolation, `t = 0` gives `min`.
    pub fn lerp(self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }
}

/// Geometry and prominence settings for transform derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformProfile {
    /// Orbit radius in logical pixels.
    pub radius: f32,
    /// Horizontal stretch of the orbit.
    pub x_stretch: f32,
    /// Upwards shift for cards whose angle is below 180°.
    pub upper_lift: f32,
    /// Angles at which a card is fully prominent. Never empty.
    pub front_angles: Vec<f32>,
    /// Angular distance over which prominence falls from max to min.
    pub falloff: f32,
    pub scale: Range,
    pub opacity: Range,
    pub z_min: i32,
    pub z_max: i32,
    /// Share of the card's offset from its pole applied as tilt.
    pub tilt_factor: f32,
}

impl TransformProfile {
    /// Layout of the first iteration: two poles, tight falloff.
    pub fn classic() -> Self {
        Self {
            radius: layout::ORBIT_RADIUS,
            x_stretch: layout::X_STRETCH,
            upper_lift: layout::UPPER_LIFT,
            front_angles: prominence::CLASSIC_FRONT_ANGLES.to_vec(),
            falloff: prominence::CLASSIC_FALLOFF,
            scale: Range::new(prominence::SCALE_MIN, prominence::SCALE_MAX),
            opacity: Range::new(prominence::OPACITY_MIN, prominence::OPACITY_MAX),
            z_min: prominence::Z_MIN,
            z_max: prominence::Z_MAX,
            tilt_factor: layout::TILT_FACTOR,
        }
    }

    /// Layout of the keyboard-enabled iteration: single front at the top.
    pub fn accessible() -> Self {
        Self {
            upper_lift: 0.0,
            front_angles: vec![prominence::ACCESSIBLE_FRONT_ANGLE],
            falloff: prominence::ACCESSIBLE_FALLOFF,
            ..Self::classic()
        }
    }

    /// The front angle used to pick the activated item.
    pub fn primary_front(&self) -> f32 {
        self.front_angles
            .last()
            .copied()
            .unwrap_or(prominence::ACCESSIBLE_FRONT_ANGLE)
    }

    /// Shortest distance from `angle` to any front angle.
    pub fn front_distance(&self, angle: f32) -> f32 {
        self.front_angles
            .iter()
            .map(|front| shortest_arc(angle, *front))
            .fold(HALF_TURN, f32::min)
    }

    /// Prominence in `[0, 1]`: 1 at a front angle, 0 beyond the falloff.
    pub fn prominence(&self, angle: f32) -> f32 {
        if self.falloff <= 0.0 {
            return 0.0;
        }
        (1.0 - self.front_distance(angle) / self.falloff).clamp(0.0, 1.0)
    }
}

impl Default for TransformProfile {
    fn default() -> Self {
        Self::accessible()
    }
}

/// Derived screen transform of one card, relative to the orbit centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemTransform {
    /// Position of the item in the catalog.
    pub index: usize,
    /// Offset-adjusted angle in `[0, 360)`.
    pub angle: f32,
    /// Horizontal offset from the orbit centre, stretch applied.
    pub x: f32,
    /// Vertical offset from the orbit centre; negative is up.
    pub y: f32,
    pub scale: f32,
    pub opacity: f32,
    /// Stacking order; higher paints later.
    pub z_order: i32,
    /// Card rotation in degrees.
    pub tilt: f32,
    /// Closeness to a front angle, in `[0, 1]`.
    pub prominence: f32,
}

impl ItemTransform {
    /// Whether `(px, py)` (relative to the orbit centre) falls on the card.
    ///
    /// Tilt is ignored; it never exceeds a few degrees.
    pub fn contains(&self, px: f32, py: f32, card_width: f32, card_height: f32) -> bool {
        let half_w = card_width * self.scale / 2.0;
        let half_h = card_height * self.scale / 2.0;
        (px - self.x).abs() <= half_w && (py - self.y).abs() <= half_h
    }
}

/// Derive the transform of item `index` out of `count` at `rotation`.
pub fn derive(
    rotation: f32,
    index: usize,
    count: usize,
    profile: &TransformProfile,
) -> ItemTransform {
    let angle = item_angle(rotation, index, count);
    let rad = angle.to_radians();

    let lift = if angle < HALF_TURN { profile.upper_lift } else { 0.0 };
    let x = profile.radius * rad.cos() * profile.x_stretch;
    let y = profile.radius * rad.sin() - lift;

    let prominence = profile.prominence(angle);
    let z_span = (profile.z_max - profile.z_min) as f32;
    let z_order = profile.z_min + (z_span * prominence).round() as i32;

    let pole_offset = if angle <= HALF_TURN { angle - 90.0 } else { angle - 270.0 };

    ItemTransform {
        index,
        angle,
        x,
        y,
        scale: profile.scale.lerp(prominence),
        opacity: profile.opacity.lerp(prominence),
        z_order,
        tilt: pole_offset * profile.tilt_factor,
        prominence,
    }
}

/// Transforms for every item, in index order.
pub fn derive_all(rotation: f32, count: usize, profile: &TransformProfile) -> Vec<ItemTransform> {
    (0..count)
        .map(|index| derive(rotation, index, count, profile))
        .collect()
}

/// Item indices ordered back-to-front for painting.
pub fn paint_order(transforms: &[ItemTransform]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..transforms.len()).collect();
    order.sort_by(|a, b| {
        let (ta, tb) = (&transforms[*a], &transforms[*b]);
        ta.z_order
            .cmp(&tb.z_order)
            .then(ta.prominence.total_cmp(&tb.prominence))
    });
    order
}

/// Rotation of the decorative hub, which turns with the wheel.
pub fn hub_rotation(rotation: f32) -> f32 {
    rotation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn front_item_is_most_prominent() {
        let profile = TransformProfile::accessible();
        // Item 3 of 4 sits at 270 with no rotation
        let front = derive(0.0, 3, 4, &profile);
        assert!(close(front.angle, 270.0));
        assert!(close(front.scale, profile.scale.max));
        assert!(close(front.opacity, profile.opacity.max));
        assert_eq!(front.z_order, profile.z_max);

        let opposite = derive(0.0, 1, 4, &profile);
        assert!(close(opposite.angle, 90.0));
        assert!(close(opposite.scale, profile.scale.min));
        assert!(close(opposite.opacity, profile.opacity.min));
        assert_eq!(opposite.z_order, profile.z_min);
    }

    #[test]
    fn classic_profile_has_two_poles() {
        let profile = TransformProfile::classic();
        let top = derive(0.0, 3, 4, &profile);
        let bottom = derive(0.0, 1, 4, &profile);
        assert!(close(top.scale, 1.2));
        assert!(close(bottom.scale, 1.2));

        // 90 degrees from either pole: 1 - 90/120 = 0.25 prominence
        let side = derive(0.0, 0, 4, &profile);
        assert!(close(side.prominence, 0.25));
        assert!(close(side.scale, 0.8 + 0.25 * 0.4));
        assert!(close(side.opacity, 0.6 + 0.25 * 0.4));
        assert_eq!(side.z_order, 3);
    }

    #[test]
    fn positions_follow_the_orbit() {
        let profile = TransformProfile::classic();
        let right = derive(0.0, 0, 4, &profile);
        assert!(close(right.x, profile.radius * profile.x_stretch));
        // 0 < 180, so the classic lift applies
        assert!(close(right.y, -profile.upper_lift));

        let top = derive(0.0, 3, 4, &profile);
        assert!(close(top.x, 0.0));
        assert!(close(top.y, -profile.radius));
    }

    #[test]
    fn tilt_is_relative_to_nearest_pole() {
        let profile = TransformProfile::classic();
        let t = derive(30.0, 3, 4, &profile);
        // 300 degrees -> 30 past the top pole
        assert!(close(t.tilt, 3.0));
        let t = derive(0.0, 0, 4, &profile);
        assert!(close(t.tilt, -9.0));
    }

    #[test]
    fn paint_order_puts_front_last() {
        let profile = TransformProfile::accessible();
        let transforms = derive_all(0.0, 4, &profile);
        let order = paint_order(&transforms);
        assert_eq!(order.first(), Some(&1));
        assert_eq!(order.last(), Some(&3));
    }

    #[test]
    fn hit_test_respects_scale() {
        let profile = TransformProfile::accessible();
        let front = derive(0.0, 3, 4, &profile);
        assert!(front.contains(front.x + 160.0, front.y, 280.0, 180.0));
        assert!(!front.contains(front.x + 200.0, front.y, 280.0, 180.0));
    }
}
