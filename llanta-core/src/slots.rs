//! Slot geometry: items sit evenly spaced at `360 / count` degrees.

use crate::angle::{FULL_TURN, normalize_degrees, shortest_arc};
use crate::error::{Result, WheelError};

/// Angular spacing between adjacent items.
pub fn slot_degrees(count: usize) -> Result<f32> {
    if count == 0 {
        return Err(WheelError::EmptyCatalog);
    }
    Ok(FULL_TURN / count as f32)
}

/// Base angular offset of item `index` before any rotation is applied.
pub fn base_offset(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 * (FULL_TURN / count as f32)
}

/// Offset-adjusted angle of item `index` for the given rotation, in `[0, 360)`.
pub fn item_angle(rotation: f32, index: usize, count: usize) -> f32 {
    normalize_degrees(rotation + base_offset(index, count))
}

/// Nearest slot multiple to `rotation`. A rotation exactly half way between
/// two slots goes to the higher one, also for negative rotations.
pub fn snap_to_slot(rotation: f32, count: usize) -> f32 {
    match slot_degrees(count) {
        Ok(slot) => (rotation / slot + 0.5).floor() * slot,
        Err(_) => rotation,
    }
}

/// Index of the item closest to `front_angle`. Ties go to the lower index.
pub fn front_item(rotation: f32, count: usize, front_angle: f32) -> Option<usize> {
    (0..count)
        .map(|index| {
            (index, shortest_arc(item_angle(rotation, index, count), front_angle))
        })
        .fold(None, |best: Option<(usize, f32)>, (index, distance)| match best {
            Some((_, best_distance)) if best_distance <= distance => best,
            _ => Some((index, distance)),
        })
        .map(|(index, _)| index)
}
