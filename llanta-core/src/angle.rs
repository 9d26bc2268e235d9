//! Degree arithmetic shared by the wheel modules.
//!
//! All angles are in degrees. Screen coordinates grow downwards, so a
//! positive angle turns clockwise on screen.

/// One full turn.
pub const FULL_TURN: f32 = 360.0;

/// Half a turn; the largest shortest-path distance between two angles.
pub const HALF_TURN: f32 = 180.0;

/// Map any finite angle into `[0, 360)`.
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= FULL_TURN { 0.0 } else { wrapped }
}

/// Wrap a raw angular delta into `[-180, 180]`, picking the shortest path.
pub fn wrap_delta(delta: f32) -> f32 {
    let mut wrapped = normalize_degrees(delta);
    if wrapped > HALF_TURN {
        wrapped -= FULL_TURN;
    }
    wrapped
}

/// Unsigned shortest arc between two angles, in `[0, 180]`.
pub fn shortest_arc(a: f32, b: f32) -> f32 {
    wrap_delta(a - b).abs()
}

/// Angle of a pointer offset relative to the widget centre.
pub fn pointer_angle(dx: f32, dy: f32) -> f32 {
    dy.atan2(dx).to_degrees()
}
