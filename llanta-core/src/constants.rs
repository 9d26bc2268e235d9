//! Wheel constants
//!
//! Default tuning for the wheel's geometry, gestures and animations. Tuning
//! should happen here (or through configuration overrides) so both profiles
//! stay consistent.

/// Wheel geometry.
pub mod layout {
    /// Diameter of the decorative hub in logical pixels.
    pub const WHEEL_DIAMETER: f32 = 600.0;
    /// Distance between the hub rim and the card orbit.
    pub const ORBIT_MARGIN: f32 = 180.0;
    /// Radius of the card orbit, derived from the hub diameter.
    pub const ORBIT_RADIUS: f32 = WHEEL_DIAMETER / 2.0 + ORBIT_MARGIN;
    /// Horizontal stretch applied to the orbit so side cards spread wider.
    pub const X_STRETCH: f32 = 1.1;
    /// Vertical lift for cards on the lower half (classic layout).
    pub const UPPER_LIFT: f32 = 40.0;
    /// Share of the card's angular offset applied as compensating tilt.
    pub const TILT_FACTOR: f32 = 0.1;
    /// Card width in logical pixels.
    pub const CARD_WIDTH: f32 = 280.0;
    /// Card height in logical pixels.
    pub const CARD_HEIGHT: f32 = 180.0;
}

/// Prominence falloff around the front position(s).
pub mod prominence {
    /// Front angles of the classic layout (both poles).
    pub const CLASSIC_FRONT_ANGLES: [f32; 2] = [90.0, 270.0];
    /// Front angle of the accessible layout (top of the wheel).
    pub const ACCESSIBLE_FRONT_ANGLE: f32 = 270.0;
    /// Classic falloff window in degrees.
    pub const CLASSIC_FALLOFF: f32 = 120.0;
    /// Accessible falloff window in degrees.
    pub const ACCESSIBLE_FALLOFF: f32 = 180.0;
    /// Card scale at zero prominence.
    pub const SCALE_MIN: f32 = 0.8;
    /// Card scale at a front angle.
    pub const SCALE_MAX: f32 = 1.2;
    /// Card opacity at zero prominence.
    pub const OPACITY_MIN: f32 = 0.6;
    /// Card opacity at a front angle.
    pub const OPACITY_MAX: f32 = 1.0;
    /// Stacking order of the least prominent card.
    pub const Z_MIN: i32 = 0;
    /// Stacking order of the front card.
    pub const Z_MAX: i32 = 10;
    /// Extra scale applied to the card under the cursor.
    pub const HOVER_SCALE: f32 = 1.08;
}

/// Pointer gesture damping.
pub mod gesture {
    /// Multiplier from raw pointer rotation to wheel rotation for a mouse.
    pub const MOUSE_DAMPING: f32 = 0.7;
    /// Touch input moves further per gesture, so it is damped harder.
    pub const TOUCH_DAMPING: f32 = 0.5;
}

/// Snap/tween animation defaults.
pub mod snap {
    /// Snap-to-slot duration after a drag (ms).
    pub const DURATION_MS: u64 = 400;
    /// CSS-style control points for the snap curve.
    pub const BEZIER: [f32; 4] = [0.33, 1.0, 0.68, 1.0];
}

/// Autoplay and keyboard stepping defaults.
pub mod autoplay {
    /// Time between automatic advances (ms).
    pub const INTERVAL_MS: u64 = 7_000;
    /// Duration of one animated step (ms). Keyboard steps share it.
    pub const STEP_DURATION_MS: u64 = 4_000;
    /// CSS-style control points for the step curve.
    pub const BEZIER: [f32; 4] = [0.16, 1.0, 0.3, 1.0];
    /// Slack allowed when a timer tick arrives marginally early (ms).
    pub const TICK_TOLERANCE_MS: u64 = 50;
}
