//! Drag-to-rotate gesture tracking.

use crate::angle::{pointer_angle, wrap_delta};
use crate::constants::gesture;

/// Input device that started a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerKind {
    #[default]
    Mouse,
    Touch,
}

/// Damping factors per input device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Damping {
    pub mouse: f32,
    pub touch: f32,
}

impl Damping {
    pub fn factor(&self, kind: PointerKind) -> f32 {
        match kind {
            PointerKind::Mouse => self.mouse,
            PointerKind::Touch => self.touch,
        }
    }
}

impl Default for Damping {
    fn default() -> Self {
        Self {
            mouse: gesture::MOUSE_DAMPING,
            touch: gesture::TOUCH_DAMPING,
        }
    }
}

/// State captured on pointer-down and consumed on pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub start_pointer_angle: f32,
    pub start_rotation: f32,
    pub input: PointerKind,
}

#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    damping: Damping,
    session: Option<DragSession>,
    /// Held while a drag is active so the host stops scrolling underneath.
    scroll_locked: bool,
}

impl DragTracker {
    pub fn new(damping: Damping) -> Self {
        Self {
            damping,
            ..Default::default()
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Start a session from a pointer offset relative to the widget centre.
    ///
    /// A second pointer-down while a session is active restarts it.
    pub fn begin(&mut self, dx: f32, dy: f32, rotation: f32, input: PointerKind) {
        self.session = Some(DragSession {
            start_pointer_angle: pointer_angle(dx, dy),
            start_rotation: rotation,
            input,
        });
        self.scroll_locked = true;
    }

    /// Rotation for the current pointer offset, or `None` without a session.
    pub fn track(&self, dx: f32, dy: f32) -> Option<f32> {
        let session = self.session?;
        let delta = self.delta(session, dx, dy);
        Some(session.start_rotation + delta * self.damping.factor(session.input))
    }

    /// Wrapped, undamped pointer delta since the session began.
    pub fn raw_delta(&self, dx: f32, dy: f32) -> Option<f32> {
        self.session.map(|session| self.delta(session, dx, dy))
    }

    /// End the session and release the scroll lock.
    pub fn finish(&mut self) -> Option<DragSession> {
        self.scroll_locked = false;
        self.session.take()
    }

    fn delta(&self, session: DragSession, dx: f32, dy: f32) -> f32 {
        wrap_delta(pointer_angle(dx, dy) - session.start_pointer_angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn move_without_session_is_ignored() {
        let tracker = DragTracker::default();
        assert_eq!(tracker.track(10.0, 10.0), None);
        assert!(!tracker.scroll_locked());
    }

    #[test]
    fn mouse_drag_is_damped() {
        let mut tracker = DragTracker::default();
        tracker.begin(100.0, 0.0, 30.0, PointerKind::Mouse);
        // Quarter turn clockwise on screen
        let rotation = tracker.track(0.0, 100.0).unwrap();
        assert!(close(rotation, 30.0 + 90.0 * 0.7));
    }

    #[test]
    fn touch_uses_its_own_damping() {
        let mut tracker = DragTracker::default();
        tracker.begin(100.0, 0.0, 0.0, PointerKind::Touch);
        let rotation = tracker.track(0.0, 100.0).unwrap();
        assert!(close(rotation, 90.0 * gesture::TOUCH_DAMPING));
    }

    #[test]
    fn crossing_the_atan2_seam_does_not_jump() {
        let mut tracker = DragTracker::default();
        // Just above the negative x axis (~ -179 degrees)
        tracker.begin(-100.0, -2.0, 0.0, PointerKind::Mouse);
        // Just below it (~ +179 degrees): raw delta ~358, wrapped ~ -2
        let delta = tracker.raw_delta(-100.0, 2.0).unwrap();
        assert!(delta.abs() < 5.0, "delta {delta}");
    }

    #[test]
    fn finish_releases_scroll_lock() {
        let mut tracker = DragTracker::default();
        tracker.begin(1.0, 0.0, 0.0, PointerKind::Mouse);
        assert!(tracker.scroll_locked());
        let session = tracker.finish().unwrap();
        assert_eq!(session.start_rotation, 0.0);
        assert!(!tracker.scroll_locked());
        assert!(tracker.finish().is_none());
    }
}
