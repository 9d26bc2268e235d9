//! Time-based tween owning the in-flight rotation animation.
//!
//! Snapping after a drag, autoplay advances and keyboard steps all go
//! through one [`RotationAnimator`]. Starting a new tween supersedes the
//! previous one; callers pass the currently displayed rotation as the start
//! value so a superseded tween never produces a visible jump.

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// What started the in-flight animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationReason {
    Snap,
    Autoplay,
    Keyboard,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
    reason: AnimationReason,
}

#[derive(Debug, Clone, Default)]
pub struct RotationAnimator {
    active: Option<Tween>,
}

impl RotationAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Target of the in-flight animation.
    pub fn target(&self) -> Option<f32> {
        self.active.map(|tween| tween.target)
    }

    pub fn reason(&self) -> Option<AnimationReason> {
        self.active.map(|tween| tween.reason)
    }

    /// Start a tween, replacing any animation already in flight.
    pub fn start(
        &mut self,
        from: f32,
        to: f32,
        duration: Duration,
        easing: Easing,
        reason: AnimationReason,
        now: Instant,
    ) {
        if let Some(previous) = self.active {
            log::debug!(
                "Superseding {:?} animation (target {:.1}) with {:?} to {:.1}",
                previous.reason,
                previous.target,
                reason,
                to
            );
        }
        self.active = Some(Tween {
            start: from,
            target: to,
            started_at: now,
            duration,
            easing,
            reason,
        });
    }

    /// Returns Some(next_rotation) when animating, or None when finished/inactive.
    ///
    /// The sample that reaches the end returns the exact target and
    /// deactivates the animator.
    pub fn sample(&mut self, now: Instant) -> Option<f32> {
        let tween = self.active?;
        let elapsed = now.saturating_duration_since(tween.started_at);
        if elapsed >= tween.duration {
            self.active = None;
            return Some(tween.target);
        }
        let t = (elapsed.as_secs_f32() / tween.duration.as_secs_f32()).clamp(0.0, 1.0);
        let eased = tween.easing.apply(t);
        Some(tween.start + (tween.target - tween.start) * eased)
    }

    /// Cancel the current animation immediately.
    pub fn cancel(&mut self) {
        self.active = None;
    }
}
