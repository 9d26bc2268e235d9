//! The wheel: one owned rotation value driving every card.
//!
//! Input handlers (pointer, keyboard, autoplay timer) and the frame clock all
//! funnel through [`Wheel`]. The host re-renders whenever a handler reports a
//! change; card transforms are derived on demand from the rotation.

use std::time::{Duration, Instant};

use crate::angle::FULL_TURN;
use crate::animation::{AnimationReason, RotationAnimator};
use crate::autoplay::Autoplay;
use crate::catalog::{CarouselItem, default_catalog};
use crate::easing::Easing;
use crate::error::{Result, WheelError};
use crate::gesture::{DragTracker, PointerKind};
use crate::keyboard::NavKey;
use crate::slots::{front_item, slot_degrees, snap_to_slot};
use crate::transform::{self, ItemTransform};
use crate::tuning::WheelTuning;

/// Notable outcome of an input handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelEvent {
    /// A drag ended and the wheel is snapping to `target`.
    Snapped { target: f32 },
    /// Autoplay or the keyboard started a one-slot step towards `target`.
    Stepped { target: f32, reason: AnimationReason },
    /// The front item was activated from the keyboard.
    Activated { index: usize },
}

#[derive(Debug, Clone)]
pub struct Wheel {
    items: Vec<CarouselItem>,
    tuning: WheelTuning,
    slot: f32,
    rotation: f32,
    drag: DragTracker,
    animator: RotationAnimator,
    autoplay: Autoplay,
}

impl Default for Wheel {
    /// The built-in catalog with the default profile. Infallible, so hosts
    /// can fall back to it when a configured wheel is rejected.
    fn default() -> Self {
        let items = default_catalog();
        let slot = FULL_TURN / items.len() as f32;
        Self::assemble(items, WheelTuning::default(), slot, Instant::now())
    }
}

impl Wheel {
    pub fn new(items: Vec<CarouselItem>, tuning: WheelTuning) -> Result<Self> {
        Self::new_at(items, tuning, Instant::now())
    }

    /// Build a wheel whose autoplay interval starts at `now`.
    pub fn new_at(items: Vec<CarouselItem>, tuning: WheelTuning, now: Instant) -> Result<Self> {
        if items.is_empty() {
            return Err(WheelError::EmptyCatalog);
        }
        tuning.validate()?;
        let slot = slot_degrees(items.len())?;

        log::debug!(
            "Wheel built with {} items ({:.1} deg per slot, autoplay every {:?})",
            items.len(),
            slot,
            tuning.autoplay_interval
        );

        Ok(Self::assemble(items, tuning, slot, now))
    }

    // Callers have checked `items` and `tuning`.
    fn assemble(items: Vec<CarouselItem>, tuning: WheelTuning, slot: f32, now: Instant) -> Self {
        Self {
            slot,
            rotation: 0.0,
            drag: DragTracker::new(tuning.damping),
            animator: RotationAnimator::new(),
            autoplay: Autoplay::new(tuning.autoplay_interval, tuning.autoplay_enabled, now),
            items,
            tuning,
        }
    }

    // ========== QUERIES ==========

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn slot(&self) -> f32 {
        self.slot
    }

    pub fn items(&self) -> &[CarouselItem] {
        &self.items
    }

    pub fn tuning(&self) -> &WheelTuning {
        &self.tuning
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_active()
    }

    /// Held for the duration of a drag.
    pub fn scroll_locked(&self) -> bool {
        self.drag.scroll_locked()
    }

    /// Whether the host should keep its autoplay timer running.
    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_armed() && !self.drag.is_active()
    }

    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay.interval()
    }

    pub fn keyboard_enabled(&self) -> bool {
        self.tuning.keyboard_enabled
    }

    /// Index of the item closest to the primary front position.
    pub fn front_index(&self) -> usize {
        front_item(
            self.rotation,
            self.items.len(),
            self.tuning.transform.primary_front(),
        )
        .unwrap_or(0)
    }

    /// Card transforms for the current rotation, in index order.
    pub fn transforms(&self) -> Vec<ItemTransform> {
        transform::derive_all(self.rotation, self.items.len(), &self.tuning.transform)
    }

    /// Rotation of the decorative hub.
    pub fn hub_rotation(&self) -> f32 {
        transform::hub_rotation(self.rotation)
    }

    // ========== POINTER ==========

    /// Begin a drag at an offset relative to the widget centre.
    ///
    /// The drag takes ownership of the rotation: any in-flight animation is
    /// frozen where it is and autoplay is paused.
    pub fn pointer_down(&mut self, dx: f32, dy: f32, kind: PointerKind, now: Instant) {
        if let Some(current) = self.animator.sample(now) {
            self.rotation = current;
        }
        self.animator.cancel();
        self.drag.begin(dx, dy, self.rotation, kind);
        self.autoplay.pause();
        log::debug!("Drag started ({kind:?}) at rotation {:.1}", self.rotation);
    }

    /// Follow the pointer. Returns true if the rotation changed.
    pub fn pointer_move(&mut self, dx: f32, dy: f32) -> bool {
        match self.drag.track(dx, dy) {
            Some(rotation) if rotation != self.rotation => {
                self.rotation = rotation;
                true
            }
            _ => false,
        }
    }

    /// End the drag and snap to the nearest slot.
    pub fn pointer_up(&mut self, now: Instant) -> Option<WheelEvent> {
        self.drag.finish()?;
        self.autoplay.resume(now);

        let target = snap_to_slot(self.rotation, self.items.len());
        self.animate_to(
            target,
            self.tuning.snap_duration,
            self.tuning.snap_easing,
            AnimationReason::Snap,
            now,
        );
        log::debug!("Drag released at {:.1}, snapping to {target:.1}", self.rotation);
        Some(WheelEvent::Snapped { target })
    }

    // ========== KEYBOARD & AUTOPLAY ==========

    pub fn key(&mut self, key: NavKey, now: Instant) -> Option<WheelEvent> {
        if !self.tuning.keyboard_enabled || self.drag.is_active() {
            return None;
        }
        match key.direction() {
            Some(direction) => Some(self.step(direction, AnimationReason::Keyboard, now)),
            None => {
                let index = self.front_index();
                log::info!("Activated item {index} ({})", self.items[index].title);
                Some(WheelEvent::Activated { index })
            }
        }
    }

    /// Handle a tick of the host's autoplay timer.
    pub fn autoplay_tick(&mut self, now: Instant) -> Option<WheelEvent> {
        if self.drag.is_active() || !self.autoplay.fire(now) {
            return None;
        }
        Some(self.step(1.0, AnimationReason::Autoplay, now))
    }

    // ========== FRAME CLOCK ==========

    /// Sample the in-flight animation. Returns true if the rotation changed.
    pub fn advance(&mut self, now: Instant) -> bool {
        match self.animator.sample(now) {
            Some(rotation) => {
                let changed = rotation != self.rotation;
                self.rotation = rotation;
                changed
            }
            None => false,
        }
    }

    /// Start a one-slot step. Steps chain from the in-flight target so
    /// repeated triggers always land on slot boundaries.
    fn step(&mut self, direction: f32, reason: AnimationReason, now: Instant) -> WheelEvent {
        let base = self
            .animator
            .target()
            .unwrap_or_else(|| snap_to_slot(self.rotation, self.items.len()));
        let target = base + direction * self.slot;
        self.animate_to(
            target,
            self.tuning.step_duration,
            self.tuning.step_easing,
            reason,
            now,
        );
        log::debug!("{reason:?} step to {target:.1}");
        WheelEvent::Stepped { target, reason }
    }

    fn animate_to(
        &mut self,
        target: f32,
        duration: Duration,
        easing: Easing,
        reason: AnimationReason,
        now: Instant,
    ) {
        if let Some(current) = self.animator.sample(now) {
            self.rotation = current;
        }
        self.animator
            .start(self.rotation, target, duration, easing, reason, now);
    }
}
