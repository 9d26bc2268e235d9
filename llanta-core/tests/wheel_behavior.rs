use std::time::{Duration, Instant};

use llanta_core::slots::{base_offset, item_angle};
use llanta_core::{
    AnimationReason, CarouselItem, NavKey, PointerKind, Wheel, WheelEvent, WheelProfile,
    WheelTuning, default_catalog,
};

fn secs(value: u64) -> Duration {
    Duration::from_secs(value)
}

fn accessible_wheel(now: Instant) -> Wheel {
    Wheel::new_at(
        default_catalog(),
        WheelTuning::for_profile(WheelProfile::Accessible),
        now,
    )
    .expect("default wheel")
}

/// Run the frame clock until the in-flight animation settles.
fn settle(wheel: &mut Wheel, from: Instant) -> Instant {
    let mut now = from;
    while wheel.is_animating() {
        now += Duration::from_millis(16);
        wheel.advance(now);
    }
    now
}

#[test]
fn four_items_sit_a_quarter_turn_apart() {
    let wheel = accessible_wheel(Instant::now());
    assert_eq!(wheel.slot(), 90.0);
    let angles: Vec<f32> = wheel.transforms().iter().map(|t| t.angle).collect();
    assert_eq!(angles, vec![0.0, 90.0, 180.0, 270.0]);
}

#[test]
fn one_autoplay_tick_advances_one_slot() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);

    let event = wheel.autoplay_tick(t0 + secs(7));
    assert_eq!(
        event,
        Some(WheelEvent::Stepped {
            target: 90.0,
            reason: AnimationReason::Autoplay
        })
    );
    settle(&mut wheel, t0 + secs(7));

    assert_eq!(wheel.rotation(), 90.0);
    let angles: Vec<f32> = (0..4).map(|i| item_angle(wheel.rotation(), i, 4)).collect();
    assert_eq!(angles, vec![90.0, 180.0, 270.0, 0.0]);
    // Item 2 rotated into the front position
    assert_eq!(wheel.front_index(), 2);
}

#[test]
fn undisturbed_autoplay_advances_exactly_one_slot_per_cycle() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);

    let mut now = t0;
    for cycle in 1..=5 {
        now += secs(7);
        assert!(wheel.autoplay_tick(now).is_some(), "cycle {cycle}");
        settle(&mut wheel, now);
        assert_eq!(wheel.rotation(), cycle as f32 * 90.0);
    }
}

#[test]
fn early_timer_ticks_do_not_advance() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);
    assert_eq!(wheel.autoplay_tick(t0 + secs(2)), None);
    assert_eq!(wheel.rotation(), 0.0);
}

#[test]
fn drag_release_snaps_to_nearest_slot() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);

    // Pointer starts on the positive x axis and sweeps 80 degrees clockwise
    wheel.pointer_down(100.0, 0.0, PointerKind::Mouse, t0);
    let rad = 80.0_f32.to_radians();
    assert!(wheel.pointer_move(100.0 * rad.cos(), 100.0 * rad.sin()));
    let dragged = wheel.rotation();
    assert!((dragged - 56.0).abs() < 1e-3, "80 * 0.7 = {dragged}");

    let event = wheel.pointer_up(t0 + Duration::from_millis(500));
    assert_eq!(event, Some(WheelEvent::Snapped { target: 90.0 }));
    settle(&mut wheel, t0 + Duration::from_millis(500));
    assert_eq!(wheel.rotation(), 90.0);
}

#[test]
fn small_drag_snaps_back() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);
    wheel.pointer_down(0.0, -100.0, PointerKind::Touch, t0);
    let rad = (-90.0_f32 + 30.0).to_radians();
    wheel.pointer_move(100.0 * rad.cos(), 100.0 * rad.sin());
    // 30 * 0.5 = 15 degrees, nearest slot is 0
    assert_eq!(wheel.pointer_up(t0), Some(WheelEvent::Snapped { target: 0.0 }));
    settle(&mut wheel, t0);
    assert_eq!(wheel.rotation(), 0.0);
}

#[test]
fn drag_during_autoplay_takes_over_the_rotation() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);
    let tick = t0 + secs(7);
    wheel.autoplay_tick(tick);
    wheel.advance(tick + secs(1));
    let frozen = wheel.rotation();
    assert!(frozen > 0.0 && frozen < 90.0);

    wheel.pointer_down(100.0, 0.0, PointerKind::Mouse, tick + secs(1));
    assert!(!wheel.is_animating());
    // No pointer movement yet: the rotation stays where the animation was
    assert!(!wheel.pointer_move(100.0, 0.0));
    assert_eq!(wheel.rotation(), frozen);
    assert!(!wheel.autoplay_armed());
}

#[test]
fn autoplay_restarts_after_release() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);
    wheel.pointer_down(100.0, 0.0, PointerKind::Mouse, t0 + secs(5));
    let released = t0 + secs(6);
    wheel.pointer_up(released);
    settle(&mut wheel, released);

    // Seven seconds from start, but only one since release
    assert_eq!(wheel.autoplay_tick(t0 + secs(7)), None);
    assert!(wheel.autoplay_tick(released + secs(7)).is_some());
}

#[test]
fn keyboard_steps_both_ways_and_activates_front() {
    let t0 = Instant::now();
    let mut wheel = accessible_wheel(t0);

    wheel.key(NavKey::StepBackward, t0);
    let now = settle(&mut wheel, t0);
    assert_eq!(wheel.rotation(), -90.0);
    assert_eq!(
        wheel.key(NavKey::Activate, now),
        Some(WheelEvent::Activated { index: 0 })
    );

    wheel.key(NavKey::StepForward, now);
    let now = settle(&mut wheel, now);
    assert_eq!(wheel.rotation(), 0.0);
    assert_eq!(
        wheel.key(NavKey::Activate, now),
        Some(WheelEvent::Activated { index: 3 })
    );
}

#[test]
fn front_card_is_drawn_largest() {
    let wheel = accessible_wheel(Instant::now());
    let transforms = wheel.transforms();
    let front = &transforms[wheel.front_index()];
    assert!(transforms.iter().all(|t| t.scale <= front.scale));
    assert!(transforms.iter().all(|t| t.opacity <= front.opacity));
}

#[test]
fn single_item_wheel_is_valid() {
    let t0 = Instant::now();
    let items = vec![CarouselItem::new("hub.png", "SOLO")];
    let mut wheel = Wheel::new_at(items, WheelTuning::default(), t0).expect("one item");
    assert_eq!(wheel.slot(), 360.0);
    assert_eq!(base_offset(0, 1), 0.0);
    wheel.autoplay_tick(t0 + secs(7));
    settle(&mut wheel, t0 + secs(7));
    assert_eq!(wheel.rotation(), 360.0);
    assert_eq!(wheel.front_index(), 0);
}
