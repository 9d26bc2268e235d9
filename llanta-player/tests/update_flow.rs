use std::time::{Duration, Instant};

use iced::Vector;
use llanta_config::WheelConfig;
use llanta_core::{NavKey, PointerKind, WheelProfile};
use llanta_player::app::{AppConfig, bootstrap::base_state};
use llanta_player::messages::Message;
use llanta_player::state::State;
use llanta_player::update::update;

fn state(profile: WheelProfile) -> State {
    base_state(&AppConfig::new(WheelConfig::default()).with_profile(profile))
}

fn settle(state: &mut State) {
    let _ = update(state, Message::Frame(Instant::now() + Duration::from_secs(60)));
}

fn drag(state: &mut State, from: Vector, to: Vector, kind: PointerKind) {
    let _ = update(state, Message::PointerPressed { offset: from, kind });
    let _ = update(state, Message::PointerMoved(to));
    let _ = update(state, Message::PointerReleased);
}

#[test]
fn mouse_drag_snaps_to_next_slot() {
    let mut state = state(WheelProfile::Accessible);

    // a quarter turn of pointer travel, damped to 63 degrees
    drag(
        &mut state,
        Vector::new(100.0, 0.0),
        Vector::new(0.0, 100.0),
        PointerKind::Mouse,
    );
    assert!(state.wheel.is_animating());
    assert!(!state.wheel.is_dragging());

    settle(&mut state);
    assert_eq!(state.wheel.rotation(), 90.0);
    assert!(!state.wheel.is_animating());
}

#[test]
fn short_touch_drag_springs_back() {
    let mut state = state(WheelProfile::Classic);

    drag(
        &mut state,
        Vector::new(100.0, 0.0),
        Vector::new(100.0, 100.0),
        PointerKind::Touch,
    );
    settle(&mut state);
    assert_eq!(state.wheel.rotation(), 0.0);
}

#[test]
fn moves_while_dragging_follow_the_pointer() {
    let mut state = state(WheelProfile::Accessible);

    let _ = update(
        &mut state,
        Message::PointerPressed {
            offset: Vector::new(0.0, 50.0),
            kind: PointerKind::Mouse,
        },
    );
    let _ = update(&mut state, Message::PointerMoved(Vector::new(-50.0, 0.0)));
    assert!(state.wheel.is_dragging());
    assert!(state.wheel.scroll_locked());
    assert!((state.wheel.rotation() - 63.0).abs() < 1e-3);
}

#[test]
fn autoplay_tick_steps_forward() {
    let mut state = state(WheelProfile::Accessible);

    let _ = update(
        &mut state,
        Message::AutoplayTick(Instant::now() + Duration::from_secs(8)),
    );
    assert!(state.wheel.is_animating());

    settle(&mut state);
    assert_eq!(state.wheel.rotation(), 90.0);
}

#[test]
fn keyboard_activation_shows_caption() {
    let mut state = state(WheelProfile::Accessible);

    let _ = update(&mut state, Message::Key(NavKey::Activate));
    assert_eq!(state.caption, Some(3));
    let item = state.caption_item().expect("caption item");
    assert_eq!(item.title, "CASCADA NATURAL");

    let _ = update(&mut state, Message::Key(NavKey::StepBackward));
    assert_eq!(state.caption, None);

    settle(&mut state);
    assert_eq!(state.wheel.rotation(), -90.0);
    let _ = update(&mut state, Message::Key(NavKey::Activate));
    assert_eq!(state.caption, Some(0));
}

#[test]
fn classic_profile_ignores_keys() {
    let mut state = state(WheelProfile::Classic);

    let _ = update(&mut state, Message::Key(NavKey::StepForward));
    assert!(!state.wheel.is_animating());
    assert_eq!(state.caption, None);
}

#[test]
fn configured_instruction_and_items_reach_the_state() {
    let config = WheelConfig::parse_json(
        r#"{
            "instruction": "Gira la rueda",
            "items": [
                { "image": "a.png", "title": "UNO" },
                { "image": "b.png", "title": "DOS" },
                { "image": "c.png", "title": "TRES" }
            ]
        }"#,
    )
    .expect("parse");
    let state = base_state(&AppConfig::new(config));

    assert_eq!(state.instruction, "Gira la rueda");
    assert_eq!(state.wheel.items().len(), 3);
    assert!((state.wheel.slot() - 120.0).abs() < 1e-4);
}
