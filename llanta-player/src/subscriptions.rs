//! Root-level subscription composition

use iced::event::{self, Event as RuntimeEvent, Status as EventStatus};
use iced::keyboard::{self, Key, Modifiers, key::Named};
use iced::{Subscription, time, window};
use llanta_core::NavKey;

use crate::messages::Message;
use crate::state::State;

/// Only the clocks the wheel currently needs are kept alive: frames while an
/// animation runs, the autoplay timer while it is armed.
pub fn subscription(state: &State) -> Subscription<Message> {
    let mut subscriptions = vec![];

    if state.wheel.is_animating() {
        subscriptions.push(window::frames().map(Message::Frame));
    }

    // Dropped during a drag, so the interval restarts from the release
    if state.wheel.autoplay_armed() {
        subscriptions.push(time::every(state.wheel.autoplay_interval()).map(Message::AutoplayTick));
    }

    if state.wheel.keyboard_enabled() {
        subscriptions.push(event::listen_with(wheel_key_handler));
    }

    Subscription::batch(subscriptions)
}

fn wheel_key_handler(
    event: RuntimeEvent,
    status: EventStatus,
    _window: window::Id,
) -> Option<Message> {
    if status == EventStatus::Captured {
        return None;
    }

    let RuntimeEvent::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) = event else {
        return None;
    };
    nav_key(key.as_ref(), modifiers).map(Message::Key)
}

/// ArrowLeft / ArrowRight step, Enter / Space activate.
pub fn nav_key(key: Key<&str>, modifiers: Modifiers) -> Option<NavKey> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::ArrowLeft) => Some(NavKey::StepBackward),
        Key::Named(Named::ArrowRight) => Some(NavKey::StepForward),
        Key::Named(Named::Enter | Named::Space) => Some(NavKey::Activate),
        Key::Character(" ") => Some(NavKey::Activate),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_step_and_enter_activates() {
        let none = Modifiers::empty();
        assert_eq!(
            nav_key(Key::Named(Named::ArrowLeft), none),
            Some(NavKey::StepBackward)
        );
        assert_eq!(
            nav_key(Key::Named(Named::ArrowRight), none),
            Some(NavKey::StepForward)
        );
        assert_eq!(nav_key(Key::Named(Named::Enter), none), Some(NavKey::Activate));
        assert_eq!(nav_key(Key::Named(Named::Space), none), Some(NavKey::Activate));
        assert_eq!(nav_key(Key::Character(" "), none), Some(NavKey::Activate));
        assert_eq!(nav_key(Key::Named(Named::ArrowUp), none), None);
        assert_eq!(nav_key(Key::Character("a"), none), None);
    }

    #[test]
    fn shortcuts_are_left_alone() {
        assert_eq!(
            nav_key(Key::Named(Named::ArrowRight), Modifiers::CTRL),
            None
        );
    }
}
