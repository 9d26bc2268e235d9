use std::time::Instant;

use iced::Task;

use crate::messages::Message;
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    if !matches!(message, Message::Frame(_) | Message::PointerMoved(_)) {
        log::trace!("{}", message.name());
    }

    let now = Instant::now();
    let event = match message {
        Message::PointerPressed { offset, kind } => {
            state.wheel.pointer_down(offset.x, offset.y, kind, now);
            None
        }
        Message::PointerMoved(offset) => {
            state.wheel.pointer_move(offset.x, offset.y);
            None
        }
        Message::PointerReleased => state.wheel.pointer_up(now),
        Message::Key(key) => state.wheel.key(key, now),
        Message::AutoplayTick(at) => state.wheel.autoplay_tick(at),
        Message::Frame(at) => {
            state.wheel.advance(at);
            None
        }
    };

    if let Some(event) = event {
        state.record(event);
    }
    Task::none()
}
