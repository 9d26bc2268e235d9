use std::time::Instant;

use iced::Vector;
use llanta_core::{NavKey, PointerKind};

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer went down on the wheel; `offset` is relative to its centre.
    PointerPressed { offset: Vector, kind: PointerKind },
    PointerMoved(Vector),
    PointerReleased,
    Key(NavKey),
    AutoplayTick(Instant),
    Frame(Instant),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PointerPressed { .. } => "Wheel::PointerPressed",
            Self::PointerMoved(_) => "Wheel::PointerMoved",
            Self::PointerReleased => "Wheel::PointerReleased",
            Self::Key(_) => "Wheel::Key",
            Self::AutoplayTick(_) => "Wheel::AutoplayTick",
            Self::Frame(_) => "Wheel::Frame",
        }
    }
}
