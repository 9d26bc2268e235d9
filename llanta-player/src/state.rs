use llanta_core::{CarouselItem, Wheel, WheelEvent};

/// Application state: the wheel plus the little UI around it.
#[derive(Debug)]
pub struct State {
    pub wheel: Wheel,
    /// Hint shown under the wheel.
    pub instruction: String,
    /// Item whose caption is showing after a keyboard activation.
    pub caption: Option<usize>,
}

impl State {
    pub fn new(wheel: Wheel, instruction: String) -> Self {
        Self {
            wheel,
            instruction,
            caption: None,
        }
    }

    pub fn caption_item(&self) -> Option<&CarouselItem> {
        self.caption.and_then(|index| self.wheel.items().get(index))
    }

    /// Reflect a wheel event in the surrounding UI. Any movement hides the
    /// caption; activation shows it for the front item.
    pub fn record(&mut self, event: WheelEvent) {
        self.caption = match event {
            WheelEvent::Activated { index } => Some(index),
            WheelEvent::Snapped { .. } | WheelEvent::Stepped { .. } => None,
        };
    }
}
