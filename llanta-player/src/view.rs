use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Canvas, column, container, stack, text};
use iced::{Background, Border, Element, Length, Theme};

use crate::messages::Message;
use crate::state::State;
use crate::theme;
use crate::widgets::WheelCanvas;

pub fn view(state: &State) -> Element<'_, Message> {
    let wheel = Canvas::new(WheelCanvas::new(&state.wheel))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![wheel, instruction_pill(&state.instruction)];
    if let Some(caption) = caption(state) {
        layers = layers.push(caption);
    }
    layers.into()
}

fn instruction_pill(instruction: &str) -> Element<'_, Message> {
    let pill = container(text(instruction).size(16))
        .padding([12, 30])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(theme::PILL_BACKGROUND)),
            text_color: Some(iced::Color::WHITE),
            border: Border {
                radius: 30.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    container(pill)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Bottom)
        .padding(32)
        .into()
}

/// Title and description of the activated item, pinned to the top.
fn caption(state: &State) -> Option<Element<'_, Message>> {
    let item = state.caption_item()?;

    let mut body = column![text(item.title.as_str()).size(22)].spacing(6);
    if let Some(description) = &item.description {
        body = body.push(text(description.as_str()).size(15));
    }

    let card = container(body)
        .padding(20)
        .max_width(520.0)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(theme::CAPTION_BACKGROUND)),
            text_color: Some(iced::Color::WHITE),
            border: Border {
                radius: 12.0.into(),
                width: 1.0,
                color: theme::HUB_RIM,
            },
            ..Default::default()
        });

    Some(
        container(card)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .padding(24)
            .into(),
    )
}
