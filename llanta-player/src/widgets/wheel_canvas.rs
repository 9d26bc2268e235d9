//! Canvas program that draws the wheel and feeds pointer input back to it.
//!
//! Cards orbit the hub, which sits at the bottom centre of the canvas, so
//! only the upper half of the orbit is on screen. Drag angles are measured
//! around the canvas centre instead.

use iced::mouse;
use iced::touch;
use iced::widget::Action;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke};
use iced::{Event, Point, Rectangle, Renderer, Size, Theme, Vector};
use llanta_core::constants::{layout, prominence};
use llanta_core::transform::paint_order;
use llanta_core::{ItemTransform, PointerKind, TransformProfile, Wheel};

use crate::messages::Message;
use crate::theme;

const HUB_SPOKES: usize = 12;
const CARD_RADIUS: f32 = 10.0;
const CARD_BORDER: f32 = 5.0;
const TITLE_BAND_HEIGHT: f32 = 40.0;
const TITLE_SIZE: f32 = 16.0;
/// Breathing room kept above the front card.
const TOP_MARGIN: f32 = 32.0;

/// Maps orbit coordinates (relative to the hub centre) onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage {
    pub origin: Point,
    pub scale: f32,
}

impl Stage {
    /// Shrink the scene so the widest and tallest cards stay inside `size`.
    pub fn fit(size: Size, profile: &TransformProfile) -> Self {
        let card_half_w = layout::CARD_WIDTH * profile.scale.max / 2.0;
        let card_half_h = layout::CARD_HEIGHT * profile.scale.max / 2.0;
        let scene_width = 2.0 * (profile.radius * profile.x_stretch + card_half_w);
        let scene_height = profile.radius + profile.upper_lift + card_half_h + TOP_MARGIN;

        let scale = (size.width / scene_width)
            .min(size.height / scene_height)
            .clamp(0.0, 1.0);

        Self {
            origin: Point::new(size.width / 2.0, size.height),
            scale,
        }
    }

    pub fn to_canvas(&self, x: f32, y: f32) -> Point {
        Point::new(self.origin.x + x * self.scale, self.origin.y + y * self.scale)
    }

    pub fn to_orbit(&self, point: Point) -> Option<(f32, f32)> {
        if self.scale <= 0.0 {
            return None;
        }
        Some((
            (point.x - self.origin.x) / self.scale,
            (point.y - self.origin.y) / self.scale,
        ))
    }

    /// Radius of the decorative hub on the canvas.
    pub fn hub_radius(&self) -> f32 {
        layout::WHEEL_DIAMETER / 2.0 * self.scale
    }
}

/// Topmost card under `point` (canvas-local), if any.
pub fn card_at(stage: &Stage, transforms: &[ItemTransform], point: Point) -> Option<usize> {
    let (x, y) = stage.to_orbit(point)?;
    paint_order(transforms)
        .into_iter()
        .rev()
        .find(|index| {
            transforms[*index].contains(x, y, layout::CARD_WIDTH, layout::CARD_HEIGHT)
        })
}

#[derive(Debug)]
pub struct WheelCanvas<'a> {
    wheel: &'a Wheel,
}

impl<'a> WheelCanvas<'a> {
    pub fn new(wheel: &'a Wheel) -> Self {
        Self { wheel }
    }

    fn press(&self, offset: Vector, kind: PointerKind) -> Option<Action<Message>> {
        Some(Action::publish(Message::PointerPressed { offset, kind }).and_capture())
    }
}

/// Per-widget input state.
#[derive(Debug, Default)]
pub struct CanvasState {
    /// The single finger driving a touch drag.
    finger: Option<touch::Finger>,
}

impl Program<Message> for WheelCanvas<'_> {
    type State = CanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let center = bounds.center();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                self.press(position - center, PointerKind::Mouse)
            }
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if self.wheel.is_dragging() && state.finger.is_none() {
                    Some(Action::publish(Message::PointerMoved(*position - center)).and_capture())
                } else if cursor.is_over(bounds) {
                    // hover highlight follows the cursor
                    Some(Action::request_redraw())
                } else {
                    None
                }
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if self.wheel.is_dragging() && state.finger.is_none() =>
            {
                Some(Action::publish(Message::PointerReleased).and_capture())
            }
            Event::Mouse(mouse::Event::WheelScrolled { .. }) if self.wheel.scroll_locked() => {
                Some(Action::capture())
            }
            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if state.finger.is_some() || !bounds.contains(*position) {
                    return None;
                }
                state.finger = Some(*id);
                self.press(*position - center, PointerKind::Touch)
            }
            Event::Touch(touch::Event::FingerMoved { id, position })
                if state.finger == Some(*id) =>
            {
                Some(Action::publish(Message::PointerMoved(*position - center)).and_capture())
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) if state.finger == Some(*id) => {
                state.finger = None;
                Some(Action::publish(Message::PointerReleased).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let stage = Stage::fit(bounds.size(), &self.wheel.tuning().transform);

        draw_background(&mut frame, bounds.size());
        draw_hub(&mut frame, &stage, self.wheel.hub_rotation());

        let transforms = self.wheel.transforms();
        let hovered = if self.wheel.is_dragging() {
            None
        } else {
            cursor
                .position_in(bounds)
                .and_then(|point| card_at(&stage, &transforms, point))
        };

        for index in paint_order(&transforms) {
            if Some(index) != hovered {
                self.draw_card(&mut frame, &stage, &transforms[index], false);
            }
        }
        // hovered card is lifted above its neighbours
        if let Some(index) = hovered {
            self.draw_card(&mut frame, &stage, &transforms[index], true);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.wheel.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl WheelCanvas<'_> {
    fn draw_card(&self, frame: &mut Frame, stage: &Stage, t: &ItemTransform, hovered: bool) {
        let Some(item) = self.wheel.items().get(t.index) else {
            return;
        };
        let opacity = t.opacity;
        let hover_scale = if hovered { prominence::HOVER_SCALE } else { 1.0 };
        let (width, height) = (layout::CARD_WIDTH, layout::CARD_HEIGHT);
        let top_left = Point::new(-width / 2.0, -height / 2.0);

        frame.with_save(|frame| {
            frame.translate(stage.to_canvas(t.x, t.y) - Point::ORIGIN);
            frame.rotate(t.tilt.to_radians());
            frame.scale(t.scale * hover_scale * stage.scale);

            let card = Path::rounded_rectangle(
                top_left,
                Size::new(width, height),
                CARD_RADIUS.into(),
            );
            frame.fill(&card, theme::faded(theme::CARD_FRAME, opacity));

            let photo = Path::rounded_rectangle(
                Point::new(top_left.x + CARD_BORDER, top_left.y + CARD_BORDER),
                Size::new(width - 2.0 * CARD_BORDER, height - 2.0 * CARD_BORDER),
                (CARD_RADIUS - CARD_BORDER / 2.0).into(),
            );
            frame.fill(&photo, theme::faded(theme::card_tint(t.index), opacity));

            let band_top = height / 2.0 - CARD_BORDER - TITLE_BAND_HEIGHT;
            frame.fill_rectangle(
                Point::new(top_left.x + CARD_BORDER, band_top),
                Size::new(width - 2.0 * CARD_BORDER, TITLE_BAND_HEIGHT),
                theme::faded(theme::TITLE_BAND, opacity),
            );
            frame.fill_text(canvas::Text {
                content: item.title.clone(),
                position: Point::new(
                    top_left.x + CARD_BORDER + 12.0,
                    band_top + (TITLE_BAND_HEIGHT - TITLE_SIZE) / 2.0,
                ),
                color: theme::faded(iced::Color::WHITE, opacity),
                size: TITLE_SIZE.into(),
                ..canvas::Text::default()
            });

            if hovered {
                frame.stroke(
                    &card,
                    Stroke::default()
                        .with_color(theme::CARD_HOVER_RING)
                        .with_width(3.0),
                );
            }
        });
    }
}

fn draw_background(frame: &mut Frame, size: Size) {
    let gradient = canvas::gradient::Linear::new(Point::ORIGIN, Point::new(0.0, size.height))
        .add_stop(0.0, theme::BACKGROUND_TOP)
        .add_stop(1.0, theme::BACKGROUND_BOTTOM);
    frame.fill_rectangle(Point::ORIGIN, size, canvas::Gradient::Linear(gradient));
}

fn draw_hub(frame: &mut Frame, stage: &Stage, rotation: f32) {
    let radius = stage.hub_radius();
    if radius <= 0.0 {
        return;
    }

    frame.with_save(|frame| {
        frame.translate(stage.origin - Point::ORIGIN);
        frame.rotate(rotation.to_radians());

        let disc = Path::circle(Point::ORIGIN, radius);
        frame.fill(&disc, theme::HUB_FILL);

        for n in 0..HUB_SPOKES {
            let angle = (n as f32 / HUB_SPOKES as f32) * std::f32::consts::TAU;
            let tip = Point::new(angle.cos() * radius * 0.92, angle.sin() * radius * 0.92);
            frame.stroke(
                &Path::line(Point::ORIGIN, tip),
                Stroke::default().with_color(theme::HUB_SPOKE).with_width(2.0),
            );
        }

        frame.stroke(
            &disc,
            Stroke::default().with_color(theme::HUB_RIM).with_width(4.0),
        );
        frame.fill(&Path::circle(Point::ORIGIN, radius * 0.12), theme::HUB_RIM);
    });
}
