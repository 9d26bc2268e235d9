//! Colours of the wheel scene.

use iced::{Color, Theme, theme::Palette};

pub const BACKGROUND_TOP: Color = Color::from_rgb(0.039, 0.180, 0.220);
pub const BACKGROUND_BOTTOM: Color = Color::from_rgb(0.020, 0.078, 0.102);

pub const HUB_FILL: Color = Color::from_rgb(0.063, 0.235, 0.278);
pub const HUB_RIM: Color = Color::from_rgb(0.910, 0.757, 0.439);
pub const HUB_SPOKE: Color = Color::from_rgba(0.910, 0.757, 0.439, 0.55);

pub const CARD_FRAME: Color = Color::WHITE;
pub const CARD_HOVER_RING: Color = Color::from_rgb(0.910, 0.757, 0.439);
pub const TITLE_BAND: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.7);

pub const PILL_BACKGROUND: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.45);
pub const CAPTION_BACKGROUND: Color = Color::from_rgba(0.020, 0.078, 0.102, 0.85);

/// Placeholder tints painted where a card's photo would go.
const CARD_TINTS: [Color; 6] = [
    Color::from_rgb(0.247, 0.443, 0.337),
    Color::from_rgb(0.180, 0.337, 0.255),
    Color::from_rgb(0.851, 0.553, 0.310),
    Color::from_rgb(0.275, 0.510, 0.584),
    Color::from_rgb(0.490, 0.392, 0.588),
    Color::from_rgb(0.651, 0.349, 0.349),
];

pub fn card_tint(index: usize) -> Color {
    CARD_TINTS[index % CARD_TINTS.len()]
}

/// Scale a colour's alpha by `opacity`.
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}

pub fn wheel_theme() -> Theme {
    let mut palette = Palette::DARK;
    palette.background = BACKGROUND_BOTTOM;
    palette.text = Color::WHITE;
    palette.primary = HUB_RIM;

    Theme::custom("Llanta", palette)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fading_only_touches_alpha() {
        let color = faded(TITLE_BAND, 0.5);
        assert_eq!(color.r, TITLE_BAND.r);
        assert!((color.a - 0.35).abs() < 1e-6);
    }

    #[test]
    fn tints_cycle() {
        assert_eq!(card_tint(0), card_tint(CARD_TINTS.len()));
    }
}
