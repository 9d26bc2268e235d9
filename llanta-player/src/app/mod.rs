use std::sync::Arc;

use iced::{Font, Settings, Size, Theme};

use crate::state::State;
use crate::{subscriptions, update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build and run the wheel window with the provided configuration.
pub fn run(config: AppConfig) -> iced::Result {
    let window = config.wheel.window;
    let config = Arc::new(config);

    let boot_config = Arc::clone(&config);
    iced::application(
        move || bootstrap::runtime_boot(&boot_config),
        update::update,
        view::view,
    )
    .settings(default_settings())
    .title("Llanta")
    .subscription(subscriptions::subscription)
    .theme(app_theme)
    .window(iced::window::Settings {
        size: Size::new(window.width, window.height),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
    .run()
}

fn default_settings() -> Settings {
    let mut settings = Settings::default();
    settings.id = Some("llanta-player".to_string());
    settings.antialiasing = true;
    settings.default_font = Font::DEFAULT;
    settings
}

fn app_theme(_: &State) -> Theme {
    crate::theme::wheel_theme()
}
