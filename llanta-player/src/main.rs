use llanta_player::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("llanta_player", LevelFilter::Debug)
        .filter_module("llanta_core", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment();
    log::info!(
        "Starting wheel with {} profile from {}",
        config.wheel.profile,
        config.source
    );

    app::run(config)
}
