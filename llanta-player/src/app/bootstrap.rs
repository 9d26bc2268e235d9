use std::sync::Arc;

use iced::Task;
use llanta_config::{ConfigLoadError, ConfigSource, WheelConfig};
use llanta_core::{Wheel, WheelProfile};

use crate::messages::Message;
use crate::state::State;

/// Environment variable that overrides the configured profile.
pub const PROFILE_ENV: &str = "LLANTA_PROFILE";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub wheel: Arc<WheelConfig>,
    pub source: ConfigSource,
}

impl AppConfig {
    pub fn new(wheel: WheelConfig) -> Self {
        Self {
            wheel: Arc::new(wheel),
            source: ConfigSource::Default,
        }
    }

    /// Load the wheel config the way the `llanta-config` tool does, then apply
    /// `$LLANTA_PROFILE` or a `--classic` / `--accessible` flag on top.
    ///
    /// A config that fails to load is logged and replaced by the defaults so
    /// the window still opens.
    pub fn from_environment() -> Self {
        let (mut wheel, source) = match WheelConfig::load() {
            Ok(loaded) => loaded,
            Err(err) => {
                log::error!("Failed to load wheel config, using defaults: {err:#}");
                (WheelConfig::default(), ConfigSource::Default)
            }
        };

        if let Some(profile) =
            profile_override(std::env::var(PROFILE_ENV).ok(), std::env::args().skip(1))
        {
            log::debug!("Profile overridden to {profile}");
            wheel.profile = profile;
        }

        Self {
            wheel: Arc::new(wheel),
            source,
        }
    }

    pub fn with_profile(mut self, profile: WheelProfile) -> Self {
        Arc::make_mut(&mut self.wheel).profile = profile;
        self
    }
}

/// Command-line flags take precedence over the environment variable.
pub fn profile_override(
    env_value: Option<String>,
    args: impl IntoIterator<Item = String>,
) -> Option<WheelProfile> {
    let from_args = args.into_iter().find_map(|arg| match arg.as_str() {
        "--classic" => Some(WheelProfile::Classic),
        "--accessible" => Some(WheelProfile::Accessible),
        _ => None,
    });
    from_args.or_else(|| {
        let value = env_value?;
        match value.parse() {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("Ignoring {PROFILE_ENV}={value}: {err}");
                None
            }
        }
    })
}

/// Initial state for the application.
pub fn base_state(config: &AppConfig) -> State {
    let wheel = match build_wheel(&config.wheel) {
        Ok(wheel) => wheel,
        Err(err) => {
            log::error!(
                "Rejected wheel config from {}: {err}; falling back to the built-in wheel",
                config.source
            );
            Wheel::default()
        }
    };
    State::new(wheel, config.wheel.instruction.clone())
}

fn build_wheel(config: &WheelConfig) -> Result<Wheel, ConfigLoadError> {
    let tuning = config.validate()?;
    Ok(Wheel::new(config.catalog(), tuning)?)
}

pub fn runtime_boot(config: &Arc<AppConfig>) -> (State, Task<Message>) {
    (base_state(config), Task::none())
}
