use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use llanta_config::{ConfigSource, WheelConfig};
use llanta_core::WheelProfile;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "llanta-config", about = "Inspect and validate Llanta wheel configuration")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Load a config (or resolve one from the environment) and validate it
    Check {
        /// Config file; defaults to $LLANTA_CONFIG_PATH / $LLANTA_CONFIG_JSON / llanta.toml
        path: Option<PathBuf>,
    },
    /// Print a TOML document with every default spelled out
    Defaults {
        #[arg(long, value_enum, default_value = "accessible")]
        profile: ProfileArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProfileArg {
    Classic,
    Accessible,
}

impl From<ProfileArg> for WheelProfile {
    fn from(value: ProfileArg) -> Self {
        match value {
            ProfileArg::Classic => WheelProfile::Classic,
            ProfileArg::Accessible => WheelProfile::Accessible,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { path } => {
            let (config, source) = match path {
                Some(path) => {
                    let config = WheelConfig::load_from_file(&path)?;
                    (config, ConfigSource::File(path))
                }
                None => WheelConfig::load()?,
            };

            let tuning = match config.validate() {
                Ok(tuning) => tuning,
                Err(err) => bail!("config from {source} is invalid: {err}"),
            };

            let items = config.catalog();
            println!("source:    {source}");
            println!("profile:   {}", config.profile);
            println!("items:     {}", items.len());
            for item in &items {
                println!("  - {}", item.title);
            }
            println!("radius:    {:.1}", tuning.transform.radius);
            println!("fronts:    {:?}", tuning.transform.front_angles);
            println!("falloff:   {:.1}", tuning.transform.falloff);
            println!(
                "damping:   mouse {:.2}, touch {:.2}",
                tuning.damping.mouse, tuning.damping.touch
            );
            println!("snap:      {:?} {}", tuning.snap_duration, tuning.snap_easing);
            println!("step:      {:?} {}", tuning.step_duration, tuning.step_easing);
            println!(
                "autoplay:  {} every {:?}",
                if tuning.autoplay_enabled { "on" } else { "off" },
                tuning.autoplay_interval
            );
            println!(
                "keyboard:  {}",
                if tuning.keyboard_enabled { "on" } else { "off" }
            );
        }
        Command::Defaults { profile } => {
            print!("{}", WheelConfig::documented(profile.into()).to_toml()?);
        }
    }

    Ok(())
}
