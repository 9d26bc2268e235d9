use anyhow::{Context, anyhow};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::models::{ConfigSource, WheelConfig};

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "LLANTA_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_ENV: &str = "LLANTA_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "llanta.toml",
    "llanta.json",
    "config/llanta.toml",
    "config/llanta.json",
];

/// Encoding of a config document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    /// Unknown extension: TOML is tried before JSON.
    Either,
}

impl Format {
    fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml" | "tml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Either,
        }
    }
}

/// Read an environment variable, treating blank values as unset.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl WheelConfig {
    /// Read `.env` (if present) and resolve the configuration from the
    /// environment and the working directory.
    pub fn load() -> anyhow::Result<(Self, ConfigSource)> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => tracing::warn!("ignoring unreadable .env: {err}"),
        }
        Self::load_from_env_in(Path::new("."))
    }

    /// Resolve the config from, in order: `$LLANTA_CONFIG_PATH`,
    /// `$LLANTA_CONFIG_JSON`, the first default file under `base_dir`, or
    /// the built-in defaults.
    pub fn load_from_env_in(base_dir: &Path) -> anyhow::Result<(Self, ConfigSource)> {
        let (source, inline) = match (env_value(CONFIG_PATH_ENV), env_value(CONFIG_JSON_ENV)) {
            (Some(path), _) => (ConfigSource::EnvPath(PathBuf::from(path)), None),
            (None, Some(raw)) => (ConfigSource::EnvInline, Some(raw)),
            (None, None) => match find_default_file(base_dir) {
                Some(path) => (ConfigSource::File(path), None),
                None => (ConfigSource::Default, None),
            },
        };

        let config = match &source {
            ConfigSource::EnvPath(path) | ConfigSource::File(path) => Self::load_from_file(path)?,
            ConfigSource::EnvInline => {
                Self::parse(inline.as_deref().unwrap_or_default(), Format::Json, CONFIG_JSON_ENV)?
            }
            ConfigSource::Default => {
                tracing::debug!("no wheel config found, using defaults");
                return Ok((Self::default(), ConfigSource::Default));
            }
        };

        tracing::info!("wheel config loaded from {source}");
        Ok((config, source))
    }

    /// Parse a file, picking TOML or JSON by extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read wheel config from {}", path.display())
        })?;
        Self::parse(&contents, Format::of(path), &path.display().to_string())
    }

    /// Parse a document of unknown encoding; `origin` names it in errors.
    pub fn parse_from_str(contents: &str, origin: &str) -> anyhow::Result<Self> {
        Self::parse(contents, Format::Either, origin)
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        Self::parse(raw, Format::Json, "inline json")
    }

    /// Render as a TOML document.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("failed to render wheel config as TOML")
    }

    fn parse(contents: &str, format: Format, origin: &str) -> anyhow::Result<Self> {
        match format {
            Format::Toml => toml::from_str(contents)
                .with_context(|| format!("invalid TOML in wheel config {origin}")),
            Format::Json => serde_json::from_str(contents)
                .with_context(|| format!("invalid JSON in wheel config {origin}")),
            Format::Either => Self::parse(contents, Format::Toml, origin).or_else(|toml_err| {
                Self::parse(contents, Format::Json, origin).map_err(|json_err| {
                    anyhow!("{toml_err:#}; {json_err:#}")
                })
            }),
        }
    }
}

fn find_default_file(base_dir: &Path) -> Option<PathBuf> {
    DEFAULT_CANDIDATES
        .iter()
        .map(|candidate| base_dir.join(candidate))
        .find(|path| path.exists())
}
