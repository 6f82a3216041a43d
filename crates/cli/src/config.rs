//! Process configuration from environment variables, overridable by flags.

use anyhow::{Context, anyhow};

use skuforge_observability::LogFormat;

pub const LOG_FORMAT_ENV: &str = "SKUFORGE_LOG_FORMAT";
pub const PRETTY_ENV: &str = "SKUFORGE_PRETTY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub log_format: LogFormat,
    /// Pretty-print JSON written to stdout.
    pub pretty: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_ENV) {
            config.log_format = raw
                .parse()
                .map_err(|e: String| anyhow!(e))
                .with_context(|| format!("invalid {LOG_FORMAT_ENV}"))?;
        }

        if let Some(raw) = lookup(PRETTY_ENV) {
            config.pretty = parse_flag(&raw).with_context(|| format!("invalid {PRETTY_ENV}"))?;
        }

        Ok(config)
    }

    /// Apply command-line flags on top of the environment.
    pub fn with_overrides(mut self, log_format: Option<LogFormat>, pretty: bool) -> Self {
        if let Some(format) = log_format {
            self.log_format = format;
        }
        self.pretty |= pretty;
        self
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(anyhow!("expected a boolean, got `{other}`")),
    }
}
