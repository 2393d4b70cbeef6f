//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Only direct messages start and advance reports unless told otherwise.
fn default_dm_only() -> bool {
    true
}

/// Configuration for the report-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Shared settings; reached through `Deref`.
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// The deserialized settings.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Discord bot token (`DISCORD_TOKEN`).
    pub discord_token: String,
    /// Whether reports are only accepted in direct messages (`DM_ONLY`).
    /// When disabled, guild channel messages also drive the report flow.
    #[serde(default = "default_dm_only")]
    pub dm_only: bool,
}

impl Config {
    /// Loads settings from `REPORT_BOT_*` environment variables and an optional TOML file.
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("REPORT_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Checks the values that deserialization alone cannot.
    pub fn validate(&self) -> Res<()> {
        if self.discord_token.trim().is_empty() {
            return Err(anyhow::anyhow!("Discord token must not be empty."));
        }

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    fn config(token: &str) -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                discord_token: token.to_string(),
                dm_only: true,
            }),
        }
    }

    #[test]
    fn test_validate_rejects_blank_token() {
        assert!(config("   ").validate().is_err());
        assert!(config("").validate().is_err());
    }

    #[test]
    fn test_validate_accepts_token() {
        assert!(config("abc.def.ghi").validate().is_ok());
    }

    #[test]
    fn test_dm_only_defaults_to_true() {
        let inner: ConfigInner = serde_json::from_value(serde_json::json!({ "discord_token": "t" })).unwrap();

        assert!(inner.dm_only);
    }
}
