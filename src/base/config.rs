//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc, time::Duration};

use serde::Deserialize;

use crate::base::responses;

use super::types::Res;

/// Default pause before the assistant reply is appended.
fn default_reply_delay_ms() -> u64 {
    1000
}

/// Default greeting for new chat sessions.
fn default_greeting() -> String {
    responses::GREETING.to_string()
}

/// Default SurrealDB namespace.
fn default_db_namespace() -> String {
    "bloodlink".to_string()
}

/// Default SurrealDB database.
fn default_db_database() -> String {
    "dashboard".to_string()
}

/// Default user the patient views are rendered for (the seeded demo user).
fn default_user_id() -> String {
    crate::service::db::seed::DEMO_USER_ID.to_string()
}

/// Default leaderboard length.
fn default_leaderboard_limit() -> usize {
    5
}

/// Configuration for the application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inner: Arc::new(ConfigInner::default()),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ConfigInner {
    /// Pause, in milliseconds, before the assistant reply lands in the log (`REPLY_DELAY_MS`).
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Optional custom greeting to override the default (`GREETING`).
    #[serde(default = "default_greeting")]
    pub greeting: String,
    /// Export spans over OTLP/HTTP (`OTLP_ENABLED`).
    #[serde(default)]
    pub otlp_enabled: bool,
    /// Database namespace (`DB_NAMESPACE`).
    #[serde(default = "default_db_namespace")]
    pub db_namespace: String,
    /// Database name (`DB_DATABASE`).
    #[serde(default = "default_db_database")]
    pub db_database: String,
    /// User whose dashboard is shown (`USER_ID`).
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Number of leaderboard rows shown by default (`LEADERBOARD_LIMIT`).
    #[serde(default = "default_leaderboard_limit")]
    pub leaderboard_limit: usize,
}

impl Default for ConfigInner {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            greeting: default_greeting(),
            otlp_enabled: false,
            db_namespace: default_db_namespace(),
            db_database: default_db_database(),
            user_id: default_user_id(),
            leaderboard_limit: default_leaderboard_limit(),
        }
    }
}

impl ConfigInner {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("BLOODLINK"));

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

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Res<()> {
        if self.reply_delay_ms > 60_000 {
            return Err(anyhow::anyhow!("Reply delay must be at most 60000 ms."));
        }

        if self.leaderboard_limit < 1 || self.leaderboard_limit > 100 {
            return Err(anyhow::anyhow!("Leaderboard limit must be between 1 and 100."));
        }

        if self.greeting.trim().is_empty() {
            return Err(anyhow::anyhow!("Greeting must not be blank."));
        }

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.reply_delay(), Duration::from_secs(1));
        assert_eq!(config.greeting, responses::GREETING);
        assert!(!config.otlp_enabled);
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let mut config = Config::default();

        Arc::make_mut(&mut config.inner).reply_delay_ms = 120_000;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        Arc::make_mut(&mut config.inner).leaderboard_limit = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        Arc::make_mut(&mut config.inner).greeting = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bloodlink-config-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "reply_delay_ms = 250\nleaderboard_limit = 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.reply_delay_ms, 250);
        assert_eq!(config.leaderboard_limit, 3);
        assert_eq!(config.db_namespace, "bloodlink");
    }
}
