//! Configuration file structures for ipinfobot.
//!
//! This module defines the configuration file format and its loading. The
//! configuration is a YAML file with three sections: Telegram credentials,
//! ipinfo.io service settings and optional analytics settings. Every value
//! can be overridden with an `IPINFOBOT_`-prefixed environment variable,
//! using `__` as the section separator.
//!
//! # Configuration File Format
//!
//! ```yaml
//! # Telegram Bot API credentials
//! telegram:
//!   token: "123456:your-bot-api-token"
//!
//! # Geolocation service settings (optional, defaults to https://ipinfo.io)
//! ipinfo:
//!   url: "https://ipinfo.io"
//!
//! # Usage tracking settings (optional; tracking is skipped without a token)
//! analytics:
//!   token: "your-analytics-token"
//! ```
//!
//! # Environment Variable Overrides
//!
//! ```bash
//! export IPINFOBOT_TELEGRAM__TOKEN="123456:your-bot-api-token"
//! export IPINFOBOT_IPINFO__URL="https://ipinfo.io"
//! export IPINFOBOT_ANALYTICS__TOKEN="your-analytics-token"
//! ```

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::Deserialize;

fn default_ipinfo_url() -> String {
    "https://ipinfo.io".to_owned()
}

fn default_analytics_url() -> String {
    "https://api.botan.io".to_owned()
}

/// Root configuration structure for ipinfobot.
///
/// Only the `telegram` section is required; the `ipinfo` and `analytics`
/// sections fall back to their defaults when absent.
#[derive(Deserialize, Debug)]
pub struct Config {
    /// Telegram Bot API configuration
    pub telegram: Telegram,
    /// Geolocation service configuration
    #[serde(default)]
    pub ipinfo: IpInfo,
    /// Usage tracking configuration
    #[serde(default)]
    pub analytics: Analytics,
}

/// Telegram Bot API configuration.
///
/// # YAML Section
///
/// ```yaml
/// telegram:
///   token: "123456:your-bot-api-token"
/// ```
#[derive(Deserialize, Debug)]
pub struct Telegram {
    /// Bot API token obtained from @BotFather.
    pub token: String,
}

/// Geolocation service configuration.
///
/// # YAML Section
///
/// ```yaml
/// ipinfo:
///   url: "https://ipinfo.io"
/// ```
#[derive(Deserialize, Debug)]
pub struct IpInfo {
    /// Base URL of the geolocation service.
    ///
    /// Should include the protocol (http/https). A trailing slash is
    /// stripped at startup.
    #[serde(default = "default_ipinfo_url")]
    pub url: String,
}

impl Default for IpInfo {
    fn default() -> Self {
        IpInfo {
            url: default_ipinfo_url(),
        }
    }
}

/// Usage tracking configuration.
///
/// Tracking is entirely optional: without a token every tracking call is
/// silently skipped.
///
/// # YAML Section
///
/// ```yaml
/// analytics:
///   url: "https://api.botan.io"
///   token: "your-analytics-token"
/// ```
#[derive(Deserialize, Debug)]
pub struct Analytics {
    /// Base URL of the tracking service.
    #[serde(default = "default_analytics_url")]
    pub url: String,

    /// Tracking service token. When absent, tracking is disabled.
    pub token: Option<String>,
}

impl Default for Analytics {
    fn default() -> Self {
        Analytics {
            url: default_analytics_url(),
            token: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a YAML file, applying `IPINFOBOT_`
    /// environment variable overrides on top of the file values.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML configuration file
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file cannot be read, is not valid
    /// YAML, or required values are missing after merging the environment.
    pub fn load(path: &str) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("IPINFOBOT_").split("__"))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_full_config() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
                telegram:
                  token: "123456:token"
                ipinfo:
                  url: "https://ipinfo.example.com"
                analytics:
                  token: "analytics-token"
                "#,
            )?;

            let config = Config::load("config.yaml")?;
            assert_eq!(config.telegram.token, "123456:token");
            assert_eq!(config.ipinfo.url, "https://ipinfo.example.com");
            assert_eq!(config.analytics.url, "https://api.botan.io");
            assert_eq!(config.analytics.token.as_deref(), Some("analytics-token"));
            Ok(())
        });
    }

    #[test]
    fn test_load_minimal_config_uses_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
                telegram:
                  token: "123456:token"
                "#,
            )?;

            let config = Config::load("config.yaml")?;
            assert_eq!(config.ipinfo.url, "https://ipinfo.io");
            assert_eq!(config.analytics.url, "https://api.botan.io");
            assert!(config.analytics.token.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_environment_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
                telegram:
                  token: "from-file"
                "#,
            )?;
            jail.set_env("IPINFOBOT_TELEGRAM__TOKEN", "from-env");
            jail.set_env("IPINFOBOT_ANALYTICS__TOKEN", "analytics-from-env");

            let config = Config::load("config.yaml")?;
            assert_eq!(config.telegram.token, "from-env");
            assert_eq!(
                config.analytics.token.as_deref(),
                Some("analytics-from-env")
            );
            Ok(())
        });
    }

    #[test]
    fn test_missing_telegram_token_fails() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "config.yaml",
                r#"
                ipinfo:
                  url: "https://ipinfo.io"
                "#,
            )?;

            assert!(Config::load("config.yaml").is_err());
            Ok(())
        });
    }
}
