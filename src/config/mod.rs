pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::redis_store::DEFAULT_STORE_URL;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_store_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "profile-lookup")]
#[command(about = "Look up a user profile in the key-value store")]
pub struct CliConfig {
    /// Username to look up
    pub username: String,

    /// Store address, e.g. redis://127.0.0.1:6379/ (overrides the config file)
    #[arg(long, env = "PROFILE_STORE_URL")]
    pub store_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn store_url(&self) -> &str {
        self.store_url.as_deref().unwrap_or(DEFAULT_STORE_URL)
    }

    fn log_level(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_store_url("store_url", self.store_url())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::try_parse_from(["profile-lookup", "steven"]).unwrap();

        assert_eq!(config.username, "steven");
        assert_eq!(config.log_level(), "info");
        assert!(!config.json_logs());
        assert!(config.config.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::try_parse_from([
            "profile-lookup",
            "steven",
            "--store-url",
            "redis://cache:6380/1",
            "--verbose",
            "--json-logs",
        ])
        .unwrap();

        assert_eq!(config.store_url(), "redis://cache:6380/1");
        assert_eq!(config.log_level(), "debug");
        assert!(config.json_logs());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_requires_username() {
        assert!(CliConfig::try_parse_from(["profile-lookup"]).is_err());
    }
}
