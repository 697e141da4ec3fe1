//! Configuration for the pubpolicy CLI

use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};

/// Main builder configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Where policies and sector templates live
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,
}

/// Persistence backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GatewayConfig {
    /// Process-local store seeded with the built-in sector catalog
    Memory {
        /// Replace the built-in catalog with templates from this file
        #[serde(default)]
        sectors_file: Option<String>,
    },

    /// Remote policy service
    Http {
        /// Service base URL
        base_url: String,

        /// Request timeout in seconds
        #[serde(default = "default_timeout")]
        timeout_secs: u64,
    },
}

impl Default for GatewayConfig {
    fn default() -> Self {
        GatewayConfig::Memory { sectors_file: None }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, used when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl BuilderConfig {
    /// Load configuration: defaults, then the optional file, then
    /// `PUBPOLICY_*` environment variables (`__` separates nested keys).
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&BuilderConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(true));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("PUBPOLICY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BuilderConfig::default();
        assert_eq!(config.gateway, GatewayConfig::Memory { sectors_file: None });
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert!(matches!(config.output, OutputFormat::Table));
    }

    #[test]
    fn test_load_without_file() {
        let config = BuilderConfig::load(None).unwrap();
        assert!(matches!(config.gateway, GatewayConfig::Memory { .. }));
    }

    #[test]
    fn test_load_http_gateway_from_file() {
        let path = std::env::temp_dir().join(format!("pubpolicy-config-{}.yaml", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "gateway:\n  type: http\n  base_url: https://policies.example.org\noutput: json\nlogging:\n  json: true"
        )
        .unwrap();

        let config = BuilderConfig::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(
            config.gateway,
            GatewayConfig::Http {
                base_url: "https://policies.example.org".into(),
                timeout_secs: 30,
            }
        );
        assert!(matches!(config.output, OutputFormat::Json));
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "warn");
    }
}
