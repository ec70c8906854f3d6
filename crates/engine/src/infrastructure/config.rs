//! Engine configuration

use anyhow::{bail, Context, Result};

/// Engine configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
    /// Colourise log output
    pub log_ansi: bool,
}

impl EngineConfig {
    pub const LOG_FILTER_VAR: &'static str = "IDOLHUB_LOG";
    pub const LOG_ANSI_VAR: &'static str = "IDOLHUB_LOG_ANSI";
    pub const DEFAULT_LOG_FILTER: &'static str = "idolhub_engine=info";

    /// Load configuration from environment variables, reading `.env` first
    /// if one exists.
    pub fn from_env() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(e).context("Failed to read .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let log_filter = lookup(Self::LOG_FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LOG_FILTER.to_string());

        let log_ansi = match lookup(Self::LOG_ANSI_VAR) {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("{} must be a boolean", Self::LOG_ANSI_VAR))?,
            None => true,
        };

        Ok(Self {
            log_filter,
            log_ansi,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
            log_ansi: true,
        }
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("invalid flag value: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = EngineConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn reads_filter_and_flag() {
        let config = EngineConfig::from_lookup(lookup_from(&[
            ("IDOLHUB_LOG", "idolhub_engine=trace"),
            ("IDOLHUB_LOG_ANSI", "off"),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "idolhub_engine=trace");
        assert!(!config.log_ansi);
    }

    #[test]
    fn blank_filter_falls_back_to_default() {
        let config = EngineConfig::from_lookup(lookup_from(&[("IDOLHUB_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, EngineConfig::DEFAULT_LOG_FILTER);
    }

    #[test]
    fn rejects_malformed_flag() {
        let err = EngineConfig::from_lookup(lookup_from(&[("IDOLHUB_LOG_ANSI", "maybe")]))
            .unwrap_err();
        assert!(err.to_string().contains("IDOLHUB_LOG_ANSI"));
    }
}
