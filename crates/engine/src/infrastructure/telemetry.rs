//! Tracing setup for processes embedding the engine.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::EngineConfig;

/// Install the global tracing subscriber.
///
/// Fails if the filter does not parse or a subscriber is already installed.
pub fn init_tracing(config: &EngineConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("Invalid log filter: {}", config.log_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_ansi(config.log_ansi))
        .try_init()
        .context("A global tracing subscriber is already installed")?;

    tracing::info!(filter = %config.log_filter, "Tracing initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_initialisation_is_rejected() {
        let config = EngineConfig {
            log_filter: "idolhub_engine=debug".to_string(),
            log_ansi: false,
        };
        assert!(init_tracing(&config).is_ok());
        assert!(init_tracing(&config).is_err());
    }
}
