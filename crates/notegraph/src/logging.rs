//! Logger initialisation for binaries and tests embedding the engine.
//!
//! Library crates only emit through the `log` facade; installing a logger is
//! left to the application. `RUST_LOG` overrides the configured level.

use log::LevelFilter;
use notegraph_core::{EngineConfig, Error, Result};
use std::str::FromStr;

/// Parse a level name such as `"INFO"` or `"debug"`
pub fn parse_level(level: &str) -> Result<LevelFilter> {
    LevelFilter::from_str(level.trim())
        .map_err(|_| Error::config_error(format!("Unknown log level: {}", level)))
}

/// Install `env_logger` at the given level.
///
/// Returns `Ok(false)` when a logger was already installed.
pub fn init(level: &str) -> Result<bool> {
    let filter = parse_level(level)?;
    let installed = env_logger::Builder::new()
        .filter_level(filter)
        .parse_default_env()
        .format_timestamp_millis()
        .try_init()
        .is_ok();

    if installed {
        log::debug!("Logging initialised at {}", filter);
    }
    Ok(installed)
}

/// Install `env_logger` at the level named in the configuration
pub fn init_from_config(config: &EngineConfig) -> Result<bool> {
    init(&config.log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("INFO").unwrap(), LevelFilter::Info);
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level(" warn ").unwrap(), LevelFilter::Warn);
        assert!(matches!(
            parse_level("loud"),
            Err(Error::ConfigError { .. })
        ));
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = EngineConfig::default();
        init_from_config(&config).unwrap();
        // a second install is refused but not an error
        assert!(!init("DEBUG").unwrap());
    }

    #[test]
    fn test_init_rejects_unknown_level() {
        assert!(init("chatty").is_err());
    }
}
