//! Pre-configured profiles for common analysis scenarios
//!
//! - Default: every note, directed links, standard limits
//! - Strict: only notes with at least two connections, orphans dropped
//! - Bidirectional: links treated as mutual
//! - Overview: short leaderboards for dashboards
//! - Exhaustive: verbose logging, long leaderboards

use crate::config::EngineConfig;
use std::str::FromStr;

/// Profile selector for pre-configured engine setups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigProfile {
    /// Default options for graph construction and analytics
    Default,
    /// Well-connected core only
    Strict,
    /// Every link gets a reverse edge
    Bidirectional,
    /// Small result sets
    Overview,
    /// Large result sets, debug logging
    Exhaustive,
}

impl ConfigProfile {
    /// Create an EngineConfig from this profile
    pub fn create_config(self) -> EngineConfig {
        let mut config = EngineConfig::new();
        config.profile = self.name().to_string();

        match self {
            Self::Default => {}

            Self::Strict => {
                config.graph.include_orphans = false;
                config.graph.minimum_connections = 2;
            }

            Self::Bidirectional => {
                config.graph.bidirectional = true;
            }

            Self::Overview => {
                config.log_level = "WARN".to_string();
                config.analytics.leaderboard_limit = 5;
                config.analytics.cluster_limit = 3;
                config.analytics.top_tags_limit = 10;
                config.analytics.top_tag_pairs_limit = 5;
            }

            Self::Exhaustive => {
                config.log_level = "DEBUG".to_string();
                config.analytics.leaderboard_limit = 50;
                config.analytics.cluster_limit = 25;
                config.analytics.top_tags_limit = 100;
                config.analytics.top_tag_pairs_limit = 50;
            }
        }

        config
    }

    /// Profile name as used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Bidirectional => "bidirectional",
            Self::Overview => "overview",
            Self::Exhaustive => "exhaustive",
        }
    }
}

impl FromStr for ConfigProfile {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "strict" => Ok(Self::Strict),
            "bidirectional" => Ok(Self::Bidirectional),
            "overview" => Ok(Self::Overview),
            "exhaustive" => Ok(Self::Exhaustive),
            other => Err(crate::Error::config_error(format!(
                "Unknown profile: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_profile() {
        let config = ConfigProfile::Strict.create_config();
        assert_eq!(config.profile, "strict");
        assert!(!config.graph.include_orphans);
        assert_eq!(config.graph.minimum_connections, 2);
    }

    #[test]
    fn test_every_profile_validates() {
        for profile in [
            ConfigProfile::Default,
            ConfigProfile::Strict,
            ConfigProfile::Bidirectional,
            ConfigProfile::Overview,
            ConfigProfile::Exhaustive,
        ] {
            assert!(profile.create_config().validate().is_ok(), "{:?}", profile);
            assert_eq!(profile.name().parse::<ConfigProfile>().unwrap(), profile);
        }
    }

    #[test]
    fn test_unknown_profile() {
        assert!("turbo".parse::<ConfigProfile>().is_err());
    }
}
