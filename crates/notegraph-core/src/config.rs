//! Configuration types for graph construction and analytics.
//!
//! Follows a builder pattern for complex configuration with validation.
//! Every field has a default, so an empty YAML document is a valid config.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Options controlling how a note graph is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Keep nodes with no links in either direction
    pub include_orphans: bool,
    /// Add a reverse edge for every forward link
    pub bidirectional: bool,
    /// Drop nodes whose link count (before removal) is below this value
    pub minimum_connections: usize,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            include_orphans: true,
            bidirectional: false,
            minimum_connections: 0,
        }
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_orphans(mut self, include: bool) -> Self {
        self.include_orphans = include;
        self
    }

    pub fn bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    pub fn minimum_connections(mut self, minimum: usize) -> Self {
        self.minimum_connections = minimum;
        self
    }
}

/// Result-size limits used by the analytics engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsOptions {
    /// Entries per centrality leaderboard
    pub leaderboard_limit: usize,
    /// Clusters kept after sorting by density
    pub cluster_limit: usize,
    /// Smallest strongly connected component reported as a cluster
    pub min_cluster_size: usize,
    pub top_tags_limit: usize,
    pub top_tag_pairs_limit: usize,
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        Self {
            leaderboard_limit: 10,
            cluster_limit: 5,
            min_cluster_size: 3,
            top_tags_limit: 20,
            top_tag_pairs_limit: 10,
        }
    }
}

impl AnalyticsOptions {
    /// Validate the analytics limits
    pub fn validate(&self) -> Result<()> {
        if self.min_cluster_size < 2 {
            return Err(Error::config_error(
                "min_cluster_size must be at least 2 for cluster density to be defined",
            ));
        }
        Ok(())
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Configuration profile name
    pub profile: String,
    /// Log filter handed to the logger (e.g. "info", "notegraph_graph=debug")
    pub log_level: String,
    pub graph: GraphOptions,
    pub analytics: AnalyticsOptions,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            log_level: "INFO".to_string(),
            graph: GraphOptions::default(),
            analytics: AnalyticsOptions::default(),
        }
    }
}

impl EngineConfig {
    /// Create new configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new engine config with builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::new()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.profile.trim().is_empty() {
            return Err(Error::config_error("Profile name cannot be empty"));
        }
        if self.log_level.trim().parse::<log::LevelFilter>().is_err() {
            return Err(Error::config_error(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }
        self.analytics.validate()
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::config_not_found(path));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config_error(format!(
                "Failed to load config from {}: {}",
                path.display(),
                e
            ))
        })?;

        log::debug!("Loaded engine config from {}", path.display());
        Self::from_yaml_str(&content)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml_string()?;
        std::fs::write(path, yaml).map_err(|e| {
            Error::config_error(format!(
                "Failed to save config to {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Builder for EngineConfig
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.config.profile = profile.into();
        self
    }

    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.config.log_level = level.into();
        self
    }

    pub fn graph_options(mut self, options: GraphOptions) -> Self {
        self.config.graph = options;
        self
    }

    pub fn analytics_options(mut self, options: AnalyticsOptions) -> Self {
        self.config.analytics = options;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_graph_option_defaults() {
        let options = GraphOptions::default();
        assert!(options.include_orphans);
        assert!(!options.bidirectional);
        assert_eq!(options.minimum_connections, 0);
    }

    #[test]
    fn test_engine_config_builder() {
        let config = EngineConfig::builder()
            .profile("strict")
            .graph_options(GraphOptions::new().minimum_connections(2))
            .build()
            .unwrap();

        assert_eq!(config.profile, "strict");
        assert_eq!(config.graph.minimum_connections, 2);
        assert_eq!(config.analytics.leaderboard_limit, 10);
    }

    #[test]
    fn test_rejects_degenerate_cluster_size() {
        let result = EngineConfig::builder()
            .analytics_options(AnalyticsOptions {
                min_cluster_size: 1,
                ..Default::default()
            })
            .build();
        assert!(matches!(result, Err(Error::ConfigError { .. })));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let result = EngineConfig::builder().log_level("LOUD").build();
        assert!(matches!(result, Err(Error::ConfigError { .. })));
        assert!(EngineConfig::builder().log_level("debug").build().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = EngineConfig::from_yaml_str("graph:\n  bidirectional: true\n").unwrap();
        assert!(config.graph.bidirectional);
        assert!(config.graph.include_orphans);
        assert_eq!(config.analytics.cluster_limit, 5);
    }

    #[test]
    fn test_invalid_yaml_is_reported() {
        let result = EngineConfig::from_yaml_str("graph: [not, a, map]");
        assert!(matches!(result, Err(Error::Yaml(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notegraph.yaml");

        let mut config = EngineConfig::new();
        config.graph.minimum_connections = 3;
        config.analytics.top_tags_limit = 5;
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = EngineConfig::load(&temp.path().join("absent.yaml"));
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }
}
