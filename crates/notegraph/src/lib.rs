//! # notegraph
//!
//! Knowledge graph construction and structural analytics for interlinked
//! notes. This crate ties the workspace together behind a single
//! configuration-driven entry point, [`NoteGraphEngine`].
//!
//! ## Quick Start
//!
//! ```
//! use notegraph::prelude::*;
//!
//! let notes = vec![
//!     Note::new("a").with_links(["b"]).with_tags(["intro"]),
//!     Note::new("b").with_links(["c"]),
//!     Note::new("c").with_links(["a"]),
//!     Note::new("d"),
//! ];
//!
//! let engine = NoteGraphEngine::from_profile(ConfigProfile::Default);
//! let report = engine.run(&notes);
//!
//! assert_eq!(report.graph.node_count(), 4);
//! assert_eq!(report.analytics.graph.clusters.len(), 1);
//! assert_eq!(report.statistics.component_count, 2);
//! ```
//!
//! ## Crates
//!
//! - [`notegraph_core`] - Notes, the graph arena, configuration, validation
//! - [`notegraph_graph`] - Graph construction, link queries, health analysis
//! - [`notegraph_analytics`] - Directed analytics, content and tag statistics
//!
//! ## Configuration
//!
//! [`EngineConfig`] is loaded from YAML or created from a [`ConfigProfile`]:
//!
//! ```yaml
//! profile: strict
//! log_level: INFO
//! graph:
//!   include_orphans: false
//!   bidirectional: false
//!   minimum_connections: 2
//! analytics:
//!   leaderboard_limit: 10
//!   cluster_limit: 5
//! ```

pub mod logging;

use notegraph_analytics::{AnalyticsEngine, AnalyticsResult};
use notegraph_core::{Error, NoteValidator, Result, ValidationReport, Validator};
use notegraph_graph::{GraphBuilder, GraphQuery, GraphStatistics, HealthAnalyzer, HealthReport};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

pub use notegraph_core::{ConfigProfile, EngineConfig, Note, NoteGraph};

/// Everything produced by one [`NoteGraphEngine::run`]
#[derive(Debug, Clone, Serialize)]
pub struct EngineReport {
    pub graph: NoteGraph,
    pub statistics: GraphStatistics,
    pub analytics: AnalyticsResult,
    pub health: HealthReport,
}

impl EngineReport {
    /// Pretty-printed JSON for downstream exporters
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::other(format!("Failed to serialize report: {}", e)))
    }
}

/// Link view of a single note
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteReport {
    pub slug: String,
    pub label: String,
    pub forward: Vec<String>,
    pub backlinks: Vec<String>,
    /// Normalized degree centrality
    pub centrality: f64,
    /// Notes within the requested undirected distance
    pub neighborhood: Vec<String>,
}

/// Configuration-driven entry point: build, query, analyze
#[derive(Debug, Clone, Default)]
pub struct NoteGraphEngine {
    config: EngineConfig,
}

impl NoteGraphEngine {
    /// Create an engine from a validated configuration
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create an engine from a preset
    pub fn from_profile(profile: ConfigProfile) -> Self {
        Self {
            config: profile.create_config(),
        }
    }

    /// Create an engine from a YAML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        Self::new(EngineConfig::load(path)?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the note graph with the configured options
    pub fn build(&self, notes: &[Note]) -> NoteGraph {
        let started = Instant::now();
        let graph = GraphBuilder::new(self.config.graph).build(notes);
        log::debug!("Graph built in {:?}", started.elapsed());
        graph
    }

    /// Analytics over the notes and the graph built from them
    pub fn analyze(&self, notes: &[Note], graph: &NoteGraph) -> AnalyticsResult {
        let started = Instant::now();
        let result = AnalyticsEngine::new(self.config.analytics).calculate(notes, graph);
        log::debug!("Analytics computed in {:?}", started.elapsed());
        result
    }

    /// Health report, broken links included
    pub fn health(&self, notes: &[Note], graph: &NoteGraph) -> HealthReport {
        HealthAnalyzer::with_notes(graph, notes).analyze()
    }

    /// Validate the note collection without building anything
    pub fn validate(&self, notes: &[Note]) -> ValidationReport {
        NoteValidator::new().validate(notes)
    }

    /// Build, then compute statistics, analytics and health
    pub fn run(&self, notes: &[Note]) -> EngineReport {
        let started = Instant::now();
        let graph = self.build(notes);
        let statistics = GraphQuery::new(&graph).statistics();
        let analytics = self.analyze(notes, &graph);
        let health = self.health(notes, &graph);

        log::info!(
            "Processed {} notes into {} nodes and {} edges (health {}) in {:?}",
            notes.len(),
            graph.node_count(),
            graph.edge_count(),
            health.health_score,
            started.elapsed()
        );

        EngineReport {
            graph,
            statistics,
            analytics,
            health,
        }
    }

    /// Like [`run`](Self::run), but refuses note collections that fail
    /// validation (duplicate or empty slugs)
    pub fn run_checked(&self, notes: &[Note]) -> Result<EngineReport> {
        let validator = NoteValidator::new();
        let report = validator.validate(notes);
        if report.has_failures() {
            log::warn!(
                "{} rejected {} notes with {} issues",
                validator.name(),
                notes.len(),
                report.total_issues()
            );
        }
        report.into_result()?;
        Ok(self.run(notes))
    }

    /// Link view of one note, with its neighborhood up to `depth` hops
    pub fn inspect(&self, graph: &NoteGraph, slug: &str, depth: usize) -> Result<NoteReport> {
        let node = graph.node(slug).ok_or_else(|| Error::not_found(slug))?;
        let query = GraphQuery::new(graph);
        let connections = query.connections(slug);
        let centrality = query.centrality().get(slug).copied().unwrap_or(0.0);

        Ok(NoteReport {
            slug: node.id.clone(),
            label: node.label.clone(),
            forward: connections.forward.iter().map(|s| s.to_string()).collect(),
            backlinks: connections.backward.iter().map(|s| s.to_string()).collect(),
            centrality,
            neighborhood: query
                .neighborhood(slug, depth)
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{EngineReport, NoteGraphEngine, NoteReport};
    pub use notegraph_analytics::prelude::*;
    pub use notegraph_graph::prelude::*;
}
