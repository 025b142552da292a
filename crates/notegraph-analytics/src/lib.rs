//! # Note Graph Analytics
//!
//! Composite analytics over a note collection and the graph built from it.
//!
//! - **Basic**: note, node, edge, orphan, link and word counters
//! - **Graph**: directed density, average out-degree, strongly connected
//!   components, raw-count leaderboards and dense clusters
//! - **Content**: word count and reading time distributions, outbound link
//!   histogram, orphanage rate
//! - **Tags**: frequencies and pairwise co-occurrence
//!
//! Graph analytics use directed semantics throughout and are independent of
//! `notegraph_graph::GraphQuery`, whose components are undirected and whose
//! centrality is normalized.
//!
//! ```
//! use notegraph_analytics::calculate_analytics;
//! use notegraph_core::{GraphOptions, Note};
//! use notegraph_graph::build_note_graph;
//!
//! let notes = vec![
//!     Note::new("a").with_links(["b"]),
//!     Note::new("b").with_links(["c"]),
//!     Note::new("c").with_links(["a"]),
//! ];
//! let graph = build_note_graph(&notes, &GraphOptions::default());
//! let result = calculate_analytics(&notes, &graph);
//!
//! assert_eq!(result.graph.connected_components, 1);
//! assert_eq!(result.graph.clusters[0].members, vec!["a", "b", "c"]);
//! ```

pub mod content;
pub mod engine;
pub mod graph_analytics;
pub mod scc;
pub mod tags;

pub use content::{ContentStats, LinkBucket, analyze_content};
pub use engine::{AnalyticsEngine, AnalyticsResult, BasicStats, calculate_analytics};
pub use graph_analytics::{
    CentralityLeaderboards, Cluster, GraphAnalytics, RankedNote, analyze_graph,
};
pub use scc::strongly_connected_components;
pub use tags::{TagCount, TagPair, TagStats, analyze_tags};

pub mod prelude {
    pub use crate::engine::{AnalyticsEngine, AnalyticsResult, calculate_analytics};
    pub use crate::graph_analytics::{Cluster, GraphAnalytics};
    pub use notegraph_core::prelude::*;
}
