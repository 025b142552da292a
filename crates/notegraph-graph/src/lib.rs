//! # Note Graph Construction and Queries
//!
//! Builds a navigable knowledge graph from parsed notes and answers link
//! queries over it.
//!
//! Provides:
//! - Graph construction with orphan, bidirectional and minimum-connection options
//! - Backlink and forward-link queries
//! - Shortest directed paths (BFS)
//! - Weakly connected components
//! - Degree centrality, hubs and authorities
//! - Undirected neighborhoods
//! - Graph statistics
//! - Health analysis and broken link detection
//!
//! ## Quick Start
//!
//! ```
//! use notegraph_graph::{GraphQuery, build_note_graph};
//! use notegraph_core::{GraphOptions, Note};
//!
//! let notes = vec![
//!     Note::new("a").with_links(["b", "c"]),
//!     Note::new("b").with_links(["c"]),
//!     Note::new("c"),
//! ];
//!
//! let graph = build_note_graph(&notes, &GraphOptions::default());
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 3);
//!
//! let query = GraphQuery::new(&graph);
//! assert_eq!(query.backlinks("c"), vec!["a", "b"]);
//! assert_eq!(query.shortest_path("a", "c"), Some(vec!["a", "c"]));
//! ```
//!
//! ## Core Concepts
//!
//! ### Nodes and Edges
//! - **Nodes**: one per note, carrying forward, back and total link counts
//! - **Edges**: directed links between existing notes, in link order
//! - **Orphans**: nodes with no links in either direction
//!
//! ### Finding Broken Links
//!
//! ```
//! use notegraph_graph::{HealthAnalyzer, build_note_graph};
//! use notegraph_core::{GraphOptions, Note};
//!
//! let notes = vec![Note::new("a").with_links(["missing"])];
//! let graph = build_note_graph(&notes, &GraphOptions::default());
//!
//! let report = HealthAnalyzer::with_notes(&graph, &notes).analyze();
//! for broken in &report.broken_links {
//!     println!("Broken: {} -> {}", broken.source, broken.target);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`builder`] - Four-pass graph construction
//! - [`query`] - Link queries and statistics
//! - [`health`] - Vault health analysis
//!
//! ## Performance Characteristics
//!
//! - Graph construction: O(n + m) where n = notes, m = links
//! - Query setup: O(n + m) adjacency build, then per-query BFS/DFS cost
//! - Backlink queries: O(degree)
//! - Weak components: near-linear (union-find)

pub mod builder;
pub mod health;
pub mod query;

pub use builder::{GraphBuilder, build_note_graph};
pub use health::{BrokenLink, HealthAnalyzer, HealthReport};
pub use query::{Connections, DEFAULT_LIMIT, DEFAULT_THRESHOLD, GraphQuery, GraphStatistics};

pub mod prelude {
    pub use crate::builder::{GraphBuilder, build_note_graph};
    pub use crate::health::{BrokenLink, HealthAnalyzer, HealthReport};
    pub use crate::query::{Connections, GraphQuery, GraphStatistics};
    pub use notegraph_core::prelude::*;
}
