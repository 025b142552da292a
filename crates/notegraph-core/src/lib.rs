//! # notegraph core
//!
//! Core data models, error types, and configuration for the note graph engine.
//! This crate defines the canonical types that all other crates depend on.
//!
//! ## Architecture Principles
//!
//! - **Total functions**: graph building and analytics never fail; only
//!   configuration I/O and explicit validation return [`Result`]
//! - **Arena storage**: nodes live in a petgraph arena and are referenced by
//!   index, never by pointer
//! - **Immutable snapshots**: a [`NoteGraph`] is built once and only read
//!
//! ## Core Modules
//!
//! - [`models`] - Input notes, graph nodes and edges
//! - [`graph`] - The [`NoteGraph`] arena and its serializable snapshot
//! - [`error`] - Error types and Result alias
//! - [`config`] - Graph and analytics options, engine configuration
//! - [`profiles`] - Configuration presets
//! - [`validation`] - Optional checks over a note collection
//! - [`stats`] - Numeric distribution summaries
//!
//! ## Usage Examples
//!
//! ```
//! use notegraph_core::prelude::*;
//!
//! let note = Note::new("rust")
//!     .with_label("Rust")
//!     .with_links(["cargo", "ownership"])
//!     .with_tags(["lang"]);
//! assert_eq!(note.display_label(), "Rust");
//!
//! let config = ConfigProfile::Strict.create_config();
//! assert_eq!(config.graph.minimum_connections, 2);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod models;
pub mod profiles;
pub mod stats;
pub mod validation;

pub use config::*;
pub use error::{Error, Result};
pub use graph::{EdgeRecord, GraphSnapshot, NodeIndex, NoteGraph};
pub use models::*;
pub use profiles::ConfigProfile;
pub use stats::Summary;
pub use validation::{
    NoteValidator, Severity, ValidationIssue, ValidationReport, ValidationSummary, Validator,
};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{AnalyticsOptions, EngineConfig, GraphOptions};
    pub use crate::error::{Error, Result};
    pub use crate::graph::{NodeIndex, NoteGraph};
    pub use crate::models::{Edge, GraphNode, Note};
    pub use crate::profiles::ConfigProfile;
    pub use crate::stats::Summary;
    pub use crate::validation::{NoteValidator, Severity, ValidationReport, Validator};
}
