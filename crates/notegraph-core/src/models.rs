//! Core data models: input notes and the node/edge records of a note graph.
//!
//! These types are designed to be:
//! - **Serializable**: All types derive Serialize/Deserialize
//! - **Debuggable**: Derive Debug for easy inspection
//! - **Plain data**: no interior mutability, safe to share across threads

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Label attached to edges synthesized by bidirectional graph construction
pub const REVERSE_EDGE_LABEL: &str = "reverse";

/// An already-parsed note, as produced by the markdown parsing layer.
///
/// Outbound links may point at slugs that do not exist, at the note itself,
/// or repeat the same target; graph construction handles all of these
/// structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Stable, unique identifier
    pub slug: String,
    /// Display title (falls back to the slug)
    #[serde(default)]
    pub label: Option<String>,
    /// Target slugs in document order
    #[serde(default)]
    pub outbound_links: Vec<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub word_count: usize,
    /// Estimated reading time in minutes
    #[serde(default)]
    pub reading_time: f64,
    /// Opaque data passed through to the graph node
    #[serde(default)]
    pub metadata: serde_json::Value,
}

impl Note {
    /// Create a note with no links, tags or content statistics
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: None,
            outbound_links: Vec::new(),
            tags: BTreeSet::new(),
            word_count: 0,
            reading_time: 0.0,
            metadata: serde_json::Value::Null,
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set outbound links
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outbound_links = links.into_iter().map(Into::into).collect();
        self
    }

    /// Set tags
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set word count and reading time
    pub fn with_content_stats(mut self, word_count: usize, reading_time: f64) -> Self {
        self.word_count = word_count;
        self.reading_time = reading_time;
        self
    }

    /// Set passthrough metadata
    pub fn with_metadata(mut self, metadata: serde_json::Value) -> Self {
        self.metadata = metadata;
        self
    }

    /// Label shown for this note
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.slug)
    }
}

/// A node in the note graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Slug of the underlying note
    pub id: String,
    pub label: String,
    pub metadata: serde_json::Value,
    /// Outbound edges whose target exists
    pub forward_link_count: usize,
    /// Distinct sources linking here
    pub backlink_count: usize,
    /// Always `forward_link_count + backlink_count`
    pub link_count: usize,
}

impl GraphNode {
    /// Create a node for a note with zeroed counters
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.slug.clone(),
            label: note.display_label().to_string(),
            metadata: note.metadata.clone(),
            forward_link_count: 0,
            backlink_count: 0,
            link_count: 0,
        }
    }

    /// Set both counters and the derived total in one step
    pub fn recount(&mut self, forward: usize, back: usize) {
        self.forward_link_count = forward;
        self.backlink_count = back;
        self.link_count = forward + back;
    }

    /// No links in either direction
    pub fn is_orphan(&self) -> bool {
        self.link_count == 0
    }
}

/// Edge weight stored in the graph arena. Endpoints are arena indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub label: Option<String>,
}

impl Edge {
    /// An unlabeled forward edge
    pub fn forward() -> Self {
        Self { label: None }
    }

    /// The synthesized reverse of a forward edge
    pub fn reverse() -> Self {
        Self {
            label: Some(REVERSE_EDGE_LABEL.to_string()),
        }
    }

    pub fn is_reverse(&self) -> bool {
        self.label.as_deref() == Some(REVERSE_EDGE_LABEL)
    }
}
