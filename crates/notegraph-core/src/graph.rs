//! The note graph: an arena of nodes addressed by index, plus slug lookup.
//!
//! Nodes live in a petgraph `DiGraph` arena; edges refer to them by
//! [`NodeIndex`] rather than by reference, so the cyclic link structure of a
//! vault needs no shared ownership. A `NoteGraph` is an immutable snapshot:
//! it is assembled once by the builder and only read afterwards.

use crate::models::{Edge, GraphNode};
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};

/// Node index type for the graph arena
pub type NodeIndex = petgraph::graph::NodeIndex;

/// Built knowledge graph over a note collection
#[derive(Debug, Clone, Default)]
pub struct NoteGraph {
    /// Directed arena: node weights are graph nodes, edges in insertion order
    graph: DiGraph<GraphNode, Edge>,

    /// Slug to arena index
    slug_index: HashMap<String, NodeIndex>,

    /// Inbound sources per node, deduplicated, in first-seen order
    backlinks: Vec<Vec<NodeIndex>>,

    /// Nodes whose final link count is zero, in node order
    orphans: Vec<NodeIndex>,
}

impl NoteGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a graph from a finished arena and its backlink sets.
    ///
    /// Node counters must already be final; the slug index and orphan list
    /// are derived here.
    pub fn from_parts(graph: DiGraph<GraphNode, Edge>, mut backlinks: Vec<Vec<NodeIndex>>) -> Self {
        backlinks.resize(graph.node_count(), Vec::new());

        let slug_index = graph
            .node_indices()
            .map(|idx| (graph[idx].id.clone(), idx))
            .collect();

        let orphans = graph
            .node_indices()
            .filter(|&idx| graph[idx].is_orphan())
            .collect();

        Self {
            graph,
            slug_index,
            backlinks,
            orphans,
        }
    }

    /// Get node count
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.slug_index.contains_key(slug)
    }

    /// Arena index of a slug
    pub fn index_of(&self, slug: &str) -> Option<NodeIndex> {
        self.slug_index.get(slug).copied()
    }

    /// Look up a node by slug
    pub fn node(&self, slug: &str) -> Option<&GraphNode> {
        self.index_of(slug).map(|idx| &self.graph[idx])
    }

    /// Node stored at an arena index
    ///
    /// # Panics
    /// If `idx` does not belong to this graph.
    pub fn node_at(&self, idx: NodeIndex) -> &GraphNode {
        &self.graph[idx]
    }

    /// Slug stored at an arena index
    pub fn slug_at(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].id
    }

    /// Arena indices in node order
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// All nodes in insertion (note) order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All slugs in node order
    pub fn slugs(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes().map(|node| node.id.as_str())
    }

    /// All edges in insertion order as `(source, target, edge)`
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, &Edge)> + '_ {
        self.graph.edge_references().map(move |edge| {
            (
                self.slug_at(edge.source()),
                self.slug_at(edge.target()),
                edge.weight(),
            )
        })
    }

    /// Edge endpoints as arena indices, in insertion order
    pub fn edge_endpoints(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target()))
    }

    /// Sources linking to `slug`; empty if the slug is unknown
    pub fn backlinks(&self, slug: &str) -> Vec<&str> {
        self.index_of(slug)
            .map(|idx| {
                self.backlink_indices(idx)
                    .iter()
                    .map(|&src| self.slug_at(src))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Backlink set of an arena index
    pub fn backlink_indices(&self, idx: NodeIndex) -> &[NodeIndex] {
        self.backlinks
            .get(idx.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Orphaned slugs in node order
    pub fn orphans(&self) -> impl Iterator<Item = &str> + '_ {
        self.orphans.iter().map(move |&idx| self.slug_at(idx))
    }

    pub fn orphan_count(&self) -> usize {
        self.orphans.len()
    }

    pub fn is_orphan(&self, slug: &str) -> bool {
        self.node(slug).is_some_and(GraphNode::is_orphan)
    }

    /// Underlying arena, for algorithms that want petgraph directly
    pub fn arena(&self) -> &DiGraph<GraphNode, Edge> {
        &self.graph
    }

    /// Owned, slug-keyed copy for exporters and indexers
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().cloned().collect(),
            edges: self
                .edges()
                .map(|(source, target, edge)| EdgeRecord {
                    source: source.to_string(),
                    target: target.to_string(),
                    label: edge.label.clone(),
                })
                .collect(),
            backlinks: self
                .node_indices()
                .filter(|&idx| !self.backlink_indices(idx).is_empty())
                .map(|idx| {
                    let sources = self
                        .backlink_indices(idx)
                        .iter()
                        .map(|&src| self.slug_at(src).to_string())
                        .collect();
                    (self.slug_at(idx).to_string(), sources)
                })
                .collect(),
            orphans: self.orphans().map(str::to_string).collect(),
        }
    }

    /// SHA-256 over nodes, counters, edges and orphans, in order.
    ///
    /// Two graphs built from the same notes with the same options always
    /// share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for node in self.nodes() {
            hasher.update(node.id.as_bytes());
            hasher.update(
                format!(
                    "\0{}\0{}\0{}\n",
                    node.forward_link_count, node.backlink_count, node.link_count
                )
                .as_bytes(),
            );
        }
        for (source, target, edge) in self.edges() {
            hasher.update(source.as_bytes());
            hasher.update(b"\0");
            hasher.update(target.as_bytes());
            hasher.update(b"\0");
            hasher.update(edge.label.as_deref().unwrap_or_default().as_bytes());
            hasher.update(b"\n");
        }
        for orphan in self.orphans() {
            hasher.update(orphan.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}

impl Serialize for NoteGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.snapshot().serialize(serializer)
    }
}

/// Slug-keyed edge record used in snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    pub label: Option<String>,
}

/// Serializable, owned view of a [`NoteGraph`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<EdgeRecord>,
    pub backlinks: BTreeMap<String, Vec<String>>,
    pub orphans: Vec<String>,
}
