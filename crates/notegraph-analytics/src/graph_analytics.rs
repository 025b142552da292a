//! Directed-graph analytics: density, out-degree, strongly connected
//! components, raw-count leaderboards and dense clusters.

use crate::scc::strongly_connected_components;
use notegraph_core::stats::{directed_density, ratio};
use notegraph_core::{AnalyticsOptions, GraphNode, NodeIndex, NoteGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A note on a leaderboard, with the raw count it was ranked by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedNote {
    pub slug: String,
    pub label: String,
    pub score: usize,
}

/// Top notes by total, forward and backward link counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CentralityLeaderboards {
    /// By `link_count`
    pub highest: Vec<RankedNote>,
    /// By `forward_link_count`
    pub hubs: Vec<RankedNote>,
    /// By `backlink_count`
    pub authorities: Vec<RankedNote>,
}

/// A strongly connected component large enough to report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    pub id: String,
    /// Member slugs in node order
    pub members: Vec<String>,
    /// Edges with both endpoints inside the cluster
    pub internal_edges: usize,
    /// `internal_edges / (size * (size - 1))`
    pub density: f64,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Directed structure of a note graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphAnalytics {
    pub node_count: usize,
    pub edge_count: usize,
    pub orphan_count: usize,
    /// `edges / (n * (n - 1))`
    pub density: f64,
    /// Average out-degree, `edges / n`
    pub average_degree: f64,
    /// Number of strongly connected components
    pub connected_components: usize,
    pub centrality: CentralityLeaderboards,
    pub clusters: Vec<Cluster>,
}

/// Compute directed analytics for a graph
pub fn analyze_graph(graph: &NoteGraph, options: &AnalyticsOptions) -> GraphAnalytics {
    let node_count = graph.node_count();
    let edge_count = graph.edge_count();
    let components = strongly_connected_components(graph);

    log::debug!(
        "Found {} strongly connected components in {} nodes",
        components.len(),
        node_count
    );

    GraphAnalytics {
        node_count,
        edge_count,
        orphan_count: graph.orphan_count(),
        density: directed_density(edge_count, node_count),
        average_degree: ratio(edge_count as f64, node_count as f64),
        connected_components: components.len(),
        centrality: leaderboards(graph, options.leaderboard_limit),
        clusters: clusters(graph, components, options),
    }
}

fn leaderboards(graph: &NoteGraph, limit: usize) -> CentralityLeaderboards {
    CentralityLeaderboards {
        highest: top_by(graph, limit, |node| node.link_count),
        hubs: top_by(graph, limit, |node| node.forward_link_count),
        authorities: top_by(graph, limit, |node| node.backlink_count),
    }
}

fn top_by(graph: &NoteGraph, limit: usize, key: impl Fn(&GraphNode) -> usize) -> Vec<RankedNote> {
    let mut nodes: Vec<&GraphNode> = graph.nodes().collect();
    nodes.sort_by(|a, b| key(b).cmp(&key(a)));
    nodes
        .into_iter()
        .take(limit)
        .map(|node| RankedNote {
            slug: node.id.clone(),
            label: node.label.clone(),
            score: key(node),
        })
        .collect()
}

fn clusters(
    graph: &NoteGraph,
    components: Vec<Vec<NodeIndex>>,
    options: &AnalyticsOptions,
) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = components
        .into_iter()
        .filter(|component| component.len() >= options.min_cluster_size)
        .map(|mut component| {
            component.sort_unstable();
            let members: HashSet<_> = component.iter().copied().collect();
            let internal_edges = graph
                .edge_endpoints()
                .filter(|(s, t)| members.contains(s) && members.contains(t))
                .count();
            let size = component.len();

            Cluster {
                id: String::new(),
                members: component
                    .into_iter()
                    .map(|idx| graph.slug_at(idx).to_string())
                    .collect(),
                internal_edges,
                density: ratio(internal_edges as f64, (size * (size - 1)) as f64),
            }
        })
        .collect();

    clusters.sort_by(|a, b| b.density.total_cmp(&a.density));
    clusters.truncate(options.cluster_limit);
    for (i, cluster) in clusters.iter_mut().enumerate() {
        cluster.id = format!("cluster-{}", i + 1);
    }
    clusters
}
