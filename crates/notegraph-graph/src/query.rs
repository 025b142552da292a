//! Link queries over a built note graph.
//!
//! Two notions of connectivity live here and elsewhere in the workspace:
//! [`GraphQuery::connected_components`] treats every edge as undirected
//! (weak components), while the analytics engine counts strongly connected
//! components over directed edges. Likewise [`GraphQuery::centrality`] is
//! normalized to `[0, 1]` whereas analytics leaderboards report raw counts.

use notegraph_core::stats::{directed_density, ratio};
use notegraph_core::{GraphNode, NodeIndex, NoteGraph};
use petgraph::unionfind::UnionFind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, VecDeque};

/// Default result size for the "most linked" rankings
pub const DEFAULT_LIMIT: usize = 10;

/// Default count threshold for hubs and authorities
pub const DEFAULT_THRESHOLD: usize = 5;

/// Forward and backward neighbours of a note
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Connections<'a> {
    /// Edge targets in edge order
    pub forward: Vec<&'a str>,
    /// Backlink sources
    pub backward: Vec<&'a str>,
}

/// Summary statistics of a note graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    pub orphan_count: usize,
    /// Mean of `link_count` over all nodes
    pub average_connections: f64,
    /// `edges / (n * (n - 1))`
    pub density: f64,
    /// Number of weakly connected components
    pub component_count: usize,
    pub largest_component_size: usize,
}

/// Query interface over a [`NoteGraph`]
pub struct GraphQuery<'a> {
    graph: &'a NoteGraph,
    /// Outgoing targets per node, in edge order
    outgoing: Vec<Vec<NodeIndex>>,
    /// Incoming sources per node, in edge order
    incoming: Vec<Vec<NodeIndex>>,
}

impl<'a> GraphQuery<'a> {
    /// Create a query over the graph
    pub fn new(graph: &'a NoteGraph) -> Self {
        let n = graph.node_count();
        let mut outgoing = vec![Vec::new(); n];
        let mut incoming = vec![Vec::new(); n];
        for (source, target) in graph.edge_endpoints() {
            outgoing[source.index()].push(target);
            incoming[target.index()].push(source);
        }

        Self {
            graph,
            outgoing,
            incoming,
        }
    }

    pub fn graph(&self) -> &'a NoteGraph {
        self.graph
    }

    fn slug(&self, idx: NodeIndex) -> &'a str {
        self.graph.slug_at(idx)
    }

    /// Notes linking to `slug`; empty if the slug is unknown
    pub fn backlinks(&self, slug: &str) -> Vec<&'a str> {
        self.graph.backlinks(slug)
    }

    /// Forward targets and backlinks of `slug`
    pub fn connections(&self, slug: &str) -> Connections<'a> {
        let Some(idx) = self.graph.index_of(slug) else {
            return Connections::default();
        };

        Connections {
            forward: self.outgoing[idx.index()]
                .iter()
                .map(|&t| self.slug(t))
                .collect(),
            backward: self.backlinks(slug),
        }
    }

    /// Shortest directed path from `source` to `target`, both inclusive.
    ///
    /// Returns `Some([source])` when the two are equal and `None` when either
    /// slug is unknown or `target` is unreachable. Among equally short paths,
    /// the first one discovered in edge order wins.
    pub fn shortest_path(&self, source: &str, target: &str) -> Option<Vec<&'a str>> {
        let start = self.graph.index_of(source)?;
        let goal = self.graph.index_of(target)?;

        if start == goal {
            return Some(vec![self.slug(start)]);
        }

        let mut parent: Vec<Option<NodeIndex>> = vec![None; self.graph.node_count()];
        let mut visited = vec![false; self.graph.node_count()];
        let mut queue = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &next in &self.outgoing[current.index()] {
                if visited[next.index()] {
                    continue;
                }
                visited[next.index()] = true;
                parent[next.index()] = Some(current);

                if next == goal {
                    let mut path = vec![self.slug(goal)];
                    let mut step = current;
                    path.push(self.slug(step));
                    while let Some(prev) = parent[step.index()] {
                        path.push(self.slug(prev));
                        step = prev;
                    }
                    path.reverse();
                    return Some(path);
                }

                queue.push_back(next);
            }
        }

        None
    }

    /// Weakly connected components, largest first.
    ///
    /// Edges are read as undirected. Members keep node order; components of
    /// equal size keep the order of their first member.
    pub fn connected_components(&self) -> Vec<Vec<&'a str>> {
        let n = self.graph.node_count();
        let mut sets = UnionFind::new(n);
        for (source, target) in self.graph.edge_endpoints() {
            sets.union(source.index(), target.index());
        }

        let mut slot_of_root: HashMap<usize, usize> = HashMap::new();
        let mut components: Vec<Vec<&'a str>> = Vec::new();
        for idx in self.graph.node_indices() {
            let root = sets.find_mut(idx.index());
            let slot = *slot_of_root.entry(root).or_insert_with(|| {
                components.push(Vec::new());
                components.len() - 1
            });
            components[slot].push(self.slug(idx));
        }

        components.sort_by(|a, b| b.len().cmp(&a.len()));
        components
    }

    /// Degree centrality `link_count / (n - 1)`, capped at 1.0.
    ///
    /// Every node scores 0 when the graph has at most one node.
    pub fn centrality(&self) -> HashMap<&'a str, f64> {
        let n = self.graph.node_count();
        self.graph
            .nodes()
            .map(|node| {
                let score = if n <= 1 {
                    0.0
                } else {
                    (node.link_count as f64 / (n - 1) as f64).min(1.0)
                };
                (node.id.as_str(), score)
            })
            .collect()
    }

    /// Nodes with the highest total link count
    pub fn most_linked(&self, limit: usize) -> Vec<&'a GraphNode> {
        self.ranked(|node| node.link_count, limit)
    }

    /// Nodes with the most distinct backlinks
    pub fn most_referenced(&self, limit: usize) -> Vec<&'a GraphNode> {
        self.ranked(|node| node.backlink_count, limit)
    }

    /// Every node with at least `threshold` forward links, most first
    pub fn hubs(&self, threshold: usize) -> Vec<&'a GraphNode> {
        self.at_least(|node| node.forward_link_count, threshold)
    }

    /// Every node with at least `threshold` backlinks, most first
    pub fn authorities(&self, threshold: usize) -> Vec<&'a GraphNode> {
        self.at_least(|node| node.backlink_count, threshold)
    }

    fn ranked(&self, key: impl Fn(&GraphNode) -> usize, limit: usize) -> Vec<&'a GraphNode> {
        let mut nodes: Vec<&'a GraphNode> = self.graph.nodes().collect();
        nodes.sort_by(|a, b| key(b).cmp(&key(a)));
        nodes.truncate(limit);
        nodes
    }

    fn at_least(&self, key: impl Fn(&GraphNode) -> usize, threshold: usize) -> Vec<&'a GraphNode> {
        let mut nodes: Vec<&'a GraphNode> = self
            .graph
            .nodes()
            .filter(|node| key(node) >= threshold)
            .collect();
        nodes.sort_by(|a, b| key(b).cmp(&key(a)));
        nodes
    }

    /// Notes within `depth` hops of `slug`, following links both ways.
    ///
    /// The origin itself is never included. Unknown slugs and `depth < 1`
    /// give an empty set.
    pub fn neighborhood(&self, slug: &str, depth: usize) -> BTreeSet<&'a str> {
        let mut found = BTreeSet::new();
        let Some(origin) = self.graph.index_of(slug) else {
            return found;
        };
        if depth < 1 {
            return found;
        }

        let mut visited = vec![false; self.graph.node_count()];
        visited[origin.index()] = true;
        let mut queue = VecDeque::from([(origin, 0usize)]);

        while let Some((current, hops)) = queue.pop_front() {
            if hops >= depth {
                continue;
            }

            let neighbours = self.outgoing[current.index()]
                .iter()
                .chain(&self.incoming[current.index()]);
            for &next in neighbours {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    found.insert(self.slug(next));
                    queue.push_back((next, hops + 1));
                }
            }
        }

        found
    }

    /// Counts, average connections, density and weak-component structure
    pub fn statistics(&self) -> GraphStatistics {
        let node_count = self.graph.node_count();
        let edge_count = self.graph.edge_count();
        let total_links: usize = self.graph.nodes().map(|node| node.link_count).sum();
        let components = self.connected_components();

        GraphStatistics {
            node_count,
            edge_count,
            orphan_count: self.graph.orphan_count(),
            average_connections: ratio(total_links as f64, node_count as f64),
            density: directed_density(edge_count, node_count),
            component_count: components.len(),
            largest_component_size: components.first().map_or(0, Vec::len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_note_graph;
    use notegraph_core::{GraphOptions, Note};

    fn note(slug: &str, links: &[&str]) -> Note {
        Note::new(slug).with_links(links.iter().copied())
    }

    fn graph_of(notes: Vec<Note>) -> NoteGraph {
        build_note_graph(&notes, &GraphOptions::default())
    }

    fn ids(nodes: &[&GraphNode]) -> Vec<String> {
        nodes.iter().map(|n| n.id.clone()).collect()
    }

    #[test]
    fn test_connections() {
        let graph = graph_of(vec![note("a", &["b", "c"]), note("b", &["c"]), note("c", &[])]);
        let query = GraphQuery::new(&graph);

        let conn = query.connections("b");
        assert_eq!(conn.forward, vec!["c"]);
        assert_eq!(conn.backward, vec!["a"]);

        assert_eq!(query.connections("missing"), Connections::default());
        assert_eq!(query.backlinks("c"), vec!["a", "b"]);
    }

    #[test]
    fn test_shortest_path() {
        let graph = graph_of(vec![
            note("a", &["b", "x"]),
            note("b", &["c"]),
            note("x", &["y"]),
            note("y", &["c"]),
            note("c", &[]),
        ]);
        let query = GraphQuery::new(&graph);

        assert_eq!(query.shortest_path("a", "c"), Some(vec!["a", "b", "c"]));
        assert_eq!(query.shortest_path("a", "b"), Some(vec!["a", "b"]));
        assert_eq!(query.shortest_path("a", "a"), Some(vec!["a"]));
        // directed: no way back
        assert_eq!(query.shortest_path("c", "a"), None);
        assert_eq!(query.shortest_path("a", "missing"), None);
        assert_eq!(query.shortest_path("missing", "missing"), None);
    }

    #[test]
    fn test_shortest_path_without_edges() {
        let graph = graph_of(vec![note("a", &[]), note("b", &[])]);
        let query = GraphQuery::new(&graph);
        assert_eq!(query.shortest_path("a", "b"), None);
        assert_eq!(query.shortest_path("b", "a"), None);
    }

    #[test]
    fn test_connected_components_are_undirected() {
        let graph = graph_of(vec![
            note("a", &["b"]),
            note("b", &[]),
            note("c", &["b"]),
            note("d", &[]),
            note("e", &["f"]),
            note("f", &[]),
        ]);
        let query = GraphQuery::new(&graph);

        let components = query.connected_components();
        assert_eq!(components.len(), 3);
        assert_eq!(components[0], vec!["a", "b", "c"]);
        assert_eq!(components[1], vec!["e", "f"]);
        assert_eq!(components[2], vec!["d"]);
    }

    #[test]
    fn test_centrality() {
        let graph = graph_of(vec![note("a", &["b", "c"]), note("b", &[]), note("c", &[])]);
        let centrality = GraphQuery::new(&graph).centrality();

        assert_eq!(centrality["a"], 1.0);
        assert_eq!(centrality["b"], 0.5);

        let single = graph_of(vec![note("solo", &["solo"])]);
        assert_eq!(GraphQuery::new(&single).centrality()["solo"], 0.0);
    }

    #[test]
    fn test_centrality_is_capped() {
        let graph = graph_of(vec![note("a", &["b", "b", "b"]), note("b", &["a"])]);
        let centrality = GraphQuery::new(&graph).centrality();
        assert_eq!(centrality["a"], 1.0);
    }

    #[test]
    fn test_rankings() {
        let graph = graph_of(vec![
            note("hub", &["a", "b", "c"]),
            note("a", &["c"]),
            note("b", &["c"]),
            note("c", &[]),
        ]);
        let query = GraphQuery::new(&graph);

        assert_eq!(ids(&query.most_linked(1)), vec!["hub"]);
        assert_eq!(ids(&query.most_referenced(2)), vec!["c", "a"]);
        assert_eq!(query.most_linked(DEFAULT_LIMIT).len(), 4);

        assert_eq!(ids(&query.hubs(2)), vec!["hub"]);
        assert_eq!(ids(&query.authorities(1)), vec!["c", "a", "b"]);
        assert!(query.hubs(DEFAULT_THRESHOLD).is_empty());
    }

    #[test]
    fn test_hubs_are_unbounded() {
        let mut layout: Vec<(String, Vec<String>)> = Vec::new();
        for i in 0..15 {
            let links = (0..5).map(|j| format!("t{}", j)).collect();
            layout.push((format!("h{}", i), links));
        }
        for j in 0..5 {
            layout.push((format!("t{}", j), Vec::new()));
        }
        let notes: Vec<Note> = layout
            .into_iter()
            .map(|(slug, links)| Note::new(slug).with_links(links))
            .collect();
        let graph = build_note_graph(&notes, &GraphOptions::default());
        let query = GraphQuery::new(&graph);

        assert_eq!(query.hubs(DEFAULT_THRESHOLD).len(), 15);
        assert_eq!(query.authorities(DEFAULT_THRESHOLD).len(), 5);
        assert_eq!(query.most_linked(DEFAULT_LIMIT).len(), 10);
    }

    #[test]
    fn test_neighborhood() {
        let graph = graph_of(vec![
            note("center", &["a", "b"]),
            note("a", &["far"]),
            note("b", &[]),
            note("c", &["center"]),
            note("d", &["center"]),
            note("far", &[]),
        ]);
        let query = GraphQuery::new(&graph);

        let one: Vec<&str> = query.neighborhood("center", 1).into_iter().collect();
        assert_eq!(one, vec!["a", "b", "c", "d"]);

        let two = query.neighborhood("center", 2);
        assert!(two.contains("far"));
        assert!(!two.contains("center"));

        assert!(query.neighborhood("center", 0).is_empty());
        assert!(query.neighborhood("missing", 3).is_empty());
    }

    #[test]
    fn test_statistics() {
        let graph = graph_of(vec![note("a", &["b", "c"]), note("b", &["c"]), note("c", &[]), note("d", &[])]);
        let stats = GraphQuery::new(&graph).statistics();

        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.orphan_count, 1);
        assert_eq!(stats.average_connections, 1.5);
        assert_eq!(stats.density, 0.25);
        assert_eq!(stats.component_count, 2);
        assert_eq!(stats.largest_component_size, 3);
    }

    #[test]
    fn test_statistics_on_empty_graph() {
        let graph = NoteGraph::new();
        let stats = GraphQuery::new(&graph).statistics();
        assert_eq!(stats.density, 0.0);
        assert_eq!(stats.average_connections, 0.0);
        assert_eq!(stats.largest_component_size, 0);
    }
}
