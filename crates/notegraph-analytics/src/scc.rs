//! Strongly connected components of a note graph.
//!
//! Uses petgraph's iterative Tarjan over the graph arena, so long directed
//! chains cannot exhaust the thread stack.

use notegraph_core::{NodeIndex, NoteGraph};
use petgraph::algo::tarjan_scc;

/// Strongly connected components of a note graph, as arena indices.
///
/// Components come out in Tarjan completion order (sinks first); members are
/// sorted by node order.
pub fn strongly_connected_components(graph: &NoteGraph) -> Vec<Vec<NodeIndex>> {
    tarjan_scc(graph.arena())
        .into_iter()
        .map(|mut component| {
            component.sort_unstable();
            component
        })
        .collect()
}
