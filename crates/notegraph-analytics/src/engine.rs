//! Composite analytics over a note collection and its graph.

use crate::content::{ContentStats, analyze_content};
use crate::graph_analytics::{GraphAnalytics, analyze_graph};
use crate::tags::{TagStats, analyze_tags};
use notegraph_core::stats::ratio;
use notegraph_core::{AnalyticsOptions, Note, NoteGraph};
use serde::{Deserialize, Serialize};

/// Simple counters over notes and graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    pub total_notes: usize,
    pub total_nodes: usize,
    pub total_edges: usize,
    pub orphan_count: usize,
    /// Raw outbound links, dangling and duplicate ones included
    pub total_outbound_links: usize,
    pub total_words: usize,
    pub average_words_per_note: f64,
    pub average_links_per_note: f64,
    pub unique_tags: usize,
}

/// Everything [`AnalyticsEngine`] computes in one pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsResult {
    pub basic: BasicStats,
    pub graph: GraphAnalytics,
    pub content: ContentStats,
    pub tags: TagStats,
}

/// Analytics engine with configurable limits
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    options: AnalyticsOptions,
}

impl AnalyticsEngine {
    pub fn new(options: AnalyticsOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalyticsOptions {
        &self.options
    }

    /// Compute all analytics. `notes` should be the collection `graph` was
    /// built from; note-level figures use every note, filtered or not.
    pub fn calculate(&self, notes: &[Note], graph: &NoteGraph) -> AnalyticsResult {
        let tags = analyze_tags(
            notes,
            self.options.top_tags_limit,
            self.options.top_tag_pairs_limit,
        );
        let basic = basic_stats(notes, graph, tags.unique_tags);
        let graph_analytics = analyze_graph(graph, &self.options);
        let content = analyze_content(notes);

        log::info!(
            "Analytics: {} notes, {} nodes, {} edges, {} SCCs, {} clusters, {} tags",
            basic.total_notes,
            basic.total_nodes,
            basic.total_edges,
            graph_analytics.connected_components,
            graph_analytics.clusters.len(),
            tags.unique_tags
        );

        AnalyticsResult {
            basic,
            graph: graph_analytics,
            content,
            tags,
        }
    }
}

/// Compute analytics with default limits
pub fn calculate_analytics(notes: &[Note], graph: &NoteGraph) -> AnalyticsResult {
    AnalyticsEngine::default().calculate(notes, graph)
}

fn basic_stats(notes: &[Note], graph: &NoteGraph, unique_tags: usize) -> BasicStats {
    let total_notes = notes.len();
    let total_words: usize = notes.iter().map(|n| n.word_count).sum();
    let total_outbound_links: usize = notes.iter().map(|n| n.outbound_links.len()).sum();

    BasicStats {
        total_notes,
        total_nodes: graph.node_count(),
        total_edges: graph.edge_count(),
        orphan_count: graph.orphan_count(),
        total_outbound_links,
        total_words,
        average_words_per_note: ratio(total_words as f64, total_notes as f64),
        average_links_per_note: ratio(total_outbound_links as f64, total_notes as f64),
        unique_tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_core::GraphOptions;
    use notegraph_graph::build_note_graph;

    fn sample_notes() -> Vec<Note> {
        vec![
            Note::new("a")
                .with_links(["b", "missing"])
                .with_tags(["rust", "graph"])
                .with_content_stats(100, 0.5),
            Note::new("b")
                .with_links(["c"])
                .with_tags(["rust"])
                .with_content_stats(300, 1.5),
            Note::new("c")
                .with_links(["a"])
                .with_content_stats(200, 1.0),
            Note::new("lonely").with_content_stats(0, 0.0),
        ]
    }

    #[test]
    fn test_calculate_analytics() {
        let notes = sample_notes();
        let graph = build_note_graph(&notes, &GraphOptions::default());
        let result = calculate_analytics(&notes, &graph);

        assert_eq!(result.basic.total_notes, 4);
        assert_eq!(result.basic.total_nodes, 4);
        assert_eq!(result.basic.total_edges, 3);
        assert_eq!(result.basic.orphan_count, 1);
        assert_eq!(result.basic.total_outbound_links, 4);
        assert_eq!(result.basic.total_words, 600);
        assert_eq!(result.basic.average_words_per_note, 150.0);
        assert_eq!(result.basic.average_links_per_note, 1.0);
        assert_eq!(result.basic.unique_tags, 2);

        // a -> b -> c -> a plus the isolated note
        assert_eq!(result.graph.connected_components, 2);
        assert_eq!(result.graph.clusters.len(), 1);
        assert_eq!(result.graph.clusters[0].density, 0.5);

        assert_eq!(result.content.notes_without_links, 1);
        assert_eq!(result.tags.top_tags[0].tag, "rust");
    }

    #[test]
    fn test_note_level_figures_ignore_filtering() {
        let notes = sample_notes();
        let graph = build_note_graph(&notes, &GraphOptions::new().include_orphans(false));
        let result = calculate_analytics(&notes, &graph);

        assert_eq!(result.basic.total_notes, 4);
        assert_eq!(result.basic.total_nodes, 3);
        assert_eq!(result.basic.orphan_count, 0);
    }

    #[test]
    fn test_configured_limits() {
        let notes = sample_notes();
        let graph = build_note_graph(&notes, &GraphOptions::default());
        let engine = AnalyticsEngine::new(AnalyticsOptions {
            leaderboard_limit: 1,
            top_tags_limit: 1,
            ..Default::default()
        });
        let result = engine.calculate(&notes, &graph);

        assert_eq!(result.graph.centrality.highest.len(), 1);
        assert_eq!(result.tags.top_tags.len(), 1);
    }

    #[test]
    fn test_empty_inputs() {
        let result = calculate_analytics(&[], &NoteGraph::new());
        assert_eq!(result.basic, BasicStats::default());
        assert_eq!(result.graph, GraphAnalytics::default());
        assert_eq!(result.content.orphanage_rate, 0.0);
        assert_eq!(result.tags.unique_tags, 0);
    }

    #[test]
    fn test_result_serializes() {
        let notes = sample_notes();
        let graph = build_note_graph(&notes, &GraphOptions::default());
        let json = serde_json::to_value(calculate_analytics(&notes, &graph)).unwrap();
        assert_eq!(json["basic"]["total_edges"], 3);
        assert_eq!(json["graph"]["clusters"][0]["id"], "cluster-1");
    }
}
