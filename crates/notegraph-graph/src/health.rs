//! Vault health analysis and broken link detection.
//!
//! Provides tools for analyzing vault health, detecting broken links,
//! finding orphaned notes, and analyzing connectivity patterns.

use crate::query::GraphQuery;
use notegraph_core::{Note, NoteGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Upper bound on suggestions per broken link
const MAX_SUGGESTIONS: usize = 5;

/// A link whose target is not a note in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrokenLink {
    /// Note containing the broken link
    pub source: String,
    /// Target that couldn't be resolved
    pub target: String,
    /// Existing slugs that look similar
    pub suggestions: Vec<String>,
}

/// Health analysis report for a note collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub total_notes: usize,
    pub total_links: usize,
    pub broken_links: Vec<BrokenLink>,
    /// Notes with no incoming or outgoing links
    pub orphaned_notes: Vec<String>,
    /// Small groups of notes not connected to the rest
    pub isolated_clusters: Vec<Vec<String>>,
    /// Most connected notes with their link counts
    pub hub_notes: Vec<(String, usize)>,
    /// Notes with incoming but no outgoing links
    pub dead_end_notes: Vec<String>,
    /// Overall health score (0-100)
    pub health_score: u8,
}

impl HealthReport {
    /// Create a new empty health report
    pub fn new() -> Self {
        Self {
            total_notes: 0,
            total_links: 0,
            broken_links: Vec::new(),
            orphaned_notes: Vec::new(),
            isolated_clusters: Vec::new(),
            hub_notes: Vec::new(),
            dead_end_notes: Vec::new(),
            health_score: 100,
        }
    }

    /// Calculate health score based on issues
    pub fn calculate_score(&mut self) {
        if self.total_notes == 0 {
            self.health_score = 0;
            return;
        }

        let mut score: u8 = 100;

        // Penalize broken links (up to -30 points)
        let broken_ratio = self.broken_links.len() as f32
            / (self.total_links + self.broken_links.len()).max(1) as f32;
        score = score.saturating_sub((broken_ratio * 30.0) as u8);

        // Penalize orphaned notes (up to -20 points)
        let orphaned_ratio = self.orphaned_notes.len() as f32 / self.total_notes as f32;
        score = score.saturating_sub((orphaned_ratio * 20.0) as u8);

        // Penalize isolated clusters (up to -15 points)
        let isolated_ratio = self.isolated_clusters.len() as f32 / self.total_notes as f32;
        score = score.saturating_sub((isolated_ratio * 15.0) as u8);

        // Penalize dead ends (up to -10 points)
        let dead_end_ratio = self.dead_end_notes.len() as f32 / self.total_notes as f32;
        score = score.saturating_sub((dead_end_ratio * 10.0) as u8);

        self.health_score = score;
    }

    /// Check if the collection is healthy (score >= 80)
    pub fn is_healthy(&self) -> bool {
        self.health_score >= 80
    }
}

impl Default for HealthReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Health analyzer over a built graph
pub struct HealthAnalyzer<'a> {
    graph: &'a NoteGraph,
    notes: Option<&'a [Note]>,
}

impl<'a> HealthAnalyzer<'a> {
    /// Create a new health analyzer
    pub fn new(graph: &'a NoteGraph) -> Self {
        Self { graph, notes: None }
    }

    /// Create a health analyzer with access to the source notes
    /// (needed for detecting broken links, which never enter the graph)
    pub fn with_notes(graph: &'a NoteGraph, notes: &'a [Note]) -> Self {
        Self {
            graph,
            notes: Some(notes),
        }
    }

    /// Run a comprehensive health analysis
    pub fn analyze(&self) -> HealthReport {
        let query = GraphQuery::new(self.graph);
        let mut report = HealthReport::new();

        report.total_notes = self.graph.node_count();
        report.total_links = self.graph.edge_count();
        report.broken_links = self.find_broken_links();
        report.orphaned_notes = self.graph.orphans().map(str::to_string).collect();
        report.dead_end_notes = self.find_dead_end_notes();
        report.hub_notes = self.find_hub_notes(&query, 5);
        report.isolated_clusters = self.find_isolated_clusters(&query);

        report.calculate_score();

        log::debug!(
            "Health analysis: score {} ({} broken, {} orphaned, {} dead ends)",
            report.health_score,
            report.broken_links.len(),
            report.orphaned_notes.len(),
            report.dead_end_notes.len()
        );

        report
    }

    /// Quick health check (just broken links and orphans)
    pub fn quick_check(&self) -> HealthReport {
        let mut report = HealthReport::new();

        report.total_notes = self.graph.node_count();
        report.total_links = self.graph.edge_count();
        report.broken_links = self.find_broken_links();
        report.orphaned_notes = self.graph.orphans().map(str::to_string).collect();

        report.calculate_score();
        report
    }

    /// Outbound links whose target is not a note of the collection.
    ///
    /// Links to notes dropped by graph filtering are not broken. Links from
    /// notes that were themselves filtered out are skipped.
    fn find_broken_links(&self) -> Vec<BrokenLink> {
        let Some(notes) = self.notes else {
            return Vec::new();
        };
        let known: HashSet<&str> = notes.iter().map(|note| note.slug.as_str()).collect();

        notes
            .iter()
            .filter(|note| self.graph.contains(&note.slug))
            .flat_map(|note| {
                let known = &known;
                note.outbound_links
                    .iter()
                    .filter(move |target| !known.contains(target.as_str()))
                    .map(move |target| BrokenLink {
                        source: note.slug.clone(),
                        target: target.clone(),
                        suggestions: self.suggest_targets(target),
                    })
            })
            .collect()
    }

    /// Notes with backlinks but no forward links
    fn find_dead_end_notes(&self) -> Vec<String> {
        self.graph
            .nodes()
            .filter(|node| node.forward_link_count == 0 && node.backlink_count > 0)
            .map(|node| node.id.clone())
            .collect()
    }

    /// Most connected notes, orphans excluded
    fn find_hub_notes(&self, query: &GraphQuery<'_>, limit: usize) -> Vec<(String, usize)> {
        query
            .most_linked(limit)
            .into_iter()
            .filter(|node| node.link_count > 0)
            .map(|node| (node.id.clone(), node.link_count))
            .collect()
    }

    /// Weak components with more than one and fewer than five members
    fn find_isolated_clusters(&self, query: &GraphQuery<'_>) -> Vec<Vec<String>> {
        query
            .connected_components()
            .into_iter()
            .filter(|component| component.len() > 1 && component.len() < 5)
            .map(|component| component.into_iter().map(str::to_string).collect())
            .collect()
    }

    /// Suggest existing slugs similar to a broken target
    fn suggest_targets(&self, target: &str) -> Vec<String> {
        let target_lower = target.to_lowercase();

        self.graph
            .slugs()
            .filter(|slug| {
                let slug_lower = slug.to_lowercase();
                slug_lower.contains(&target_lower) || target_lower.contains(&slug_lower)
            })
            .take(MAX_SUGGESTIONS)
            .map(str::to_string)
            .collect()
    }
}
