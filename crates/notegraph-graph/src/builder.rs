//! Note graph construction.
//!
//! A build runs four passes over the note collection:
//!
//! 1. index notes by slug and create one node per note, with the raw
//!    outbound link count as its forward count
//! 2. add an edge for every link whose target exists (plus the reverse edge
//!    in bidirectional mode) and record backlinks
//! 3. count backlinks, flag orphans and schedule nodes below the
//!    minimum-connections threshold for removal
//! 4. drop scheduled nodes, filter edges to surviving endpoints and recount
//!    everything from the filtered edge list
//!
//! Pass 3 is evaluated once against the counts before removal. Dropping a
//! node does not re-check its neighbours against the threshold.

use notegraph_core::{Edge, GraphNode, GraphOptions, Note, NoteGraph};
use petgraph::graph::DiGraph;
use std::collections::{HashMap, HashSet};

/// Build a note graph from a complete note collection
pub fn build_note_graph(notes: &[Note], options: &GraphOptions) -> NoteGraph {
    GraphBuilder::new(*options).build(notes)
}

/// Graph builder holding the construction options
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphBuilder {
    options: GraphOptions,
}

/// Edge between two positions of the working node list
type WorkingEdge = (usize, usize, Edge);

impl GraphBuilder {
    /// Create a builder with the given options
    pub fn new(options: GraphOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GraphOptions {
        &self.options
    }

    /// Build the graph. Never fails: dangling links, self links and
    /// duplicate slugs are all handled structurally.
    pub fn build(&self, notes: &[Note]) -> NoteGraph {
        let (mut nodes, indexed) = index_notes(notes);
        let (edges, backlinks) = self.link_notes(&indexed);

        log::debug!(
            "Indexed {} notes into {} nodes with {} edges",
            notes.len(),
            nodes.len(),
            edges.len()
        );

        // Pass 3: connectivity before any removal
        let mut removed = vec![false; nodes.len()];
        for (i, node) in nodes.iter_mut().enumerate() {
            node.recount(node.forward_link_count, backlinks.len_of(i));

            let below_threshold = node.link_count < self.options.minimum_connections;
            let dropped_orphan = node.is_orphan() && !self.options.include_orphans;
            if below_threshold || dropped_orphan {
                removed[i] = true;
            }
        }

        let graph = self.assemble(nodes, edges, removed);

        log::info!(
            "Built note graph: {} nodes, {} edges, {} orphans",
            graph.node_count(),
            graph.edge_count(),
            graph.orphan_count()
        );

        graph
    }

    /// Pass 2: edges in outbound-link order, reverse edge right after its
    /// forward edge
    fn link_notes(&self, indexed: &SlugIndex<'_>) -> (Vec<WorkingEdge>, BacklinkSets) {
        let mut edges = Vec::new();
        let mut backlinks = BacklinkSets::new(indexed.notes.len());
        let mut dangling = 0usize;

        for (source, note) in indexed.notes.iter().enumerate() {
            for link in &note.outbound_links {
                let Some(target) = indexed.get(link) else {
                    dangling += 1;
                    continue;
                };

                edges.push((source, target, Edge::forward()));
                backlinks.insert(target, source);

                if self.options.bidirectional && source != target {
                    edges.push((target, source, Edge::reverse()));
                    backlinks.insert(source, target);
                }
            }
        }

        if dangling > 0 {
            log::debug!("Dropped {} links to unknown notes", dangling);
        }

        (edges, backlinks)
    }

    /// Pass 4: filter, recount from the surviving edges and move everything
    /// into a fresh arena
    fn assemble(
        &self,
        mut nodes: Vec<GraphNode>,
        edges: Vec<WorkingEdge>,
        mut removed: Vec<bool>,
    ) -> NoteGraph {
        let scheduled = removed.iter().filter(|&&r| r).count();

        let edges: Vec<WorkingEdge> = edges
            .into_iter()
            .filter(|(s, t, _)| !removed[*s] && !removed[*t])
            .collect();

        let mut forward = vec![0usize; nodes.len()];
        let mut backlinks = BacklinkSets::new(nodes.len());
        for (source, target, _) in &edges {
            forward[*source] += 1;
            backlinks.insert(*target, *source);
        }

        let mut late_orphans = 0usize;
        for (i, node) in nodes.iter_mut().enumerate() {
            if removed[i] {
                continue;
            }
            node.recount(forward[i], backlinks.len_of(i));

            // Orphaned by the removals above. They carry no edges, so
            // dropping them leaves every other count intact.
            if node.is_orphan() && !self.options.include_orphans {
                removed[i] = true;
                late_orphans += 1;
            }
        }

        if scheduled + late_orphans > 0 {
            log::debug!(
                "Removed {} nodes below threshold or orphaned, {} orphaned by removal",
                scheduled,
                late_orphans
            );
        }

        let survivors = removed.iter().filter(|&&r| !r).count();
        let mut arena = DiGraph::with_capacity(survivors, edges.len());
        let mut remap = vec![None; nodes.len()];
        for (i, node) in nodes.into_iter().enumerate() {
            if !removed[i] {
                remap[i] = Some(arena.add_node(node));
            }
        }

        for (source, target, edge) in edges {
            if let (Some(s), Some(t)) = (remap[source], remap[target]) {
                arena.add_edge(s, t, edge);
            }
        }

        let mut arena_backlinks = vec![Vec::new(); survivors];
        for (i, sources) in backlinks.sets.into_iter().enumerate() {
            if let Some(target) = remap[i] {
                arena_backlinks[target.index()] =
                    sources.into_iter().filter_map(|s| remap[s]).collect();
            }
        }

        NoteGraph::from_parts(arena, arena_backlinks)
    }
}

/// Pass 1: slug lookup scoped to a single build, first occurrence wins
struct SlugIndex<'a> {
    notes: Vec<&'a Note>,
    positions: HashMap<&'a str, usize>,
}

impl SlugIndex<'_> {
    fn get(&self, slug: &str) -> Option<usize> {
        self.positions.get(slug).copied()
    }
}

fn index_notes(notes: &[Note]) -> (Vec<GraphNode>, SlugIndex<'_>) {
    let mut nodes = Vec::with_capacity(notes.len());
    let mut index = SlugIndex {
        notes: Vec::with_capacity(notes.len()),
        positions: HashMap::with_capacity(notes.len()),
    };

    for note in notes {
        if index.positions.contains_key(note.slug.as_str()) {
            log::warn!("Duplicate slug '{}' ignored", note.slug);
            continue;
        }

        index.positions.insert(note.slug.as_str(), index.notes.len());
        index.notes.push(note);

        let mut node = GraphNode::from_note(note);
        node.recount(note.outbound_links.len(), 0);
        nodes.push(node);
    }

    (nodes, index)
}

/// Per-target source sets, deduplicated, in first-seen order
struct BacklinkSets {
    sets: Vec<Vec<usize>>,
    seen: HashSet<(usize, usize)>,
}

impl BacklinkSets {
    fn new(len: usize) -> Self {
        Self {
            sets: vec![Vec::new(); len],
            seen: HashSet::new(),
        }
    }

    fn insert(&mut self, target: usize, source: usize) {
        if self.seen.insert((target, source)) {
            self.sets[target].push(source);
        }
    }

    fn len_of(&self, target: usize) -> usize {
        self.sets[target].len()
    }
}
