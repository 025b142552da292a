//! Tag frequency and co-occurrence statistics.

use notegraph_core::Note;
use notegraph_core::stats::ratio;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A tag and the number of notes carrying it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Two tags appearing on the same note; `first < second`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPair {
    pub first: String,
    pub second: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagStats {
    pub unique_tags: usize,
    pub total_tag_uses: usize,
    pub average_tags_per_note: f64,
    pub frequencies: BTreeMap<String, usize>,
    /// Most used tags, count descending then name
    pub top_tags: Vec<TagCount>,
    /// Every co-occurring pair, count descending then pair
    pub co_occurrences: Vec<TagPair>,
    pub top_pairs: Vec<TagPair>,
}

/// Compute tag statistics, keeping `top_tags` and `top_pairs` entries
pub fn analyze_tags(notes: &[Note], top_tags: usize, top_pairs: usize) -> TagStats {
    let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
    let mut pairs: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    let mut total_tag_uses = 0;

    for note in notes {
        total_tag_uses += note.tags.len();
        for tag in &note.tags {
            *frequencies.entry(tag.clone()).or_insert(0) += 1;
        }

        // BTreeSet iteration is sorted, so (a, b) already has a < b
        let tags: Vec<&str> = note.tags.iter().map(String::as_str).collect();
        for (i, &first) in tags.iter().enumerate() {
            for &second in &tags[i + 1..] {
                *pairs.entry((first, second)).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<TagCount> = frequencies
        .iter()
        .map(|(tag, &count)| TagCount {
            tag: tag.clone(),
            count,
        })
        .collect();
    // stable sort keeps the BTreeMap's name order among ties
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(top_tags);

    let mut co_occurrences: Vec<TagPair> = pairs
        .into_iter()
        .map(|((first, second), count)| TagPair {
            first: first.to_string(),
            second: second.to_string(),
            count,
        })
        .collect();
    co_occurrences.sort_by(|a, b| b.count.cmp(&a.count));
    let top = co_occurrences.iter().take(top_pairs).cloned().collect();

    TagStats {
        unique_tags: frequencies.len(),
        total_tag_uses,
        average_tags_per_note: ratio(total_tag_uses as f64, notes.len() as f64),
        frequencies,
        top_tags: ranked,
        co_occurrences,
        top_pairs: top,
    }
}
