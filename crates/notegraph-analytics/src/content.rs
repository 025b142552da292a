//! Content statistics: word counts, reading times and link density.

use notegraph_core::stats::ratio;
use notegraph_core::{Note, Summary};
use serde::{Deserialize, Serialize};

/// Histogram bucket bounds, inclusive; the last bucket is open-ended
const LINK_BUCKETS: [(usize, Option<usize>); 5] = [
    (0, Some(0)),
    (1, Some(2)),
    (3, Some(5)),
    (6, Some(10)),
    (11, None),
];

/// Number of notes whose raw outbound link count falls in `range`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkBucket {
    /// `"0"`, `"1-2"`, `"3-5"`, `"6-10"` or `"11+"`
    pub range: String,
    pub count: usize,
}

/// Aggregate content statistics over a note collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentStats {
    pub word_count: Summary,
    pub reading_time: Summary,
    pub link_distribution: Vec<LinkBucket>,
    /// Fraction of notes with no outbound links
    pub orphanage_rate: f64,
    pub notes_without_links: usize,
}

/// Compute content statistics over the input notes
pub fn analyze_content(notes: &[Note]) -> ContentStats {
    let mut counts = [0usize; LINK_BUCKETS.len()];
    for note in notes {
        counts[bucket_of(note.outbound_links.len())] += 1;
    }

    let notes_without_links = counts[0];

    ContentStats {
        word_count: Summary::from_values(notes.iter().map(|n| n.word_count as f64)),
        reading_time: Summary::from_values(notes.iter().map(|n| n.reading_time)),
        link_distribution: LINK_BUCKETS
            .iter()
            .zip(counts)
            .map(|(&bounds, count)| LinkBucket {
                range: bucket_label(bounds),
                count,
            })
            .collect(),
        orphanage_rate: ratio(notes_without_links as f64, notes.len() as f64),
        notes_without_links,
    }
}

fn bucket_of(links: usize) -> usize {
    LINK_BUCKETS
        .iter()
        .position(|&(low, high)| links >= low && high.is_none_or(|high| links <= high))
        .unwrap_or(LINK_BUCKETS.len() - 1)
}

fn bucket_label((low, high): (usize, Option<usize>)) -> String {
    match high {
        Some(high) if high == low => low.to_string(),
        Some(high) => format!("{}-{}", low, high),
        None => format!("{}+", low),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note_with(slug: &str, links: usize, words: usize) -> Note {
        Note::new(slug)
            .with_links((0..links).map(|i| format!("target-{}", i)))
            .with_content_stats(words, words as f64 / 200.0)
    }

    #[test]
    fn test_bucket_labels() {
        let labels: Vec<String> = LINK_BUCKETS.iter().map(|&b| bucket_label(b)).collect();
        assert_eq!(labels, vec!["0", "1-2", "3-5", "6-10", "11+"]);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(bucket_of(0), 0);
        assert_eq!(bucket_of(1), 1);
        assert_eq!(bucket_of(2), 1);
        assert_eq!(bucket_of(3), 2);
        assert_eq!(bucket_of(5), 2);
        assert_eq!(bucket_of(6), 3);
        assert_eq!(bucket_of(10), 3);
        assert_eq!(bucket_of(11), 4);
        assert_eq!(bucket_of(500), 4);
    }

    #[test]
    fn test_content_stats() {
        let notes = vec![
            note_with("a", 0, 100),
            note_with("b", 2, 300),
            note_with("c", 4, 200),
            note_with("d", 12, 400),
        ];
        let stats = analyze_content(&notes);

        assert_eq!(stats.word_count.count, 4);
        assert_eq!(stats.word_count.min, 100.0);
        assert_eq!(stats.word_count.max, 400.0);
        assert_eq!(stats.word_count.mean, 250.0);
        assert_eq!(stats.word_count.median, 250.0);
        assert_eq!(stats.reading_time.max, 2.0);

        let counts: Vec<usize> = stats.link_distribution.iter().map(|b| b.count).collect();
        assert_eq!(counts, vec![1, 1, 1, 0, 1]);
        assert_eq!(stats.notes_without_links, 1);
        assert_eq!(stats.orphanage_rate, 0.25);
    }

    #[test]
    fn test_raw_links_include_dangling_and_duplicates() {
        let notes = vec![Note::new("a").with_links(["missing", "missing", "a"])];
        let stats = analyze_content(&notes);
        assert_eq!(stats.link_distribution[2].count, 1);
        assert_eq!(stats.orphanage_rate, 0.0);
    }

    #[test]
    fn test_empty_collection() {
        let stats = analyze_content(&[]);
        assert_eq!(stats.word_count, Summary::default());
        assert_eq!(stats.orphanage_rate, 0.0);
        assert_eq!(stats.link_distribution.len(), 5);
        assert!(stats.link_distribution.iter().all(|b| b.count == 0));
    }
}
