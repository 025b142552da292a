//! Engine configuration loaded from disk

use notegraph::prelude::*;
use notegraph::logging;
use tempfile::TempDir;

fn sample_notes() -> Vec<Note> {
    vec![
        Note::new("hub").with_links(["a", "b", "c"]),
        Note::new("a").with_links(["hub"]),
        Note::new("b").with_links(["hub"]),
        Note::new("c"),
        Note::new("stray"),
    ]
}

#[test]
fn test_engine_from_saved_profile() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notegraph.yaml");
    ConfigProfile::Strict.create_config().save(&path).unwrap();

    let engine = NoteGraphEngine::load(&path).unwrap();
    assert_eq!(engine.config().profile, "strict");
    logging::init_from_config(engine.config()).unwrap();

    let graph = engine.build(&sample_notes());
    // c has a single backlink, stray has none
    assert!(!graph.contains("c"));
    assert!(!graph.contains("stray"));
    assert_eq!(graph.node_count(), 3);
}

#[test]
fn test_hand_written_yaml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notegraph.yaml");
    std::fs::write(
        &path,
        "profile: custom\nlog_level: WARN\ngraph:\n  bidirectional: true\nanalytics:\n  leaderboard_limit: 2\n",
    )
    .unwrap();

    let engine = NoteGraphEngine::load(&path).unwrap();
    let report = engine.run(&sample_notes());

    // three forward links from hub and two back, each mirrored
    assert_eq!(report.graph.edge_count(), 10);
    assert_eq!(report.analytics.graph.centrality.highest.len(), 2);
    assert_eq!(report.analytics.graph.centrality.highest[0].slug, "hub");
}

#[test]
fn test_missing_and_invalid_config() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        NoteGraphEngine::load(&temp.path().join("absent.yaml")),
        Err(Error::ConfigNotFound { .. })
    ));

    let path = temp.path().join("bad.yaml");
    std::fs::write(&path, "analytics:\n  min_cluster_size: 0\n").unwrap();
    assert!(matches!(
        NoteGraphEngine::load(&path),
        Err(Error::ConfigError { .. })
    ));
}
