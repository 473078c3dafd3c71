use gtp_core::graph::{DotGraph, Edge, edges_from_walk};
use gtp_scanner::{Topic, Walk, WalkOutcome};
use std::fs;
use tempfile::tempdir;

fn walk_of(labels: &[&str], outcome: WalkOutcome) -> Walk {
    let visited: Vec<Topic> = labels
        .iter()
        .map(|l| Topic::new(format!("https://en.wikipedia.org/wiki/{}", l)))
        .collect();
    Walk::new("https://en.wikipedia.org/wiki/Seed", visited, outcome)
}

#[test]
fn edges_are_consecutive_pairs_in_order() {
    let walk = walk_of(&["Seed", "Alpha", "Philosophy"], WalkOutcome::ReachedTerminal);
    let edges = edges_from_walk(&walk);

    assert_eq!(edges.len(), 2);
    assert_eq!(edges[0].source, "Seed");
    assert_eq!(edges[0].target, "Alpha");
    assert_eq!(edges[1].source, "Alpha");
    assert_eq!(edges[1].target, "Philosophy");
}

#[test]
fn single_hop_walk_emits_one_edge() {
    let walk = walk_of(&["Seed", "Philosophy"], WalkOutcome::ReachedTerminal);
    assert_eq!(
        edges_from_walk(&walk),
        vec![Edge {
            source: "Seed".to_string(),
            target: "Philosophy".to_string(),
        }]
    );
}

#[test]
fn cycle_walk_emits_four_edges_with_repeated_pair() {
    // [seed, A, B, A, A] per the cycle rule.
    let walk = walk_of(&["Seed", "A", "B", "A", "A"], WalkOutcome::DetectedCycle);
    let edges = edges_from_walk(&walk);

    assert_eq!(edges.len(), 4);
    assert_eq!(edges[2].source, "B");
    assert_eq!(edges[2].target, "A");
    assert_eq!(edges[3].source, "A");
    assert_eq!(edges[3].target, "A");
}

#[test]
fn seed_only_walk_emits_no_edges() {
    let walk = walk_of(&["Seed"], WalkOutcome::Aborted);
    assert!(edges_from_walk(&walk).is_empty());
}

#[test]
fn edges_carry_canonical_labels() {
    let walk = walk_of(
        &["Gas_(state)", "Spin-off", "Philosophy"],
        WalkOutcome::ReachedTerminal,
    );
    let edges = edges_from_walk(&walk);

    assert_eq!(edges[0].source, "Gas__state_");
    assert_eq!(edges[0].target, "Spin_off");
}

#[test]
fn dot_file_is_well_formed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gtp_graph.dot");

    let mut graph = DotGraph::create(&path).unwrap();
    graph
        .append_edges(&[
            Edge {
                source: "Seed".to_string(),
                target: "Alpha".to_string(),
            },
            Edge {
                source: "Alpha".to_string(),
                target: "Philosophy".to_string(),
            },
        ])
        .unwrap();
    graph.finalize().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "digraph gtp {\n    \"Seed\" -> \"Alpha\";\n    \"Alpha\" -> \"Philosophy\";\n}\n"
    );
}

#[test]
fn appended_edges_are_flushed_before_finalize() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.dot");

    let mut graph = DotGraph::create(&path).unwrap();
    graph
        .append_edges(&[Edge {
            source: "A".to_string(),
            target: "B".to_string(),
        }])
        .unwrap();

    // The writer is still open, but every append flushes durably.
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"A\" -> \"B\";"));

    graph.finalize().unwrap();
}

#[test]
fn empty_run_still_produces_valid_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.dot");

    let graph = DotGraph::create(&path).unwrap();
    graph.finalize().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "digraph gtp {\n}\n");
}

#[test]
fn create_truncates_previous_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.dot");
    fs::write(&path, "stale data from an earlier run").unwrap();

    let graph = DotGraph::create(&path).unwrap();
    graph.finalize().unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "digraph gtp {\n}\n");
}
