use crate::graph::{DotGraph, edges_from_walk};
use gtp_scanner::{HttpFetcher, Topic, Walk, WalkOutcome, Walker, default_terminal_labels};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Options for a multi-seed walk run
pub struct WalkOptions {
    pub seeds: Vec<String>,
    pub max_sequence_len: usize,
    pub terminal_labels: Vec<String>,
    pub timeout_secs: u64,
    pub show_progress_bars: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            seeds: Vec::new(),
            max_sequence_len: 101,
            terminal_labels: default_terminal_labels(),
            timeout_secs: 10,
            show_progress_bars: true,
        }
    }
}

/// Callback for human-readable run progress lines
pub type WalkProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

/// What happened for one seed: a completed walk, or the error that
/// abandoned it. Failed seeds never abort the rest of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedOutcome {
    pub seed: String,
    pub walk: Option<Walk>,
    pub error: Option<String>,
}

impl SeedOutcome {
    fn completed(seed: &str, walk: Walk) -> Self {
        Self {
            seed: seed.to_string(),
            walk: Some(walk),
            error: None,
        }
    }

    fn failed(seed: &str, error: String) -> Self {
        Self {
            seed: seed.to_string(),
            walk: None,
            error: Some(error),
        }
    }
}

/// Walk every seed in submission order, appending each completed walk's
/// edges to the shared graph file.
///
/// Seeds are walked one at a time; the graph is a single append-only
/// target, and sequential order keeps output attribution trivially stable.
/// A failed seed contributes nothing to the graph.
pub async fn execute_walks(
    options: WalkOptions,
    graph: &mut DotGraph,
    progress_callback: Option<WalkProgressCallback>,
) -> Result<Vec<SeedOutcome>, String> {
    let WalkOptions {
        seeds,
        max_sequence_len,
        terminal_labels,
        timeout_secs,
        show_progress_bars,
    } = options;

    let progress_bar = if show_progress_bars {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        Some(Arc::new(pb))
    } else {
        None
    };

    // Per-hop spinner updates, in the style of the original experiment's
    // carriage-return HOP lines.
    let hop_callback: gtp_scanner::ProgressCallback = if let Some(ref pb) = progress_bar {
        let pb_clone = pb.clone();
        Arc::new(move |hop: usize, label: String| {
            pb_clone.set_message(format!("HOP {} -- {}", hop, label));
            pb_clone.tick();
        })
    } else {
        Arc::new(|_hop: usize, _label: String| {})
    };

    let walker = Walker::new(HttpFetcher::with_timeout(timeout_secs))
        .with_max_sequence_len(max_sequence_len)
        .with_terminal_labels(terminal_labels)
        .with_progress_callback(hop_callback);

    let mut outcomes = Vec::new();
    for (idx, seed) in seeds.iter().enumerate() {
        if let Some(ref callback) = progress_callback {
            callback(format!(
                "INITIAL_TOPIC {}/{}: {}",
                idx + 1,
                seeds.len(),
                Topic::new(seed.as_str()).display_label()
            ));
        }

        match walker.walk(seed).await {
            Ok(walk) => {
                graph
                    .append_edges(&edges_from_walk(&walk))
                    .map_err(|e| format!("Failed to write graph file: {}", e))?;
                outcomes.push(SeedOutcome::completed(seed, walk));
            }
            Err(e) => {
                warn!("Walk failed for {}: {}", seed, e);
                if let Some(ref callback) = progress_callback {
                    callback(format!("[!]  Failed to walk {}: {}", seed, e));
                }
                outcomes.push(SeedOutcome::failed(seed, e.to_string()));
            }
        }
    }

    if let Some(ref pb) = progress_bar {
        pb.finish_with_message(format!("Walked {} seed topic(s)", seeds.len()));
    }

    Ok(outcomes)
}

/// Generate a run report from seed outcomes
pub fn generate_walk_report(outcomes: &[SeedOutcome]) -> String {
    use colored::Colorize;

    let mut report = String::new();
    report.push_str("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");
    report.push_str("# Summary:\n");
    report.push_str(&format!(
        "  Generated: {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str(&format!("  Seeds walked: {}\n", outcomes.len()));

    let tally = |outcome: WalkOutcome| {
        outcomes
            .iter()
            .filter(|o| o.walk.as_ref().is_some_and(|w| w.outcome == outcome))
            .count()
    };
    report.push_str(&format!(
        "  Reached terminal: {}\n",
        tally(WalkOutcome::ReachedTerminal)
    ));
    report.push_str(&format!(
        "  Detected cycle: {}\n",
        tally(WalkOutcome::DetectedCycle)
    ));
    report.push_str(&format!(
        "  Hit hop bound: {}\n",
        tally(WalkOutcome::HitHopBound)
    ));
    report.push_str(&format!("  Aborted: {}\n", tally(WalkOutcome::Aborted)));

    let failures = outcomes.iter().filter(|o| o.error.is_some()).count();
    report.push_str(&format!("  Failed: {}\n", failures));

    report.push_str("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n\n");

    for outcome in outcomes {
        let seed_label = Topic::new(outcome.seed.as_str())
            .display_label()
            .to_string();
        match (&outcome.walk, &outcome.error) {
            (Some(walk), _) => {
                let glyph = match walk.outcome {
                    WalkOutcome::ReachedTerminal => "✓".green(),
                    WalkOutcome::DetectedCycle => "↪".cyan(),
                    WalkOutcome::HitHopBound => "⚠".yellow(),
                    WalkOutcome::Aborted => "✗".red(),
                };
                let final_label = walk
                    .final_topic()
                    .map(|t| t.display_label().to_string())
                    .unwrap_or_default();
                report.push_str(&format!(
                    "  {} {} went through {} topics to reach {} ({})\n",
                    glyph,
                    seed_label,
                    walk.visited.len(),
                    final_label,
                    walk.outcome.as_str()
                ));
            }
            (None, Some(error)) => {
                report.push_str(&format!("  {} {}: {}\n", "✗".red(), seed_label, error));
            }
            (None, None) => {}
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk_of(seed: &str, labels: &[&str], outcome: WalkOutcome) -> Walk {
        let visited = labels
            .iter()
            .map(|l| Topic::new(format!("https://en.wikipedia.org/wiki/{}", l)))
            .collect();
        Walk::new(seed, visited, outcome)
    }

    #[test]
    fn report_counts_outcomes_and_failures() {
        let outcomes = vec![
            SeedOutcome::completed(
                "https://en.wikipedia.org/wiki/Xkcd",
                walk_of(
                    "https://en.wikipedia.org/wiki/Xkcd",
                    &["Xkcd", "Comics", "Philosophy"],
                    WalkOutcome::ReachedTerminal,
                ),
            ),
            SeedOutcome::failed(
                "https://en.wikipedia.org/wiki/Broken",
                "no article body found in page markup".to_string(),
            ),
        ];

        let report = generate_walk_report(&outcomes);
        assert!(report.contains("Seeds walked: 2"));
        assert!(report.contains("Reached terminal: 1"));
        assert!(report.contains("Failed: 1"));
        assert!(report.contains("Xkcd went through 3 topics to reach Philosophy"));
        assert!(report.contains("Broken: no article body"));
    }

    #[test]
    fn report_names_cycles() {
        let outcomes = vec![SeedOutcome::completed(
            "https://en.wikipedia.org/wiki/Seed",
            walk_of(
                "https://en.wikipedia.org/wiki/Seed",
                &["Seed", "A", "B", "A", "A"],
                WalkOutcome::DetectedCycle,
            ),
        )];

        let report = generate_walk_report(&outcomes);
        assert!(report.contains("Detected cycle: 1"));
        assert!(report.contains("(detected cycle)"));
    }
}
