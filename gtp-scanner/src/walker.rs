use crate::error::{Result, WalkError};
use crate::extract::{LinkFilter, first_body_link, locate_article_body};
use crate::fetch::PageFetch;
use crate::result::{Walk, WalkOutcome};
use crate::topic::Topic;
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

/// Reports each hop as it lands: hop number and the display label of the
/// topic just reached.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

/// Drives a hop-by-hop walk: fetch the current topic, extract the first
/// in-body link, classify, repeat.
///
/// The walk is an explicit loop, never recursion; the visit sequence is
/// bounded by `max_sequence_len` and the loop itself by `iteration_limit`,
/// so pathological input cannot run forever or exhaust the stack.
pub struct Walker<F> {
    fetcher: F,
    terminal_labels: Vec<String>,
    max_sequence_len: usize,
    iteration_limit: usize,
    filter: LinkFilter,
    progress_callback: Option<ProgressCallback>,
}

impl<F: PageFetch> Walker<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            terminal_labels: default_terminal_labels(),
            max_sequence_len: 101,
            iteration_limit: 1000,
            filter: LinkFilter::default(),
            progress_callback: None,
        }
    }

    pub fn with_terminal_labels(mut self, labels: Vec<String>) -> Self {
        self.terminal_labels = labels;
        self
    }

    /// Bound on the visit sequence length, seed included. The default of
    /// 101 allows 100 hops from the seed.
    pub fn with_max_sequence_len(mut self, len: usize) -> Self {
        self.max_sequence_len = len;
        self
    }

    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.iteration_limit = limit;
        self
    }

    pub fn with_link_filter(mut self, filter: LinkFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Walk from a seed topic until a terminal label, a cycle, or the hop
    /// bound stops it.
    ///
    /// Markup and transport failures abandon the walk with an error; the
    /// bounds produce normal outcomes.
    pub async fn walk(&self, seed_url: &str) -> Result<Walk> {
        info!("Starting walk from {}", seed_url);
        let seed = Topic::new(seed_url);
        let mut visited = vec![seed.clone()];
        let mut current = seed;

        for _ in 0..self.iteration_limit {
            let markup = self.fetcher.fetch(current.url()).await?;
            let body = locate_article_body(&markup)?;
            let href = first_body_link(body, &self.filter)?;
            let next = resolve_topic(current.url(), &href)?;
            debug!("HOP {} -- {}", visited.len(), next.display_label());

            visited.push(next.clone());
            if let Some(ref callback) = self.progress_callback {
                callback(visited.len() - 1, next.display_label().to_string());
            }

            if self.is_terminal(&next) {
                info!(
                    "Reached {} after {} hops",
                    next.display_label(),
                    visited.len() - 1
                );
                return Ok(Walk::new(seed_url, visited, WalkOutcome::ReachedTerminal));
            }

            if let Some(prior) = visited[..visited.len() - 1]
                .iter()
                .find(|topic| **topic == next)
                .cloned()
            {
                // Append the prior occurrence as well, so the repeated pair
                // shows up in the emitted edge list.
                info!(
                    "Detected cycle at {} after {} hops",
                    next.display_label(),
                    visited.len() - 1
                );
                visited.push(prior);
                return Ok(Walk::new(seed_url, visited, WalkOutcome::DetectedCycle));
            }

            if visited.len() >= self.max_sequence_len {
                info!("Hop bound reached at {} topics", visited.len());
                return Ok(Walk::new(seed_url, visited, WalkOutcome::HitHopBound));
            }

            current = next;
        }

        warn!(
            "Iteration safety limit ({}) exceeded walking {}",
            self.iteration_limit, seed_url
        );
        Ok(Walk::new(seed_url, visited, WalkOutcome::Aborted))
    }

    fn is_terminal(&self, topic: &Topic) -> bool {
        let label = topic.display_label();
        self.terminal_labels.iter().any(|terminal| terminal == label)
    }
}

/// Terminal labels of the original experiment.
pub fn default_terminal_labels() -> Vec<String> {
    vec![
        "Philosophy".to_string(),
        "Philosophical".to_string(),
        "Existence".to_string(),
    ]
}

fn resolve_topic(base: &str, href: &str) -> Result<Topic> {
    let base_url =
        Url::parse(base).map_err(|e| WalkError::InvalidUrl(format!("{}: {}", base, e)))?;
    let resolved = base_url
        .join(href)
        .map_err(|e| WalkError::InvalidUrl(format!("{}: {}", href, e)))?;
    Ok(Topic::new(resolved.as_str()))
}
