use crate::topic::Topic;
use serde::{Deserialize, Serialize};

/// How a walk stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalkOutcome {
    /// The latest hop landed on a configured terminal label.
    ReachedTerminal,
    /// The latest hop revisited a topic already in the sequence.
    DetectedCycle,
    /// The visit sequence reached its configured maximum length.
    HitHopBound,
    /// The iteration safety limit tripped. Not an error; recorded and
    /// graphed like any other outcome.
    Aborted,
}

impl WalkOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalkOutcome::ReachedTerminal => "reached terminal",
            WalkOutcome::DetectedCycle => "detected cycle",
            WalkOutcome::HitHopBound => "hit hop bound",
            WalkOutcome::Aborted => "aborted",
        }
    }
}

/// A completed traversal: the ordered visit sequence plus its outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Walk {
    pub seed: String,
    pub visited: Vec<Topic>,
    pub outcome: WalkOutcome,
}

impl Walk {
    pub fn new(seed: impl Into<String>, visited: Vec<Topic>, outcome: WalkOutcome) -> Self {
        Self {
            seed: seed.into(),
            visited,
            outcome,
        }
    }

    /// Number of hops taken from the seed.
    pub fn hops(&self) -> usize {
        self.visited.len().saturating_sub(1)
    }

    pub fn final_topic(&self) -> Option<&Topic> {
        self.visited.last()
    }
}
