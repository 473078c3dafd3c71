use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An encyclopedia article, identified by its canonical URL.
///
/// Topics are immutable values. Equality ignores trailing slashes, so
/// `.../Philosophy` and `.../Philosophy/` are the same topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    raw: String,
}

impl Topic {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn url(&self) -> &str {
        &self.raw
    }

    /// The short human-readable name: the final path segment of the URL,
    /// with surrounding slashes stripped.
    pub fn display_label(&self) -> &str {
        self.raw
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or("")
    }

    /// A label safe to embed in the output graph format.
    pub fn graph_label(&self) -> String {
        canonicalize(self.display_label())
    }
}

impl PartialEq for Topic {
    fn eq(&self, other: &Self) -> bool {
        self.raw.trim_end_matches('/') == other.raw.trim_end_matches('/')
    }
}

impl Eq for Topic {}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_label())
    }
}

/// Turn a topic label into a graph-safe label.
///
/// Undoes the `%xx` escape sequences used in URLs, then replaces the
/// characters that upset dot identifiers with underscores. Total for any
/// input, including the empty string, and idempotent on labels that are
/// already clean.
pub fn canonicalize(label: &str) -> String {
    let decoded = percent_decode_str(label).decode_utf8_lossy();
    decoded
        .replace('(', "_")
        .replace(')', "_")
        .replace('#', "_")
        .replace('-', "_")
}
