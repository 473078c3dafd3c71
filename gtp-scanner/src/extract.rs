//! Marker-level heuristics over rendered article markup.
//!
//! These scanners deliberately do not parse HTML. The "first link in the
//! article body" rule depends on how one specific provider renders its
//! articles (frontmatter tables before the first `<p>`, bold disambiguation
//! leads, inline `<ul>` pronunciation blocks), so the heuristics work on the
//! literal marker substrings instead of a DOM.

use crate::error::{Result, WalkError};

const PARAGRAPH_OPEN: &str = "<p>";
const PARAGRAPH_CLOSE: &str = "</p>";
const LIST_OPEN: &str = "<ul>";
const LINE_BREAK: &str = "<br />";
const ANCHOR_HINT: &str = "<a href";
const ANCHOR_OPEN: &str = "<a href=\"";
const ANCHOR_CLOSE: &str = "</a>";

/// Net count of open parentheses in `text` from the start through `index`
/// inclusive.
///
/// May go negative on unbalanced text; callers only ever ask "is it > 0".
/// An index past the end of the text scans the whole text.
pub fn open_paren_depth(text: &str, index: usize) -> i32 {
    let mut depth = 0;
    for byte in text.bytes().take(index.saturating_add(1)) {
        match byte {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {}
        }
    }
    depth
}

/// Find the first paragraph that is actual article prose.
///
/// Walks paragraph spans in document order. A span containing `<ul>` or
/// `<br />` is inline list/definition markup, not prose; a span without any
/// anchor is a contentless lead (short disambiguation text). Both are
/// skipped. The first span that carries an anchor and no list markers is
/// returned, from its `<p>` marker up to (not including) the matching
/// `</p>`.
///
/// Fails with `NoArticleBody` when the document has no paragraph markers
/// left to inspect, or when a paragraph never closes.
pub fn locate_article_body(markup: &str) -> Result<&str> {
    let mut start = markup.find(PARAGRAPH_OPEN).ok_or(WalkError::NoArticleBody)?;
    loop {
        let close = markup[start + PARAGRAPH_OPEN.len()..]
            .find(PARAGRAPH_CLOSE)
            .map(|i| start + PARAGRAPH_OPEN.len() + i)
            .ok_or(WalkError::NoArticleBody)?;
        let span = &markup[start..close + PARAGRAPH_CLOSE.len()];

        if !span.contains(LIST_OPEN) && !span.contains(LINE_BREAK) && span.contains(ANCHOR_HINT) {
            return Ok(&markup[start..close]);
        }

        // Contentless lead or non-prose markup: move to the next paragraph.
        start = markup[start + PARAGRAPH_OPEN.len()..]
            .find(PARAGRAPH_OPEN)
            .map(|i| start + PARAGRAPH_OPEN.len() + i)
            .ok_or(WalkError::NoArticleBody)?;
    }
}

/// Which hrefs count as in-body topic links.
///
/// The namespace set is plain configuration on purpose: observed variants of
/// the experiment disagree on whether `Category:` pages are followable, so
/// callers that want category hops can drop that entry.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    /// Prefix an href must carry to count as an internal topic link.
    pub topic_prefix: String,
    /// Namespace prefixes (relative to the topic prefix) that are never
    /// article prose: file attachments, help pages, project/meta pages.
    pub excluded_namespaces: Vec<String>,
    /// Hrefs ending in one of these point at images, not articles.
    pub image_extensions: Vec<String>,
}

impl Default for LinkFilter {
    fn default() -> Self {
        Self {
            topic_prefix: "/wiki/".to_string(),
            excluded_namespaces: vec![
                "File:".to_string(),
                "Help:".to_string(),
                "Wikipedia:".to_string(),
                "Category:".to_string(),
            ],
            image_extensions: vec![
                ".svg".to_string(),
                ".png".to_string(),
                ".jpg".to_string(),
                ".jpeg".to_string(),
                ".gif".to_string(),
            ],
        }
    }
}

impl LinkFilter {
    pub fn qualifies(&self, href: &str) -> bool {
        let Some(rest) = href.strip_prefix(self.topic_prefix.as_str()) else {
            return false;
        };
        if self
            .excluded_namespaces
            .iter()
            .any(|ns| rest.starts_with(ns.as_str()))
        {
            return false;
        }
        !self
            .image_extensions
            .iter()
            .any(|ext| href.ends_with(ext.as_str()))
    }
}

/// Extract the first qualifying in-body topic link from a body span.
///
/// The span is split at every `</a>` into anchor-candidate fragments,
/// scanned in document order. Anchors whose open marker sits at a positive
/// parenthesis depth are parenthetical asides and are skipped even when
/// their href would otherwise qualify. A fragment whose href has no closing
/// quote is a malformed anchor; scanning stops there rather than propagate a
/// corrupted href.
pub fn first_body_link(body: &str, filter: &LinkFilter) -> Result<String> {
    let mut offset = 0usize;
    for fragment in body.split(ANCHOR_CLOSE) {
        let fragment_start = offset;
        offset += fragment.len() + ANCHOR_CLOSE.len();

        let Some(open) = fragment.find(ANCHOR_OPEN) else {
            continue;
        };
        let after = &fragment[open + ANCHOR_OPEN.len()..];
        let Some(end) = after.find('"') else {
            return Err(WalkError::MalformedAnchor);
        };
        let href = &after[..end];

        if open_paren_depth(body, fragment_start + open) > 0 {
            continue;
        }
        if filter.qualifies(href) {
            return Ok(href.to_string());
        }
    }
    Err(WalkError::NoQualifyingLink)
}
