//! Edge derivation and the append-only dot-file writer.
//!
//! The file format is the simple line-oriented digraph description that
//! graphviz consumes: an opening `digraph gtp {` line, one line per edge,
//! and a closing brace. Rendering the file to images is left to the `dot`
//! program.

use gtp_scanner::Walk;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// One hop, carrying graph-safe labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

/// Derive the ordered edge list from a walk's visit sequence: one edge per
/// consecutive pair, in sequence order.
pub fn edges_from_walk(walk: &Walk) -> Vec<Edge> {
    walk.visited
        .windows(2)
        .map(|pair| Edge {
            source: pair[0].graph_label(),
            target: pair[1].graph_label(),
        })
        .collect()
}

/// Append-only dot-file target shared by all walks of a run.
///
/// Each append flushes, so an interrupted run leaves a file that is merely
/// incomplete, never garbled mid-line.
pub struct DotGraph {
    writer: BufWriter<File>,
}

impl DotGraph {
    /// Create (or truncate) the graph file and write the opening marker.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        writeln!(writer, "digraph gtp {{")?;
        writer.flush()?;
        Ok(Self { writer })
    }

    /// Append one walk's edges and flush them to disk.
    pub fn append_edges(&mut self, edges: &[Edge]) -> io::Result<()> {
        for edge in edges {
            writeln!(self.writer, "    \"{}\" -> \"{}\";", edge.source, edge.target)?;
        }
        self.writer.flush()
    }

    /// Write the closing marker, consuming the writer.
    pub fn finalize(mut self) -> io::Result<()> {
        writeln!(self.writer, "}}")?;
        self.writer.flush()
    }
}
