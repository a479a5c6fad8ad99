use anyhow::Result;
use std::fmt::Write as _;
use std::io::Write;

use crate::core::{Edge, LinkGraph};

/// Graphviz `dot` output, one line per edge in the order edges were added.
pub struct DotFormatter {
    graph_name: String,
}

impl DotFormatter {
    pub fn new() -> Self {
        Self {
            graph_name: "G".to_string(),
        }
    }

    pub fn format_to_writer<W: Write>(&self, graph: &LinkGraph, out: &mut W) -> Result<()> {
        out.write_all(self.format_graph(graph).as_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &LinkGraph) -> String {
        let mut output = String::with_capacity(32 + graph.edge_count() * 64);
        let _ = writeln!(output, "digraph {} {{", self.graph_name);
        for edge_ref in graph.edge_references() {
            output.push_str(&self.format_edge(edge_ref.weight()));
            output.push('\n');
        }
        output.push_str("}\n");
        output
    }

    pub fn format_edge(&self, edge: &Edge) -> String {
        format!(
            "\t\"{}\" -> \"{}\"[label=\"{}\"]",
            escape_id(&edge.source),
            escape_id(&edge.destination),
            escape_id(&edge.label)
        )
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text for use inside a double-quoted DOT id.
fn escape_id(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
