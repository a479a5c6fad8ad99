use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::{Directed, Graph};
use std::collections::HashMap;

/// Stand-in for `>` in labels. Balsamiq menus use `>` to separate nesting
/// levels, which reads poorly on a graph edge.
pub const MENU_ITEM_MARKER: &str = "Menu-item:";

/// One resolved link between two mockups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub destination: String,
    pub source: String,
    pub label: String,
}

impl Edge {
    pub fn new(destination: &str, source: &str, label: &str) -> Self {
        Self {
            destination: destination.to_string(),
            source: source.to_string(),
            label: normalize_label(label),
        }
    }
}

/// Trim, swap `>` for [`MENU_ITEM_MARKER`], flatten newlines.
pub fn normalize_label(raw: &str) -> String {
    raw.trim()
        .replace('>', MENU_ITEM_MARKER)
        .replace('\n', " ")
}

/// Mockup link graph: nodes are mockup filenames, edges keep the order in
/// which they were added.
pub type LinkGraph = Graph<String, Edge, Directed>;

pub struct GraphBuilder {
    graph: LinkGraph,
    node_map: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            node_map: HashMap::new(),
        }
    }

    pub fn add_node(&mut self, filename: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(filename) {
            return index;
        }
        let index = self.graph.add_node(filename.to_string());
        self.node_map.insert(filename.to_string(), index);
        index
    }

    /// Append an edge. Duplicates are kept.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        let source_idx = self.add_node(&edge.source);
        let target_idx = self.add_node(&edge.destination);
        self.graph.add_edge(source_idx, target_idx, edge)
    }

    pub fn extend(&mut self, edges: impl IntoIterator<Item = Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn build(self) -> LinkGraph {
        self.graph
    }

    pub fn get_node_index(&self, filename: &str) -> Option<NodeIndex> {
        self.node_map.get(filename).copied()
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
