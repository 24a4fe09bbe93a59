use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::resolver::ModuleName;

/// "`source` references `imported` via an import declaration."
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ImportEdge {
    pub source: ModuleName,
    pub imported: ModuleName,
}

impl ImportEdge {
    pub fn new(source: ModuleName, imported: ModuleName) -> Self {
        Self { source, imported }
    }
}

pub type EdgeSet = BTreeSet<ImportEdge>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub name: ModuleName,
    pub label: String,
}

impl GraphNode {
    pub fn new(name: ModuleName) -> Self {
        let label = name.to_string();
        Self { name, label }
    }
}

/// Undirected module graph, at most one edge per node pair.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: UnGraph<GraphNode, ()>,
    node_map: HashMap<ModuleName, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `name`, creating it on first reference.
    pub fn ensure_node(&mut self, name: &ModuleName) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            return index;
        }
        let index = self.graph.add_node(GraphNode::new(name.clone()));
        self.node_map.insert(name.clone(), index);
        index
    }

    /// Connects two modules; re-adding an existing pair in either
    /// direction returns the existing edge.
    pub fn add_edge(&mut self, a: &ModuleName, b: &ModuleName) -> EdgeIndex {
        let a = self.ensure_node(a);
        let b = self.ensure_node(b);
        self.graph.update_edge(a, b, ())
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        let name = ModuleName::new(name)?;
        self.node_map
            .get(&name)
            .and_then(|&index| self.graph.node_weight(index))
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        let (Some(a), Some(b)) = (ModuleName::new(a), ModuleName::new(b)) else {
            return false;
        };
        match (self.node_map.get(&a), self.node_map.get(&b)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> + '_ {
        self.graph.node_weights()
    }

    /// Edge endpoints in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&GraphNode, &GraphNode)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (&self.graph[edge.source()], &self.graph[edge.target()]))
    }
}

pub struct GraphBuilder {
    graph: DependencyGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DependencyGraph::new(),
        }
    }

    pub fn add_edge(&mut self, edge: &ImportEdge) -> EdgeIndex {
        self.graph.add_edge(&edge.source, &edge.imported)
    }

    pub fn extend<'a>(&mut self, edges: impl IntoIterator<Item = &'a ImportEdge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    pub fn build(self) -> DependencyGraph {
        self.graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_graph(edges: &EdgeSet) -> DependencyGraph {
    let mut builder = GraphBuilder::new();
    builder.extend(edges);
    builder.build()
}
