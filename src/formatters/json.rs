use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::core::{DependencyGraph, ImportGraphError, ModuleName, Result};

/// Node-link JSON formatter, the layout networkx and d3 read.
pub struct JsonGraphFormatter {
    pretty: bool,
}

#[derive(Serialize)]
struct NodeLinkDocument<'a> {
    directed: bool,
    multigraph: bool,
    graph: serde_json::Map<String, serde_json::Value>,
    nodes: Vec<NodeEntry<'a>>,
    links: Vec<LinkEntry<'a>>,
}

#[derive(Serialize)]
struct NodeEntry<'a> {
    id: &'a ModuleName,
    label: &'a str,
}

#[derive(Serialize)]
struct LinkEntry<'a> {
    source: &'a ModuleName,
    target: &'a ModuleName,
}

impl JsonGraphFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn format_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;
        fs::write(output_path, json_content).map_err(|err| ImportGraphError::io(output_path, err))
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> Result<String> {
        let document = NodeLinkDocument {
            directed: false,
            multigraph: false,
            graph: serde_json::Map::new(),
            nodes: graph
                .nodes()
                .map(|node| NodeEntry {
                    id: &node.name,
                    label: &node.label,
                })
                .collect(),
            links: graph
                .edges()
                .map(|(source, target)| LinkEntry {
                    source: &source.name,
                    target: &target.name,
                })
                .collect(),
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(rendered)
    }
}

impl Default for JsonGraphFormatter {
    fn default() -> Self {
        Self::new()
    }
}
