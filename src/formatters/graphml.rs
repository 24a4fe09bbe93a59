//! GraphML output formatter.
//!
//! Writes a pretty-printed GraphML 1.0 document that graph tools such as
//! Gephi, yEd or networkx load directly. Every node is keyed by its module
//! name and carries a `label` attribute; edges are undirected and unweighted.

use std::fs;
use std::path::Path;

use crate::core::{DependencyGraph, ImportGraphError, Result};

const GRAPHML_NAMESPACE: &str = "http://graphml.graphdrawing.org/xmlns";
const GRAPHML_SCHEMA: &str = "http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd";
const LABEL_KEY: &str = "d0";

pub struct GraphMlFormatter {
    indent: &'static str,
}

impl GraphMlFormatter {
    pub fn new() -> Self {
        Self { indent: "  " }
    }

    pub fn format_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        let content = self.format_graph(graph);
        fs::write(output_path, content).map_err(|err| ImportGraphError::io(output_path, err))
    }

    pub fn format_graph(&self, graph: &DependencyGraph) -> String {
        let i1 = self.indent;
        let i2 = self.indent.repeat(2);
        let i3 = self.indent.repeat(3);

        let mut output = String::with_capacity(256 + graph.node_count() * 96);
        output.push_str("<?xml version='1.0' encoding='utf-8'?>\n");
        output.push_str(&format!(
            "<graphml xmlns=\"{ns}\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
             xsi:schemaLocation=\"{ns} {schema}\">\n",
            ns = GRAPHML_NAMESPACE,
            schema = GRAPHML_SCHEMA,
        ));
        output.push_str(&format!(
            "{i1}<key id=\"{LABEL_KEY}\" for=\"node\" attr.name=\"label\" attr.type=\"string\" />\n"
        ));
        output.push_str(&format!("{i1}<graph edgedefault=\"undirected\">\n"));

        for node in graph.nodes() {
            output.push_str(&format!(
                "{i2}<node id=\"{}\">\n",
                escape_xml(node.name.as_str())
            ));
            output.push_str(&format!(
                "{i3}<data key=\"{LABEL_KEY}\">{}</data>\n",
                escape_xml(&node.label)
            ));
            output.push_str(&format!("{i2}</node>\n"));
        }

        for (source, target) in graph.edges() {
            output.push_str(&format!(
                "{i2}<edge source=\"{}\" target=\"{}\" />\n",
                escape_xml(source.name.as_str()),
                escape_xml(target.name.as_str())
            ));
        }

        output.push_str(&format!("{i1}</graph>\n"));
        output.push_str("</graphml>\n");
        output
    }
}

impl Default for GraphMlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
