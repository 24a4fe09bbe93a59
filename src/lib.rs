//! # pyimports
//!
//! Static import dependency graphs for Python source trees.
//!
//! The pipeline walks a directory, maps each `.py` file to its dotted module
//! name, parses it with tree-sitter, classifies its import declarations and
//! accumulates de-duplicated `(module, imported)` edges. The edges become an
//! undirected, labeled graph that can be exported for graph tools.
//!
//! ## Output Formats
//!
//! - **GraphML**: pretty-printed GraphML 1.0 with a `label` per node
//! - **JSON**: node-link document (`nodes` / `links`)
//!
//! ## Example
//!
//! ```no_run
//! use pyimports::core::{build_graph, collect_dependencies};
//! use pyimports::formatters::GraphMlFormatter;
//! use std::path::Path;
//!
//! let edges = collect_dependencies(Path::new("proj"), true)?;
//! let graph = build_graph(&edges);
//! GraphMlFormatter::new().format_to_file(&graph, Path::new("proj.graphml"))?;
//! # Ok::<(), pyimports::core::ImportGraphError>(())
//! ```

pub mod core;
pub mod formatters;
pub mod parsers;
