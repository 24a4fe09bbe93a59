pub mod analyzer;
pub mod error;
pub mod graph;
pub mod resolver;
pub mod scanner;

pub use analyzer::{collect_dependencies, CollectorConfig, DependencyCollector};
pub use error::{ImportGraphError, Result};
pub use graph::{build_graph, DependencyGraph, EdgeSet, GraphBuilder, GraphNode, ImportEdge};
pub use resolver::{resolve_module_name, ModuleName};
pub use scanner::{PathWalker, WalkOptions};
