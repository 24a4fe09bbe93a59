use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::error::{ImportGraphError, Result};
use super::graph::{EdgeSet, ImportEdge};
use super::resolver::{resolve_relative_to, ModuleName};
use super::scanner::{PathWalker, WalkOptions};
use crate::parsers::python::{PythonParser, FUTURE_MODULE};

#[derive(Debug, Clone, Default)]
pub struct CollectorConfig {
    pub walk: WalkOptions,
    /// Parse files on the rayon pool and merge per-file edges afterwards.
    pub parallel: bool,
}

impl CollectorConfig {
    pub fn recursive(recursive: bool) -> Self {
        Self {
            walk: WalkOptions::recursive(recursive),
            parallel: false,
        }
    }
}

/// Turns a source tree into the set of module import edges.
pub struct DependencyCollector {
    walker: PathWalker,
    parallel: bool,
}

impl DependencyCollector {
    pub fn new(config: &CollectorConfig) -> Result<Self> {
        Ok(Self {
            walker: PathWalker::new(&config.walk)?,
            parallel: config.parallel,
        })
    }

    pub fn collect(&self, root_path: &Path) -> Result<EdgeSet> {
        let root = canonical_root(root_path)?;
        let base = module_base(&root);

        let candidates = self.walker.walk(&root).filter_map(|path| {
            match resolve_relative_to(&path, &base) {
                Some(module) => Some((module, path)),
                None => {
                    debug!("Skipping non-source file {}", path.display());
                    None
                }
            }
        });

        let mut edges = EdgeSet::new();
        if self.parallel {
            let candidates: Vec<(ModuleName, PathBuf)> = candidates.collect();
            let per_file = candidates
                .par_iter()
                .map(|(module, path)| {
                    let mut parser = PythonParser::new()?;
                    module_edges(&mut parser, module, path)
                })
                .collect::<Result<Vec<Vec<ImportEdge>>>>()?;
            edges.extend(per_file.into_iter().flatten());
        } else {
            let mut parser = PythonParser::new()?;
            for (module, path) in candidates {
                edges.extend(module_edges(&mut parser, &module, &path)?);
            }
        }

        Ok(edges)
    }
}

/// Collects with the default filters, optionally recursing.
pub fn collect_dependencies(root_path: &Path, recursive: bool) -> Result<EdgeSet> {
    DependencyCollector::new(&CollectorConfig::recursive(recursive))?.collect(root_path)
}

fn module_edges(
    parser: &mut PythonParser,
    module: &ModuleName,
    path: &Path,
) -> Result<Vec<ImportEdge>> {
    info!("Parsing \"{}\" module: {}", module, path.display());
    let referenced = parser.parse_file(path)?;

    Ok(referenced
        .into_iter()
        .filter(|name| name != FUTURE_MODULE)
        .filter_map(|name| ModuleName::new(name))
        .map(|imported| ImportEdge::new(module.clone(), imported))
        .collect())
}

fn canonical_root(root_path: &Path) -> Result<PathBuf> {
    if !root_path.exists() {
        return Err(ImportGraphError::MissingRoot(root_path.to_path_buf()));
    }
    let root = fs::canonicalize(root_path).map_err(|err| ImportGraphError::io(root_path, err))?;
    if !root.is_dir() && !root.is_file() {
        return Err(ImportGraphError::UnsupportedRoot(root_path.to_path_buf()));
    }
    Ok(root)
}

/// Module names are resolved relative to the directory holding the scanned
/// package, so scanning `proj/` (or `proj/a.py`) names `proj/a.py` `proj.a`.
fn module_base(root: &Path) -> PathBuf {
    let package_dir = if root.is_dir() {
        root
    } else {
        root.parent().unwrap_or(root)
    };
    package_dir.parent().unwrap_or(package_dir).to_path_buf()
}
