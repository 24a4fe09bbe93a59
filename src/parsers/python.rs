use std::path::Path;
use tree_sitter::{Node as TSNode, Tree};

use super::common::{extract_text, find_children_by_kind, TreeSitterParser};
use crate::core::error::Result;

/// Reserved pseudo-module of `from __future__ import ...`.
pub const FUTURE_MODULE: &str = "__future__";

/// The static import declaration shapes that produce dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportDecl {
    /// `import a, b as c`
    Plain(Vec<String>),
    /// `from x import y, z`, also `from .x import y` and `from __future__ import y`
    FromModule(String),
    /// `from . import y, z`
    FromRelative(Vec<String>),
}

impl ImportDecl {
    /// Module names this declaration depends on.
    ///
    /// A relative import without an origin reports the imported names
    /// themselves, so `from . import util` is indistinguishable from
    /// `import util`.
    pub fn referenced_modules(&self) -> &[String] {
        match self {
            ImportDecl::Plain(names) | ImportDecl::FromRelative(names) => names,
            ImportDecl::FromModule(origin) => std::slice::from_ref(origin),
        }
    }
}

pub struct PythonParser {
    parser: TreeSitterParser,
}

impl PythonParser {
    pub fn new() -> Result<Self> {
        let parser = TreeSitterParser::new(tree_sitter_python::language())?;
        Ok(Self { parser })
    }

    /// Parses `file_path` and returns the referenced module names in
    /// source order, duplicates included.
    pub fn parse_file(&mut self, file_path: &Path) -> Result<Vec<String>> {
        let parsed = self.parser.parse_file(file_path)?;
        Ok(extract_imports(&parsed.tree, &parsed.source))
    }

    pub fn parse_str(&mut self, source: &str, origin: &Path) -> Result<Vec<String>> {
        let parsed = self.parser.parse_source(source.as_bytes().to_vec(), origin)?;
        Ok(extract_imports(&parsed.tree, &parsed.source))
    }
}

pub fn extract_imports(tree: &Tree, source: &[u8]) -> Vec<String> {
    collect_declarations(&tree.root_node(), source)
        .iter()
        .flat_map(|decl| decl.referenced_modules().iter().cloned())
        .collect()
}

/// Finds import declarations anywhere below `root`, including function
/// bodies and conditional blocks, in source order.
pub fn collect_declarations(root: &TSNode, source: &[u8]) -> Vec<ImportDecl> {
    let mut declarations = Vec::new();
    let mut cursor = root.walk();

    loop {
        let node = cursor.node();
        let classified = classify(&node, source);
        let is_import = classified.is_some();
        declarations.extend(classified);

        if !is_import && cursor.goto_first_child() {
            continue;
        }

        // Climb until a sibling is available or the root is reached again.
        loop {
            if cursor.node() == *root {
                return declarations;
            }
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return declarations;
            }
        }
    }
}

/// Classifies a single node; `None` when it is not an import declaration.
pub fn classify(node: &TSNode, source: &[u8]) -> Option<ImportDecl> {
    match node.kind() {
        "import_statement" => Some(ImportDecl::Plain(imported_names(node, source))),
        "future_import_statement" => Some(ImportDecl::FromModule(FUTURE_MODULE.to_string())),
        "import_from_statement" => {
            let origin = node.child_by_field_name("module_name")?;
            match origin.kind() {
                "dotted_name" => Some(ImportDecl::FromModule(dotted_name(&origin, source))),
                "relative_import" => {
                    match find_children_by_kind(&origin, "dotted_name").first() {
                        Some(module) => Some(ImportDecl::FromModule(dotted_name(module, source))),
                        // `from . import *` names nothing
                        None => Some(ImportDecl::FromRelative(imported_names(node, source))),
                    }
                }
                _ => None,
            }
        }
        _ => None,
    }
}

/// Names listed after `import`, aliases dropped.
fn imported_names(node: &TSNode, source: &[u8]) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .filter_map(|name| match name.kind() {
            "dotted_name" => Some(dotted_name(&name, source)),
            "aliased_import" => name
                .child_by_field_name("name")
                .map(|inner| dotted_name(&inner, source)),
            _ => None,
        })
        .collect()
}

fn dotted_name(node: &TSNode, source: &[u8]) -> String {
    let parts = find_children_by_kind(node, "identifier");
    if parts.is_empty() {
        return extract_text(node, source);
    }
    parts
        .iter()
        .map(|part| extract_text(part, source))
        .collect::<Vec<_>>()
        .join(".")
}
