use std::fs;
use std::path::Path;
use tree_sitter::{Language, Node as TSNode, Parser, Tree};

use crate::core::error::{ImportGraphError, Result};

pub struct TreeSitterParser {
    parser: Parser,
}

/// A syntax tree together with the bytes it was parsed from.
pub struct ParsedSource {
    pub tree: Tree,
    pub source: Vec<u8>,
}

impl TreeSitterParser {
    pub fn new(language: Language) -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(language)?;
        Ok(Self { parser })
    }

    /// Reads the whole file (the handle is released before parsing) and
    /// parses it, rejecting trees that contain syntax errors.
    pub fn parse_file(&mut self, file_path: &Path) -> Result<ParsedSource> {
        let source = fs::read(file_path).map_err(|err| ImportGraphError::io(file_path, err))?;
        self.parse_source(source, file_path)
    }

    pub fn parse_source(&mut self, source: Vec<u8>, file_path: &Path) -> Result<ParsedSource> {
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ImportGraphError::Syntax {
                path: file_path.to_path_buf(),
                line: 1,
                column: 1,
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let (line, column) = first_error_position(&root)
                .unwrap_or((root.start_position().row, root.start_position().column));
            return Err(ImportGraphError::Syntax {
                path: file_path.to_path_buf(),
                line: line + 1,
                column: column + 1,
            });
        }

        Ok(ParsedSource { tree, source })
    }
}

/// Zero-based position of the first `ERROR` or `MISSING` node.
fn first_error_position(node: &TSNode) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let position = node.start_position();
        return Some((position.row, position.column));
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    let children: Vec<TSNode> = node.children(&mut cursor).collect();
    children.iter().find_map(first_error_position)
}

pub fn extract_text(node: &TSNode, source: &[u8]) -> String {
    String::from_utf8_lossy(&source[node.byte_range()]).into_owned()
}

pub fn find_children_by_kind<'a>(node: &TSNode<'a>, kind: &str) -> Vec<TSNode<'a>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter(|child| child.kind() == kind)
        .collect()
}
