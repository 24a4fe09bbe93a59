use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

use super::error::{ImportGraphError, Result};

/// Matches every path.
pub const DEFAULT_INCLUDE_PATTERN: &str = ".*";

/// Interpreter standard library and virtualenv directory segments.
pub const DEFAULT_EXCLUDE_PATTERN: &str = r"(/lib/python\d+?\.\d+?/|/\.venv/)";

#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub recursive: bool,
    pub include: String,
    pub exclude: Option<String>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            include: DEFAULT_INCLUDE_PATTERN.to_string(),
            exclude: Some(DEFAULT_EXCLUDE_PATTERN.to_string()),
        }
    }
}

impl WalkOptions {
    pub fn recursive(recursive: bool) -> Self {
        Self {
            recursive,
            ..Self::default()
        }
    }
}

/// Enumerates candidate source files below a root.
#[derive(Debug, Clone)]
pub struct PathWalker {
    recursive: bool,
    include: Regex,
    exclude: Option<Regex>,
}

impl PathWalker {
    pub fn new(options: &WalkOptions) -> Result<Self> {
        let include = compile("include", &options.include)?;
        let exclude = options
            .exclude
            .as_deref()
            .map(|pattern| compile("exclude", pattern))
            .transpose()?;

        Ok(Self {
            recursive: options.recursive,
            include,
            exclude,
        })
    }

    /// Lazily yields the files under `root`.
    ///
    /// A root that is not a directory is yielded as-is, bypassing the
    /// include/exclude filters. Unreadable entries are logged and skipped.
    pub fn walk<'a>(&'a self, root: &Path) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
        if !root.is_dir() {
            return Box::new(std::iter::once(root.to_path_buf()));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let entries = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    let location = err
                        .path()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "<unknown>".to_string());
                    warn!("Skipping unreadable entry {}: {}", location, err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(move |path| self.accepts(path));

        Box::new(entries)
    }

    /// Include must match and a configured exclude must not.
    pub fn accepts(&self, path: &Path) -> bool {
        let rendered = path.to_string_lossy().replace('\\', "/");
        if !self.include.is_match(&rendered) {
            return false;
        }
        match &self.exclude {
            Some(exclude) => !exclude.is_match(&rendered),
            None => true,
        }
    }
}

fn compile(kind: &'static str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ImportGraphError::InvalidPattern {
        kind,
        pattern: pattern.to_string(),
        source,
    })
}
