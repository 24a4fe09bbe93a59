use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};

/// File extension recognised as Python source.
pub const SOURCE_EXTENSION: &str = "py";

/// Stem of a package initializer file; it stands for the package itself.
pub const PACKAGE_INITIALIZER: &str = "__init__";

/// Canonical dotted module name, e.g. `pkg.sub.mod`.
///
/// Never empty and never ends in a `__init__` component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    /// Normalises a dotted name, collapsing a trailing `__init__` onto its
    /// package. Returns `None` when nothing is left.
    pub fn new(dotted: impl Into<String>) -> Option<Self> {
        let mut name = dotted.into();
        if name == PACKAGE_INITIALIZER {
            return None;
        }
        if let Some(package) = name.strip_suffix(PACKAGE_INITIALIZER) {
            if let Some(package) = package.strip_suffix('.') {
                name = package.to_string();
            }
        }
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ModuleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ModuleName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value.clone()).ok_or(value)
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}

/// Maps a source file path to its dotted module name.
///
/// Only `.py` files resolve. Root, prefix, `.` and `..` components are
/// ignored, the remaining components are joined with dots.
pub fn resolve_module_name(path: &Path) -> Option<ModuleName> {
    if path.extension()? != SOURCE_EXTENSION {
        return None;
    }

    let parent_parts = path
        .parent()
        .into_iter()
        .flat_map(|parent| parent.components())
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        });
    let stem = path.file_stem()?.to_string_lossy().into_owned();

    let parts: Vec<String> = parent_parts.chain(std::iter::once(stem)).collect();
    ModuleName::new(parts.join("."))
}

/// Resolves `path` relative to `base` when it lies underneath it.
pub fn resolve_relative_to(path: &Path, base: &Path) -> Option<ModuleName> {
    let relative = path.strip_prefix(base).unwrap_or(path);
    resolve_module_name(relative)
}
