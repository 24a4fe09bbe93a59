use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImportGraphError>;

#[derive(Error, Debug)]
pub enum ImportGraphError {
    #[error("Input path does not exist: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Input path is neither a file nor a directory: {}", .0.display())]
    UnsupportedRoot(PathBuf),

    #[error("Invalid {kind} pattern `{pattern}`: {source}")]
    InvalidPattern {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Syntax error in {} at line {line}, column {column}", .path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to load Python grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),
}

impl ImportGraphError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the input location or filter patterns.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingRoot(_) | Self::UnsupportedRoot(_) | Self::InvalidPattern { .. }
        )
    }
}
