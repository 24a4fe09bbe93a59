pub mod common;
pub mod python;

pub use python::{extract_imports, ImportDecl, PythonParser, FUTURE_MODULE};
