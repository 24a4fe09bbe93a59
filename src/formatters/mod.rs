pub mod graphml;
pub mod json;

pub use graphml::GraphMlFormatter;
pub use json::JsonGraphFormatter;
