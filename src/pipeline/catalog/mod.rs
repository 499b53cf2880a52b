pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("rule catalog does not exist: {0}")]
    NotFound(PathBuf),

    #[error("could not read rule catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("rule catalog {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("rule catalog {0} must be a JSON object mapping rule name to template text")]
    NotAnObject(PathBuf),

    #[error("template body for rule '{name}' must be a string")]
    InvalidTemplate { name: String },
}
