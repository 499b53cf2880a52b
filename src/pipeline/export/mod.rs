pub mod structured;
pub mod tabular;

pub use structured::*;
pub use tabular::*;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not serialize results for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("structured results do not exist at {0}")]
    MissingStructured(PathBuf),

    #[error("structured results at {path} are malformed: {message}")]
    MalformedStructured { path: PathBuf, message: String },

    #[error("could not replace existing export {path}: {source}")]
    StaleFileRemoval {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV write failed for {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}
