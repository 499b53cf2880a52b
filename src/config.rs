use std::path::{Path, PathBuf};

use crate::pipeline::chunker::ChunkConfig;
use crate::pipeline::reader::DocumentKind;

/// Application-level constants
pub const APP_NAME: &str = "Veridoc";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "info"
}

/// Everything one analysis run needs: where the input document lives, which
/// rule catalog to apply, and how to split oversized text. Both exports are
/// written next to the input document.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub input_filename: String,
    pub document_kind: DocumentKind,
    pub catalog_path: PathBuf,
    pub chunking: ChunkConfig,
}

impl RunConfig {
    pub fn input_path(&self) -> PathBuf {
        self.input_dir.join(&self.input_filename)
    }

    /// Input filename without its final extension.
    fn base_name(&self) -> &str {
        Path::new(&self.input_filename)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.input_filename)
    }

    /// `{base}.json` in the input directory.
    pub fn structured_output_path(&self) -> PathBuf {
        self.input_dir.join(format!("{}.json", self.base_name()))
    }

    /// `{base}.csv` in the input directory.
    pub fn tabular_output_path(&self) -> PathBuf {
        self.input_dir.join(format!("{}.csv", self.base_name()))
    }
}
