pub mod analysis;
pub mod catalog;
pub mod chunker;
pub mod export;
pub mod reader;
pub mod runner;

use thiserror::Error;

use analysis::AnalysisError;
use catalog::CatalogError;
use chunker::ChunkConfigError;
use export::ExportError;
use reader::ReadError;

/// Errors from any stage of the analysis pipeline.
///
/// Every variant is fatal to the run: the pipeline either produces a
/// complete result set and both exports, or neither.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("invalid chunking configuration: {0}")]
    Config(#[from] ChunkConfigError),

    #[error("document read failed: {0}")]
    Read(#[from] ReadError),

    #[error("rule catalog load failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("rule evaluation failed: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("export failed: {0}")]
    Export(#[from] ExportError),
}
