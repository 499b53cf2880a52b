pub mod ollama;
pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use ollama::*;
pub use orchestrator::*;
pub use prompt::*;
pub use types::*;

use thiserror::Error;

/// Failures from a single evaluator call.
#[derive(Error, Debug)]
pub enum EvaluatorError {
    #[error("evaluation backend is not running at {0}")]
    Connection(String),

    #[error("evaluation backend returned error (status {status}): {body}")]
    Backend { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("response parsing error: {0}")]
    ResponseParsing(String),
}

/// Failures while driving the full rule batch. Always identifies which rule
/// and which chunk failed so the run can be diagnosed without re-running.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("rule '{rule}' failed on document chunk {chunk_index}: {source}")]
    RuleEvaluation {
        rule: String,
        chunk_index: usize,
        #[source]
        source: EvaluatorError,
    },
}
