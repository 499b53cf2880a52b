use std::path::PathBuf;

use serde::Serialize;

use crate::config::RunConfig;
use crate::pipeline::analysis::{RuleAnalyzer, RuleEvaluator};
use crate::pipeline::catalog::load_catalog;
use crate::pipeline::chunker::split_with_overlap;
use crate::pipeline::export::{derive_tabular, write_structured};
use crate::pipeline::reader::read_document;
use crate::pipeline::PipelineError;

/// Summary of a completed analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub rules_evaluated: usize,
    pub chunk_count: usize,
    pub structured_path: PathBuf,
    pub tabular_path: PathBuf,
}

/// End-to-end driver: read → load catalog → chunk → evaluate → export.
///
/// Pure pipeline logic with trait-based DI for the evaluator. Any stage
/// failure aborts the run before the exports are written, so either both
/// output files exist or neither does.
pub struct DocumentAnalyzer {
    analyzer: RuleAnalyzer,
}

impl DocumentAnalyzer {
    pub fn new(evaluator: Box<dyn RuleEvaluator + Send + Sync>) -> Self {
        Self {
            analyzer: RuleAnalyzer::new(evaluator),
        }
    }

    pub fn run(&self, config: &RunConfig) -> Result<AnalysisOutcome, PipelineError> {
        config.chunking.validate()?;

        let catalog = load_catalog(&config.catalog_path)?;

        let text = read_document(&config.input_path(), config.document_kind)?;

        let chunks = split_with_overlap(&text, config.chunking)?;
        tracing::info!(
            chunks = chunks.len(),
            chars = text.chars().count(),
            "prepared document chunks"
        );

        let results = self.analyzer.evaluate_all(&catalog, &chunks)?;

        let structured_path = config.structured_output_path();
        write_structured(&results, &structured_path)?;

        let tabular_path = config.tabular_output_path();
        derive_tabular(&structured_path, &tabular_path)?;

        Ok(AnalysisOutcome {
            rules_evaluated: results.len(),
            chunk_count: chunks.len(),
            structured_path,
            tabular_path,
        })
    }
}
