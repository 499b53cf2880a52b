use super::types::{ResultSet, RuleEvaluator, RuleResult};
use super::AnalysisError;
use crate::pipeline::catalog::{RuleCatalog, RuleTemplate};
use crate::pipeline::chunker::Chunk;

/// Drives every catalog rule over every document chunk and merges the
/// per-chunk outputs into one result per rule.
///
/// Trait-based DI for the evaluator keeps this fully testable without an
/// inference backend.
pub struct RuleAnalyzer {
    evaluator: Box<dyn RuleEvaluator + Send + Sync>,
}

impl RuleAnalyzer {
    pub fn new(evaluator: Box<dyn RuleEvaluator + Send + Sync>) -> Self {
        Self { evaluator }
    }

    /// Evaluate all rules, in catalog order, against the prepared chunks.
    ///
    /// A single chunk's output becomes the rule's definition text verbatim.
    /// Multiple chunks are labeled `Document chunk {n}:` and concatenated in
    /// chunk order, one evaluator call per (rule, chunk) pair. The first
    /// evaluator failure aborts the batch; a partial result set is never
    /// returned.
    pub fn evaluate_all(
        &self,
        catalog: &RuleCatalog,
        chunks: &[Chunk],
    ) -> Result<ResultSet, AnalysisError> {
        let mut results = ResultSet::default();

        for rule in catalog.iter() {
            tracing::info!(rule = %rule.name, chunks = chunks.len(), "evaluating rule");

            let definition = if chunks.len() == 1 {
                self.evaluate_chunk(rule, &chunks[0])?
            } else {
                let mut merged = String::new();
                for chunk in chunks {
                    let output = self.evaluate_chunk(rule, chunk)?;
                    merged.push_str(&format!(
                        "Document chunk {}:\n{}\n\n",
                        chunk.index + 1,
                        output
                    ));
                }
                merged
            };

            results.push(rule.name.clone(), RuleResult::from_definition(definition));
        }

        Ok(results)
    }

    fn evaluate_chunk(&self, rule: &RuleTemplate, chunk: &Chunk) -> Result<String, AnalysisError> {
        self.evaluator
            .evaluate(&rule.body, &chunk.text)
            .map_err(|source| AnalysisError::RuleEvaluation {
                rule: rule.name.clone(),
                chunk_index: chunk.index,
                source,
            })
    }
}
