use serde::{Deserialize, Serialize};

use super::EvaluatorError;

/// Evaluation backend abstraction (allows mocking).
///
/// One call produces the analysis text for one rule template applied to one
/// document chunk. Implementations hold no per-rule state; every call is
/// independent.
pub trait RuleEvaluator {
    fn evaluate(&self, template: &str, chunk_text: &str) -> Result<String, EvaluatorError>;
}

/// One rule's merged analysis. The compliance verdict and citation belong to
/// a downstream review pass and start out empty.
///
/// Field names on the wire match the export format consumed by reviewers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    #[serde(rename = "Rule Definition")]
    pub definition: String,

    #[serde(rename = "Comply Yes/No", default)]
    pub compliance: String,

    #[serde(rename = "Citation", default)]
    pub citation: String,
}

impl RuleResult {
    pub fn from_definition(definition: String) -> Self {
        Self {
            definition,
            compliance: String::new(),
            citation: String::new(),
        }
    }
}

/// Ordered mapping rule name → result. Order matches the catalog and is the
/// single source of truth for both exports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    entries: Vec<(String, RuleResult)>,
}

impl ResultSet {
    pub fn push(&mut self, name: String, result: RuleResult) {
        self.entries.push((name, result));
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, RuleResult)> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&RuleResult> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, result)| result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
