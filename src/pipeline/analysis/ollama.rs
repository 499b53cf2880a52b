use serde::{Deserialize, Serialize};

use super::prompt::{build_rule_prompt, RULE_ANALYSIS_SYSTEM_PROMPT};
use super::types::RuleEvaluator;
use super::EvaluatorError;

/// Ollama HTTP evaluator for local LLM inference.
pub struct OllamaEvaluator {
    base_url: String,
    model: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OllamaEvaluator {
    /// Create an evaluator pointing at an Ollama instance.
    pub fn new(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            client,
            timeout_secs,
        }
    }

    /// Default Ollama instance at localhost:11434 with a 5-minute timeout.
    pub fn default_local(model: &str) -> Self {
        Self::new("http://localhost:11434", model, 300)
    }
}

/// Request body for Ollama /api/generate
#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    system: &'a str,
    stream: bool,
}

/// Response body from Ollama /api/generate
#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl RuleEvaluator for OllamaEvaluator {
    fn evaluate(&self, template: &str, chunk_text: &str) -> Result<String, EvaluatorError> {
        let url = format!("{}/api/generate", self.base_url);
        let prompt = build_rule_prompt(template, chunk_text);
        let body = OllamaGenerateRequest {
            model: &self.model,
            prompt: &prompt,
            system: RULE_ANALYSIS_SYSTEM_PROMPT,
            stream: false,
        };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                EvaluatorError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                EvaluatorError::HttpClient(format!(
                    "Request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                EvaluatorError::HttpClient(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EvaluatorError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaGenerateResponse = response
            .json()
            .map_err(|e| EvaluatorError::ResponseParsing(e.to_string()))?;

        Ok(parsed.response)
    }
}

/// Mock evaluator for testing. Returns a configurable response.
pub struct MockEvaluator {
    response: String,
}

impl MockEvaluator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
        }
    }
}

impl RuleEvaluator for MockEvaluator {
    fn evaluate(&self, _template: &str, _chunk_text: &str) -> Result<String, EvaluatorError> {
        Ok(self.response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_evaluator_returns_configured_response() {
        let evaluator = MockEvaluator::new("analysis text");
        let result = evaluator.evaluate("template", "chunk").unwrap();
        assert_eq!(result, "analysis text");
    }

    #[test]
    fn constructor_trims_trailing_slash() {
        let evaluator = OllamaEvaluator::new("http://localhost:11434/", "llama3", 60);
        assert_eq!(evaluator.base_url, "http://localhost:11434");
        assert_eq!(evaluator.model, "llama3");
        assert_eq!(evaluator.timeout_secs, 60);
    }

    #[test]
    fn default_local_uses_standard_port() {
        let evaluator = OllamaEvaluator::default_local("llama3");
        assert_eq!(evaluator.base_url, "http://localhost:11434");
        assert_eq!(evaluator.timeout_secs, 300);
    }
}
