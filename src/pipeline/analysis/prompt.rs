pub const RULE_ANALYSIS_SYSTEM_PROMPT: &str = r#"
You are a compliance analysis assistant. Your ONLY role is to explain how a
document excerpt relates to one named compliance rule.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Work ONLY from text explicitly present in the document excerpt.
2. NEVER issue a compliance verdict. Pass/fail decisions belong to a reviewer.
3. NEVER invent citations, section numbers, or quotations.
4. If the excerpt contains nothing relevant to the rule, say so plainly.
5. When referencing the document, quote it verbatim.
"#;

/// Build the evaluation prompt for one rule template and one document chunk.
pub fn build_rule_prompt(template: &str, chunk_text: &str) -> String {
    format!(
        r#"{template}

<document>
{chunk_text}
</document>

Explain how the document excerpt above relates to the rule described. Work
only from what the excerpt states."#
    )
}
