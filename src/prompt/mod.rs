//! Prompt assembly
//!
//! A prompt has two parts: the static schema description and a request
//! built from the (normalised) question plus the accuracy tuning instruction.

mod accuracy;
mod schema;

pub(crate) use accuracy::Accuracy;
pub(crate) use schema::{SCHEMA_PROMPT, SCHEMA_TABLES};

use crate::question::normalize_unless_lpa;

/// Trailing instruction asking the model to justify its query
const EXPLAIN_INSTRUCTION: &str = "Explain the logic of your SQL too.";

/// Two-part prompt sent to the model
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prompt {
    pub(crate) schema: &'static str,
    pub(crate) request: String,
}

pub(crate) fn build_prompt(question: &str, accuracy: Accuracy, normalize_salary: bool) -> Prompt {
    let question = if normalize_salary {
        normalize_unless_lpa(question)
    } else {
        question.to_string()
    };
    let request = format!(
        "{question}\n{}\n{EXPLAIN_INSTRUCTION}",
        accuracy.tuning_instruction()
    );
    tracing::debug!(accuracy = accuracy.label(), request = %request, "assembled prompt");
    Prompt {
        schema: SCHEMA_PROMPT,
        request,
    }
}
