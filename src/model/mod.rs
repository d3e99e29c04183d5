//! Language model boundary
//!
//! Each provider implements the Generator trait; the rest of the crate only
//! ever sees the cleaned reply text or an "Error: ..." string.

mod gemini;

pub(crate) use gemini::GeminiClient;

use std::time::Instant;

use crate::error::{ModelError, error_text};
use crate::prompt::Prompt;

/// Marker the schema examples teach the model to put before its query
const SQL_QUERY_MARKER: &str = "SQL Query:";

/// A model that turns a prompt into free text
pub(crate) trait Generator {
    /// Name used in logs
    fn name(&self) -> &str;

    /// Send the prompt and return the first candidate's text
    fn generate(&self, prompt: &Prompt) -> Result<String, ModelError>;
}

/// Call the model once, degrading every failure to an "Error: ..." string
pub(crate) fn ask_model(generator: &dyn Generator, prompt: &Prompt) -> String {
    let start = Instant::now();
    match generator.generate(prompt) {
        Ok(text) => {
            tracing::info!(
                model = generator.name(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                chars = text.len(),
                "model replied"
            );
            clean_response(&text)
        }
        Err(e) => {
            tracing::warn!(model = generator.name(), error = %e, "model call failed");
            error_text(&e.to_string())
        }
    }
}

/// Trim the reply and keep only what follows the last "SQL Query:" marker
pub(crate) fn clean_response(text: &str) -> String {
    let trimmed = text.trim();
    match trimmed.rsplit_once(SQL_QUERY_MARKER) {
        Some((_, after)) => after.trim().to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Generator returning canned replies and recording the prompts it saw
    pub(crate) struct StubGenerator {
        reply: Result<String, (u16, String)>,
        pub(crate) prompts: RefCell<Vec<Prompt>>,
    }

    impl StubGenerator {
        pub(crate) fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                prompts: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn failing(status: u16, message: &str) -> Self {
            Self {
                reply: Err((status, message.to_string())),
                prompts: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.prompts.borrow().len()
        }
    }

    impl Generator for StubGenerator {
        fn name(&self) -> &str {
            "stub"
        }

        fn generate(&self, prompt: &Prompt) -> Result<String, ModelError> {
            self.prompts.borrow_mut().push(prompt.clone());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err((status, message)) => Err(ModelError::Api {
                    status: *status,
                    message: message.clone(),
                }),
            }
        }
    }
}
