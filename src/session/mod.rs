//! Query session
//!
//! Holds everything one run of the assistant remembers between actions:
//! the selected sample and accuracy, the question, the last model reply,
//! the SQL extracted from it and the last execution outcome. Every page
//! event is a method taking the session explicitly.

pub(crate) mod repl;

use crate::error::{AppError, is_error_text};
use crate::model::{Generator, ask_model};
use crate::prompt::{Accuracy, build_prompt};
use crate::question::{SAMPLES, Sample, is_incomplete, sample_at};
use crate::sql::{Database, QueryOutcome, explanation, extract_sql};

const EMPTY_QUESTION_WARNING: &str = "Please enter a question first.";
const INCOMPLETE_QUESTION_WARNING: &str = "Your question looks incomplete. Say what to look up \
    and any conditions, e.g. \"List students with a CGPA above 9\".";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Page {
    #[default]
    Home,
    About,
}

/// Banner shown above the page content
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    Warning(String),
    Error(String),
}

#[derive(Debug, Default)]
pub(crate) struct Session {
    page: Page,
    sample: Option<&'static Sample>,
    accuracy: Accuracy,
    default_accuracy: Accuracy,
    normalize_salary: bool,
    question: String,
    full_response: String,
    generated_sql: String,
    show_explanation: bool,
    result: Option<QueryOutcome>,
    notice: Option<Notice>,
}

impl Session {
    pub(crate) fn new(default_accuracy: Accuracy, normalize_salary: bool) -> Self {
        Self {
            accuracy: default_accuracy,
            default_accuracy,
            normalize_salary,
            ..Self::default()
        }
    }

    pub(crate) fn page(&self) -> Page {
        self.page
    }

    pub(crate) fn sample(&self) -> Option<&'static Sample> {
        self.sample
    }

    pub(crate) fn accuracy(&self) -> Accuracy {
        self.accuracy
    }

    pub(crate) fn question(&self) -> &str {
        &self.question
    }

    pub(crate) fn full_response(&self) -> &str {
        &self.full_response
    }

    pub(crate) fn generated_sql(&self) -> &str {
        &self.generated_sql
    }

    pub(crate) fn has_sql(&self) -> bool {
        !self.generated_sql.trim().is_empty()
    }

    pub(crate) fn result(&self) -> Option<&QueryOutcome> {
        self.result.as_ref()
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// True when the page currently shows an error banner or failed execution
    pub(crate) fn has_error(&self) -> bool {
        matches!(self.notice, Some(Notice::Error(_)))
            || self.result.as_ref().is_some_and(QueryOutcome::is_failure)
    }

    pub(crate) fn navigate(&mut self, page: Page) {
        self.page = page;
    }

    /// Pick a sample by its 1-based dropdown number and copy its question
    pub(crate) fn select_sample(&mut self, number: usize) -> Result<&'static Sample, AppError> {
        let sample = sample_at(number).ok_or(AppError::InvalidSample {
            index: number,
            max: SAMPLES.len(),
        })?;
        self.sample = Some(sample);
        self.question = sample.question.to_string();
        Ok(sample)
    }

    pub(crate) fn set_accuracy(&mut self, accuracy: Accuracy) {
        self.accuracy = accuracy;
    }

    pub(crate) fn set_question(&mut self, question: &str) {
        self.question = question.to_string();
    }

    /// Turn the current question into SQL through `generator`.
    ///
    /// Blank or incomplete questions only raise a warning; the model is not
    /// called and the previous reply is kept.
    pub(crate) fn generate(&mut self, generator: &dyn Generator) {
        self.notice = None;
        let question = self.question.trim();
        if question.is_empty() {
            self.notice = Some(Notice::Warning(EMPTY_QUESTION_WARNING.to_string()));
            return;
        }
        if is_incomplete(question) {
            tracing::debug!(question, "rejected incomplete question");
            self.notice = Some(Notice::Warning(INCOMPLETE_QUESTION_WARNING.to_string()));
            return;
        }

        let prompt = build_prompt(question, self.accuracy, self.normalize_salary);
        let response = ask_model(generator, &prompt);
        if is_error_text(&response) {
            self.notice = Some(Notice::Error(response.clone()));
        }
        self.generated_sql = extract_sql(&response);
        self.full_response = response;
        self.result = None;
    }

    pub(crate) fn toggle_explanation(&mut self) {
        if self.has_sql() {
            self.show_explanation = !self.show_explanation;
        }
    }

    pub(crate) fn explanation_visible(&self) -> bool {
        self.show_explanation && self.has_sql()
    }

    /// Reply prose without the SQL, while the explanation is toggled on
    pub(crate) fn explanation(&self) -> Option<String> {
        self.explanation_visible()
            .then(|| explanation(&self.full_response, &self.generated_sql))
    }

    /// Run the extracted SQL. Returns false (and does nothing) without SQL.
    ///
    /// After running, the sample and accuracy selections go back to their
    /// defaults.
    pub(crate) fn execute(&mut self, database: &Database) -> bool {
        if !self.has_sql() {
            return false;
        }
        self.result = Some(database.execute_to_outcome(&self.generated_sql));
        self.sample = None;
        self.accuracy = self.default_accuracy;
        true
    }

    /// Forget the question, reply and result
    pub(crate) fn clear(&mut self) {
        *self = Self::new(self.default_accuracy, self.normalize_salary);
    }
}
