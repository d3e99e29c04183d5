//! Salary normalisation
//!
//! The placement schema stores packages in LPA (lakhs per annum), so bare
//! rupee amounts in a question are rewritten before they reach the model.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::consts::RUPEES_PER_LAKH;

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9,]+\b").expect("number pattern is valid"));

/// Rewrite every bare number in `question` as "<n> LPA"
pub(crate) fn normalize_salary(question: &str) -> String {
    NUMBER_RE
        .replace_all(question, |caps: &Captures| {
            let matched = &caps[0];
            let digits: String = matched.chars().filter(|c| *c != ',').collect();
            match digits.parse::<u64>() {
                Ok(amount) => format!("{} LPA", format_lpa(amount as f64 / RUPEES_PER_LAKH)),
                // Bare commas and overflowing numbers stay as typed
                Err(_) => matched.to_string(),
            }
        })
        .into_owned()
}

/// Normalise only when the question doesn't already talk in LPA
pub(crate) fn normalize_unless_lpa(question: &str) -> String {
    if question.to_lowercase().contains("lpa") {
        question.to_string()
    } else {
        normalize_salary(question)
    }
}

/// Integral values keep one decimal place ("1.0"), fractions print as-is
fn format_lpa(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
