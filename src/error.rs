use std::path::PathBuf;

use thiserror::Error;

use crate::consts::ERROR_PREFIX;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid sample number {index} (expected 1-{max})")]
    InvalidSample { index: usize, max: usize },

    #[error("Database already exists: {} (use --force to replace it)", path.display())]
    DatabaseExists { path: PathBuf },

    #[error("Failed to remove {}: {source}", path.display())]
    RemoveDatabase {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{0}")]
    InvalidCommand(String),

    #[error("Line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

#[derive(Debug, Error)]
pub(crate) enum ModelError {
    #[error("GOOGLE_API_KEY is not set")]
    MissingApiKey,

    #[error("{0}")]
    Transport(#[from] ureq::Error),

    #[error("API request failed ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response from model: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Unable to generate SQL query.")]
    EmptyResponse,
}

/// Statement kinds the read-only guard refuses to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum WriteKind {
    Insert,
    Update,
    Delete,
}

impl WriteKind {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "INSERT" => Some(WriteKind::Insert),
            "UPDATE" => Some(WriteKind::Update),
            "DELETE" => Some(WriteKind::Delete),
            _ => None,
        }
    }

    fn rejection(self) -> &'static str {
        match self {
            WriteKind::Insert => "Can't insert into the database.",
            WriteKind::Update => "Can't update the database.",
            WriteKind::Delete => "Can't delete from the database.",
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum QueryError {
    #[error("{}", .0.rejection())]
    Forbidden(WriteKind),

    #[error("No SQL statement to execute.")]
    EmptyStatement,

    #[error("Database not found: {}", path.display())]
    MissingDatabase { path: PathBuf },

    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Convert an error into the "Error: ..." string the page displays
pub(crate) fn error_text(message: &str) -> String {
    format!("{ERROR_PREFIX} {message}")
}

/// True when a displayed string is an error sentinel
pub(crate) fn is_error_text(text: &str) -> bool {
    text.trim_start().starts_with(ERROR_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_sample() {
        let e = AppError::InvalidSample { index: 20, max: 13 };
        assert_eq!(e.to_string(), "Invalid sample number 20 (expected 1-13)");
    }

    #[test]
    fn app_error_display_database_exists() {
        let e = AppError::DatabaseExists {
            path: PathBuf::from("placement.db"),
        };
        assert_eq!(
            e.to_string(),
            "Database already exists: placement.db (use --force to replace it)"
        );
    }

    #[test]
    fn model_error_empty_response() {
        assert_eq!(
            ModelError::EmptyResponse.to_string(),
            "Unable to generate SQL query."
        );
    }

    #[test]
    fn model_error_api() {
        let e = ModelError::Api {
            status: 400,
            message: "API key not valid".to_string(),
        };
        assert_eq!(e.to_string(), "API request failed (400): API key not valid");
    }

    #[test]
    fn query_error_forbidden_messages() {
        assert_eq!(
            QueryError::Forbidden(WriteKind::Insert).to_string(),
            "Can't insert into the database."
        );
        assert_eq!(
            QueryError::Forbidden(WriteKind::Update).to_string(),
            "Can't update the database."
        );
        assert_eq!(
            QueryError::Forbidden(WriteKind::Delete).to_string(),
            "Can't delete from the database."
        );
    }

    #[test]
    fn app_error_from_query_error() {
        let app: AppError = QueryError::EmptyStatement.into();
        assert_eq!(app.to_string(), "No SQL statement to execute.");
    }

    #[test]
    fn error_text_has_prefix() {
        let text = error_text("boom");
        assert_eq!(text, "Error: boom");
        assert!(is_error_text(&text));
        assert!(!is_error_text("SELECT 1;"));
    }
}
