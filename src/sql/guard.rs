use crate::error::{QueryError, WriteKind};

/// Reject statements whose first keyword writes to the database.
///
/// Only the leading keyword is inspected; this is not a SQL parser.
pub(crate) fn check_read_only(sql: &str) -> Result<(), QueryError> {
    let trimmed = sql.trim();
    if trimmed.is_empty() {
        return Err(QueryError::EmptyStatement);
    }

    let keyword: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_uppercase();

    match WriteKind::from_keyword(&keyword) {
        Some(kind) => {
            tracing::warn!(keyword = %keyword, "rejected write statement");
            Err(QueryError::Forbidden(kind))
        }
        None => Ok(()),
    }
}
