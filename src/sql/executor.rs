use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};

use crate::error::{QueryError, error_text};

use super::guard::check_read_only;

/// A single value from a result row
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CellValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl CellValue {
    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, CellValue::Integer(_) | CellValue::Real(_))
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        match self {
            CellValue::Null => serde_json::Value::Null,
            CellValue::Integer(i) => serde_json::json!(i),
            CellValue::Real(f) => serde_json::json!(f),
            CellValue::Text(s) => serde_json::json!(s),
            CellValue::Blob(b) => serde_json::json!(format!("<{} bytes>", b.len())),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Null => write!(f, "NULL"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Real(r) => write!(f, "{r}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Blob(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

impl From<ValueRef<'_>> for CellValue {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => CellValue::Null,
            ValueRef::Integer(i) => CellValue::Integer(i),
            ValueRef::Real(r) => CellValue::Real(r),
            ValueRef::Text(t) => CellValue::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => CellValue::Blob(b.to_vec()),
        }
    }
}

/// Column names and every fetched row
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct QueryResult {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<CellValue>>,
    pub(crate) elapsed_ms: f64,
}

impl QueryResult {
    pub(crate) fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// What the page shows after an execution attempt
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum QueryOutcome {
    Rows(QueryResult),
    /// "Error: ..." message
    Failed(String),
}

impl QueryOutcome {
    pub(crate) fn is_failure(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }
}

/// SQLite database holding the placement tables
#[derive(Debug, Clone)]
pub(crate) struct Database {
    path: PathBuf,
}

impl Database {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    fn open_read_only(&self) -> Result<Connection, QueryError> {
        if !self.path.exists() {
            return Err(QueryError::MissingDatabase {
                path: self.path.clone(),
            });
        }
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }

    /// Guard, then run `sql` on a fresh read-only connection and fetch all rows
    pub(crate) fn execute(&self, sql: &str) -> Result<QueryResult, QueryError> {
        check_read_only(sql)?;

        let start = Instant::now();
        let conn = self.open_read_only()?;
        let mut stmt = conn.prepare(sql.trim())?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut rows = Vec::new();
        let mut cursor = stmt.query([])?;
        while let Some(row) = cursor.next()? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(CellValue::from(row.get_ref(i)?));
            }
            rows.push(values);
        }

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        tracing::info!(
            database = %self.path.display(),
            rows = rows.len(),
            elapsed_ms,
            "query executed"
        );
        Ok(QueryResult {
            columns,
            rows,
            elapsed_ms,
        })
    }

    /// Execute and fold any failure into the page's "Error: ..." form
    pub(crate) fn execute_to_outcome(&self, sql: &str) -> QueryOutcome {
        match self.execute(sql) {
            Ok(result) => QueryOutcome::Rows(result),
            Err(e) => {
                tracing::warn!(error = %e, "query failed");
                QueryOutcome::Failed(error_text(&e.to_string()))
            }
        }
    }
}
