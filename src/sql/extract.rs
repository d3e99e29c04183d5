//! Pull a SQL statement out of free-text model replies

use std::sync::LazyLock;

use regex::Regex;

/// Keywords a statement line may start with
const START_KEYWORDS: &[&str] = &["SELECT", "INSERT", "UPDATE", "DELETE", "WITH"];

/// Fence whose first line is an info string of any language tag
static FENCED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```[^\n`]*\n(.*?)```").expect("fence pattern is valid")
});

/// Single-line fence such as ```SELECT 1;```
static INLINE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```([^\n`]+)```").expect("inline fence pattern is valid"));

static EMPTY_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```[^\n`]*\s*```").expect("empty fence pattern is valid"));

/// Extract the SQL statement from a model reply.
///
/// A fenced code block wins. Otherwise lines are collected from the first one
/// starting with a statement keyword up to and including the first line that
/// contains a `;`. Returns an empty string when neither is found.
pub(crate) fn extract_sql(response: &str) -> String {
    if let Some(caps) = FENCED_RE
        .captures(response)
        .or_else(|| INLINE_FENCE_RE.captures(response))
    {
        return caps[1].trim().to_string();
    }

    let mut sql_lines = Vec::new();
    let mut started = false;
    for line in response.lines() {
        if !started {
            let upper = line.trim().to_uppercase();
            started = START_KEYWORDS.iter().any(|k| upper.starts_with(k));
        }
        if started {
            sql_lines.push(line);
            if line.contains(';') {
                break;
            }
        }
    }
    sql_lines.join("\n").trim().to_string()
}

/// The reply with the extracted SQL removed, leaving only the prose
pub(crate) fn explanation(response: &str, sql: &str) -> String {
    let without_sql = if sql.is_empty() {
        response.to_string()
    } else {
        response.replace(sql, "")
    };
    EMPTY_FENCE_RE.replace_all(&without_sql, "").trim().to_string()
}
