use chrono::Utc;
use serde_json::{Value, json};

use crate::question::SAMPLES;
use crate::session::{Notice, Session};
use crate::sql::{QueryOutcome, explanation};

fn to_pretty(output: &Value) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to serialize JSON output");
        "{}".to_string()
    })
}

fn generated_at() -> String {
    Utc::now().to_rfc3339()
}

pub(crate) fn outcome_json(outcome: &QueryOutcome) -> Value {
    match outcome {
        QueryOutcome::Failed(message) => json!({ "error": message }),
        QueryOutcome::Rows(result) => {
            let rows: Vec<Vec<Value>> = result
                .rows
                .iter()
                .map(|row| row.iter().map(|v| v.to_json()).collect())
                .collect();
            json!({
                "columns": result.columns,
                "rows": rows,
                "row_count": result.rows.len(),
                "elapsed_ms": result.elapsed_ms,
            })
        }
    }
}

fn notice_json(notice: Option<&Notice>) -> Value {
    match notice {
        None => Value::Null,
        Some(Notice::Warning(message)) => json!({ "level": "warning", "message": message }),
        Some(Notice::Error(message)) => json!({ "level": "error", "message": message }),
    }
}

/// The whole home page state of a one-shot `ask`
pub(crate) fn session_json(session: &Session) -> String {
    let explanation = session
        .has_sql()
        .then(|| explanation(session.full_response(), session.generated_sql()));
    let output = json!({
        "generated_at": generated_at(),
        "question": session.question(),
        "accuracy": session.accuracy(),
        "accuracy_label": session.accuracy().label(),
        "response": session.full_response(),
        "sql": session.has_sql().then(|| session.generated_sql()),
        "explanation": explanation,
        "notice": notice_json(session.notice()),
        "result": session.result().map(outcome_json),
    });
    to_pretty(&output)
}

/// Result of a direct `exec`
pub(crate) fn exec_json(sql: &str, outcome: &QueryOutcome) -> String {
    let output = json!({
        "generated_at": generated_at(),
        "sql": sql,
        "result": outcome_json(outcome),
    });
    to_pretty(&output)
}

pub(crate) fn samples_json() -> String {
    let output: Vec<Value> = SAMPLES
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            json!({
                "number": i + 1,
                "tier": sample.tier,
                "label": sample.label,
                "display": sample.display_label(),
                "question": sample.question,
            })
        })
        .collect();
    to_pretty(&Value::Array(output))
}
