use std::fmt::Write;

use crate::question::SAMPLES;
use crate::sql::{CellValue, QueryResult};

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn csv_value(value: &CellValue) -> String {
    match value {
        CellValue::Null => String::new(),
        other => csv_escape(&other.to_string()),
    }
}

pub(crate) fn result_csv(result: &QueryResult) -> String {
    let mut out = String::new();
    let header: Vec<String> = result.columns.iter().map(|c| csv_escape(c)).collect();
    let _ = writeln!(out, "{}", header.join(","));
    for row in &result.rows {
        let line: Vec<String> = row.iter().map(csv_value).collect();
        let _ = writeln!(out, "{}", line.join(","));
    }
    out
}

pub(crate) fn samples_csv() -> String {
    let mut out = String::from("number,tier,label,question\n");
    for (i, sample) in SAMPLES.iter().enumerate() {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            i + 1,
            sample.tier.label(),
            csv_escape(sample.label),
            csv_escape(sample.question),
        );
    }
    out
}
