//! Terminal rendering of the two pages

use std::fmt::Write;

use crate::output::format::{Ansi, indent_block, paint};
use crate::output::table::{result_table, schema_tables, summary_line};
use crate::question::PLACEHOLDER;
use crate::session::{Notice, Page, Session};
use crate::sql::QueryOutcome;

const TITLE: &str = "LLM SQL Query Generator";
const NO_RESULTS: &str = "Query executed successfully but returned no results.";

const ABOUT_INTRO: &str = "\
The LLM SQL Query Generator helps users create SQL queries from natural language
questions using a Large Language Model (LLM).

Instead of memorizing SQL syntax, describe what you want in plain English and the
tool writes the SQL query for you.";

const HOW_IT_WORKS: &[&str] = &[
    "Understands your intent",
    "Recognizes the relevant tables and columns",
    "Generates a valid SQL query for your input",
];

const ABOUT_QUESTIONS: &[&str] = &[
    "Show students with offers above 30 LPA",
    "List students with CGPA greater than 9 from the CSE branch",
    "Which companies offered roles to students in 2024?",
    "Find all companies visiting in the month of December",
    "List students along with the companies that hired them",
    "Which student got the highest package and from which company?",
    "Show all students who know Python and have an offer",
    "Who are the top 5 students based on CGPA?",
];

const WHY_LLM: &[&str] = &[
    "No need to memorize syntax",
    "Supports flexible phrasing (\"above 30 LPA\", \"more than 9 CGPA\")",
    "Saves time for beginners and non-technical users",
    "Makes querying accessible with just natural language",
];

pub(crate) fn render_page(session: &Session, use_color: bool) -> String {
    match session.page() {
        Page::Home => render_home(session, use_color),
        Page::About => render_about(use_color),
    }
}

pub(crate) fn render_home(session: &Session, use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n  {}\n", paint(TITLE, Ansi::Bold, use_color));

    let sample = session
        .sample()
        .map_or_else(|| PLACEHOLDER.to_string(), |s| s.display_label());
    let _ = writeln!(out, "  Sample:    {sample}");
    let _ = writeln!(out, "  Accuracy:  {}", session.accuracy().label());
    let question = if session.question().is_empty() {
        paint("Type your question here...", Ansi::Dim, use_color)
    } else {
        session.question().to_string()
    };
    let _ = writeln!(out, "  Question:  {question}");

    if let Some(notice) = session.notice() {
        out.push('\n');
        out.push_str(&render_notice(notice, use_color));
    }

    if session.has_sql() {
        let _ = writeln!(out, "\n  {}\n", subheader("Generated SQL Query", use_color));
        let _ = writeln!(out, "{}", indent_block(session.generated_sql()));

        if let Some(explanation) = session.explanation() {
            let _ = writeln!(out, "\n  {}\n", subheader("Explanation", use_color));
            let _ = writeln!(out, "{}", indent_block(&explanation));
        }
    }

    if let Some(outcome) = session.result() {
        out.push('\n');
        out.push_str(&render_outcome(outcome, use_color));
    }
    out
}

/// Result section: error banner, empty notice or table with summary
pub(crate) fn render_outcome(outcome: &QueryOutcome, use_color: bool) -> String {
    match outcome {
        QueryOutcome::Failed(message) => format!("  {}\n", paint(message, Ansi::Red, use_color)),
        QueryOutcome::Rows(result) => {
            let mut out = String::new();
            let _ = writeln!(out, "  {}\n", subheader("Query Results", use_color));
            if result.is_empty() {
                let _ = writeln!(out, "  {NO_RESULTS}");
            } else {
                let _ = writeln!(out, "{}", result_table(result, use_color));
                let _ = writeln!(out, "\n{}", summary_line(result, use_color));
            }
            out
        }
    }
}

fn render_notice(notice: &Notice, use_color: bool) -> String {
    match notice {
        Notice::Warning(text) => format!("  {}\n", paint(text, Ansi::Yellow, use_color)),
        Notice::Error(text) => format!("  {}\n", paint(text, Ansi::Red, use_color)),
    }
}

fn subheader(text: &str, use_color: bool) -> String {
    paint(text, Ansi::Cyan, use_color)
}

pub(crate) fn render_about(use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n  {}\n", paint(&format!("About {TITLE}"), Ansi::Bold, use_color));
    let _ = writeln!(out, "{}\n", indent_block(ABOUT_INTRO));

    let _ = writeln!(out, "  {}\n", subheader("How It Works", use_color));
    let _ = writeln!(
        out,
        "    When you type a natural language question, the tool:"
    );
    for (i, step) in HOW_IT_WORKS.iter().enumerate() {
        let _ = writeln!(out, "    {}. {step}", i + 1);
    }

    let _ = writeln!(out, "\n  {}", subheader("Database Schema", use_color));
    for (name, table) in schema_tables(use_color) {
        let _ = writeln!(out, "\n  {}", paint(name, Ansi::Green, use_color));
        let _ = writeln!(out, "{table}");
    }

    let _ = writeln!(out, "\n  {}\n", subheader("Sample Natural Language Queries", use_color));
    for question in ABOUT_QUESTIONS {
        let _ = writeln!(out, "    - \"{question}\"");
    }

    let _ = writeln!(out, "\n  {}\n", subheader("Why Use an LLM for SQL?", use_color));
    for reason in WHY_LLM {
        let _ = writeln!(out, "    - {reason}");
    }
    out
}
