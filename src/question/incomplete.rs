use std::sync::LazyLock;

use regex::Regex;

/// Questions shorter than this (in characters, after trimming) are rejected
const MIN_QUESTION_LEN: usize = 8;

/// Words that start a request but say nothing about what to fetch
const VAGUE_WORDS: &[&str] = &[
    "select", "show", "list", "find", "get", "give", "display", "fetch", "print", "query",
    "tell", "me", "all", "the", "a", "an", "data", "info", "details", "records", "rows",
    "everything", "something", "please",
];

/// Words that leave a clause hanging when they end a question
const DANGLING_WORDS: &[&str] = &[
    "where", "by", "from", "with", "and", "or", "of", "in", "for", "than", "on", "join",
    "having", "between",
];

static BARE_WORDS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]+(\s+[A-Za-z]+)?$").expect("bare words pattern is valid")
});

/// Heuristic check for questions too vague to turn into SQL
pub(crate) fn is_incomplete(question: &str) -> bool {
    let trimmed = question.trim();
    if trimmed.chars().count() < MIN_QUESTION_LEN {
        return true;
    }

    let lowered = trimmed.to_lowercase();
    let words: Vec<&str> = lowered
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() || words.iter().all(|w| VAGUE_WORDS.contains(w)) {
        return true;
    }

    if let Some(last) = words.last()
        && DANGLING_WORDS.contains(last)
    {
        return true;
    }

    BARE_WORDS_RE.is_match(trimmed)
}
