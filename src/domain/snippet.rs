use std::sync::LazyLock;

use regex::Regex;

// Bracketed footnote markers like [1], [a1] or [note]. Brackets holding
// anything else (spaces, punctuation) are left alone.
static CITATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[\d\w]+\]").unwrap());

/// One unit of extracted text. Disambiguation pages mark their section
/// headers so the view can set them apart from the candidate-topic lines.
#[derive(Debug, PartialEq, Clone)]
pub enum Snippet {
    Heading(String),
    Text(String),
}

pub fn strip_citations(text: &str) -> String {
    CITATION_PATTERN.replace_all(text, "").into_owned()
}
