//! Length metrics and paragraph extraction for Markdown content.

use regex::Regex;
use std::sync::OnceLock;

static FRONT_MATTER: OnceLock<Regex> = OnceLock::new();
static LEADING_H1: OnceLock<Regex> = OnceLock::new();

fn front_matter() -> &'static Regex {
    FRONT_MATTER.get_or_init(|| {
        Regex::new(r"(?s)\A---.*?---\s*").expect("front matter pattern should compile")
    })
}

fn leading_h1() -> &'static Regex {
    LEADING_H1.get_or_init(|| Regex::new(r"\A#\s+.*?\n").expect("h1 pattern should compile"))
}

/// Characters from the CJK Unified Ideographs block and Extension A.
pub fn is_cjk(c: char) -> bool {
    matches!(c, '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}')
}

/// Counts each CJK character as one unit and every other whitespace-delimited
/// token as one word. CJK characters also separate the tokens around them.
pub fn count_words(text: &str) -> usize {
    let cjk_chars = text.chars().filter(|&c| is_cjk(c)).count();
    let latin: String = text
        .chars()
        .map(|c| if is_cjk(c) { ' ' } else { c })
        .collect();
    cjk_chars + latin.split_whitespace().count()
}

/// First body paragraph after the front matter and a leading H1, trimmed.
/// Returns an empty string when the document has none.
pub fn first_paragraph(content: &str) -> String {
    let body = front_matter().replace(content, "");
    let body = leading_h1().replace(&body, "");

    body.split("\n\n")
        .filter(|block| !block.trim().is_empty() && !block.starts_with('#'))
        .map(|block| block.trim().to_string())
        .next()
        .unwrap_or_default()
}
