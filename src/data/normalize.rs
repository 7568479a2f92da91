//! Whitespace and hyphenation clean-up for extracted page text.

use once_cell::sync::Lazy;
use regex::Regex;

static HORIZONTAL_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").expect("valid regex"));
static HYPHEN_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\p{Alphabetic})-\n(\p{Alphabetic})").expect("valid regex"));

/// Join page fragments and normalise the combined stream.
pub fn normalize_pages(pages: &[String]) -> String {
    normalize(&pages.join("\n"))
}

/// Collapse runs of horizontal whitespace and repair hyphenation line breaks.
///
/// The hyphen repair is a lossy heuristic: `word-\nwrap` becomes `wordwrap`,
/// and only fires when both sides of the break are alphabetic. Idempotent.
pub fn normalize(raw: &str) -> String {
    let mut text = HORIZONTAL_WS.replace_all(raw, " ").into_owned();
    // Replacements cannot overlap within one pass, so iterate to a fixpoint
    // for chains like "a-\nb-\nc".
    while HYPHEN_BREAK.is_match(&text) {
        text = HYPHEN_BREAK.replace_all(&text, "$1$2").into_owned();
    }
    text
}
