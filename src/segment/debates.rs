//! Debate-boundary detection over the normalised transcript.
//!
//! Headings are found by an ordered cascade of matchers rather than one
//! monolithic pattern, so each heuristic stays testable on its own. The
//! patterns are tuned to the Hansard document family, not arbitrary PDFs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::info;

/// One titled section of the sitting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebateSection {
    pub title: String,
    pub text: String,
}

/// Title used when no heading is detected anywhere in the document.
pub const FALLBACK_TITLE: &str = "Debate";

/// A run of capitalised words and permitted punctuation forming a heading.
const TITLE_RUN: &str = r"[A-Z][A-Za-z’'().:&/\- ]+?";

/// Heading followed by a numbered oral question, e.g. "Flood Defences\n12. ".
static NUMBERED_QUESTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"({TITLE_RUN})[\n ]\d+\.\s")).expect("valid regex"));

/// Heading followed by a bracketed six-or-more digit reference number.
static REFERENCE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"({TITLE_RUN})[\n ]\[?\d{{6,}}\]?")).expect("valid regex"));

/// Recurring section names that are headings in their own right.
static KNOWN_SECTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^(Topical Questions|Business of the House|House of Commons|Project Spire|Women|Access|Charities|Sports|Creative|Community|Poverty|Christians)\b",
    )
    .expect("valid regex")
});

#[derive(Debug)]
struct Boundary {
    start: usize,
    title: String,
}

/// Collect heading boundaries from every matcher, in document order.
///
/// When two matchers fire at the same offset the earlier one in the cascade
/// wins; the stable sort preserves cascade order among equal starts.
fn heading_boundaries(raw_text: &str) -> Vec<Boundary> {
    let mut found = Vec::new();
    for matcher in [&*NUMBERED_QUESTION, &*REFERENCE_NUMBER, &*KNOWN_SECTION] {
        for caps in matcher.captures_iter(raw_text) {
            let title = caps.get(1).expect("title group");
            found.push(Boundary {
                start: title.start(),
                title: title.as_str().trim().to_string(),
            });
        }
    }
    found.sort_by_key(|boundary| boundary.start);
    found.dedup_by_key(|boundary| boundary.start);
    found
}

/// Split raw text into contiguous, ordered debate sections.
///
/// Zero detected headings degrades to a single section covering the whole
/// document; that is the designed fallback, not an error.
pub fn segment(raw_text: &str) -> Vec<DebateSection> {
    let boundaries = heading_boundaries(raw_text);
    if boundaries.is_empty() {
        info!("no debate headings found; falling back to a single section");
        return vec![DebateSection {
            title: FALLBACK_TITLE.to_string(),
            text: raw_text.trim().to_string(),
        }];
    }

    let mut sections = Vec::with_capacity(boundaries.len());
    for (idx, boundary) in boundaries.iter().enumerate() {
        let end = boundaries
            .get(idx + 1)
            .map_or(raw_text.len(), |next| next.start);
        sections.push(DebateSection {
            title: boundary.title.clone(),
            text: raw_text[boundary.start..end].trim().to_string(),
        });
    }
    sections
}
