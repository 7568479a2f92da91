//! Relation extraction over speech text.
//!
//! With a generator collaborator available the text is chunked and the
//! generator's `<triplet>` markup is parsed; without one, an interrogative
//! pattern heuristic synthesises `asks_about` facts from oral questions.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::warn;

/// One extracted subject-predicate-object fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationTriple {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

/// Seam for text-to-text relation-generation collaborators. Returns the
/// generated markup for one chunk.
pub trait RelationGenerator: Send + Sync {
    fn generate(&self, chunk: &str) -> Result<String>;
}

/// Oral-question shape: "what/which steps/progress/support ... on/to/for <topic>?".
static ASKS_ABOUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:what|which)\s+(?:steps|progress|support)[^?]*?(?:on|to|for)\s+([^?]+)\?")
        .expect("valid regex")
});

/// Delimited triple markup emitted by the generator.
static TRIPLET_MARKUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<triplet>\s*(.*?)\s*\|\s*(.*?)\s*\|\s*(.*?)\s*</triplet>").expect("valid regex")
});

/// Extract relation triples from one speech.
///
/// Triples are emitted in chunk order, then within-chunk match order. A
/// failing generator call or missing markup yields zero triples for that
/// chunk only.
pub fn extract(
    generator: Option<&dyn RelationGenerator>,
    text: &str,
    max_chunk_len: usize,
) -> Vec<RelationTriple> {
    let Some(generator) = generator else {
        return fallback_questions(text);
    };

    let mut triples = Vec::new();
    for chunk in char_chunks(text, max_chunk_len) {
        let markup = match generator.generate(&chunk) {
            Ok(markup) => markup,
            Err(error) => {
                warn!(%error, "relation generator failed on chunk; skipping");
                continue;
            }
        };
        for caps in TRIPLET_MARKUP.captures_iter(&markup) {
            triples.push(RelationTriple {
                subject: caps[1].trim().to_string(),
                predicate: caps[2].trim().to_string(),
                object: caps[3].trim().to_string(),
            });
        }
    }
    triples
}

/// Pattern-only fallback: one `("MP", "asks_about", topic)` per matched
/// oral question, applied to the whole (unchunked) text.
fn fallback_questions(text: &str) -> Vec<RelationTriple> {
    ASKS_ABOUT
        .captures_iter(text)
        .map(|caps| RelationTriple {
            subject: "MP".to_string(),
            predicate: "asks_about".to_string(),
            object: caps[1].trim_matches(&[' ', '.', ';', ':', ')'][..]).to_string(),
        })
        .collect()
}

/// Fixed-width chunks on char boundaries; no overlap, no sentence awareness.
/// Deliberately width-stable so outputs stay reproducible across runs.
fn char_chunks(text: &str, max_chunk_len: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chunk_len.max(1))
        .map(|chunk| chunk.iter().collect())
        .collect()
}
