//! Normalisation of raw recogniser output into uniform entity mentions.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::nlp::ner::RawEntity;

/// One occurrence of a named entity inside one speech.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityMention {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub score: f64,
}

static SLASH_SEP: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+/+\s+").expect("valid regex"));

/// Filter and normalise recogniser output, preserving emission order.
///
/// Drops empty spans and lone punctuation fragments left over from sub-word
/// tokenisation; rewrites spaced slash separators to a bare `/`.
pub fn clean(raw: &[RawEntity]) -> Vec<EntityMention> {
    let mut mentions = Vec::with_capacity(raw.len());
    for entity in raw {
        let trimmed = entity.word.trim();
        if trimmed.is_empty() {
            continue;
        }
        let mut chars = trimmed.chars();
        if let (Some(only), None) = (chars.next(), chars.next()) {
            if !only.is_alphanumeric() {
                continue;
            }
        }
        mentions.push(EntityMention {
            text: SLASH_SEP.replace_all(trimmed, "/").into_owned(),
            kind: entity.entity_group.clone(),
            score: entity.score.unwrap_or(0.0),
        });
    }
    mentions
}
