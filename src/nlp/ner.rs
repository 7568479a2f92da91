//! Entity-recogniser seam plus a gazetteer-backed fallback.
//!
//! The recogniser is an explicit collaborator object constructed once and
//! passed into the pipeline, never a process-wide singleton. Swap the
//! gazetteer for a model-backed implementation by implementing the trait.

use std::sync::Arc;

use anyhow::Result;
use once_cell::sync::Lazy;

/// Raw recogniser output for one entity span, in left-to-right span order.
#[derive(Debug, Clone)]
pub struct RawEntity {
    pub word: String,
    pub entity_group: String,
    pub score: Option<f64>,
}

/// Seam for token-classification collaborators.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Result<Vec<RawEntity>>;
}

static ORG_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "House of Commons",
        "House of Lords",
        "NHS",
        "Treasury",
        "Home Office",
        "Foreign Office",
        "Department for Education",
        "Department of Health",
        "Bank of England",
        "Environment Agency",
        "BBC",
    ]
});

static LOC_TERMS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "United Kingdom",
        "England",
        "Scotland",
        "Wales",
        "Northern Ireland",
        "London",
        "Westminster",
    ]
});

/// Case-insensitive term lookup over a fixed parliamentary gazetteer.
struct GazetteerRecognizer;

impl EntityRecognizer for GazetteerRecognizer {
    fn recognize(&self, text: &str) -> Result<Vec<RawEntity>> {
        let mut found = find_terms(text, &ORG_TERMS, "ORG");
        found.extend(find_terms(text, &LOC_TERMS, "LOC"));
        // Emission order is span order in the source text.
        found.sort_by_key(|(start, _)| *start);
        Ok(found.into_iter().map(|(_, entity)| entity).collect())
    }
}

fn find_terms(text: &str, terms: &[&str], label: &str) -> Vec<(usize, RawEntity)> {
    let lower = text.to_lowercase();
    let mut found = Vec::new();
    for term in terms {
        let term_lower = term.to_lowercase();
        let mut search_from = 0;
        while let Some(pos) = lower[search_from..].find(&term_lower) {
            let start = search_from + pos;
            found.push((
                start,
                RawEntity {
                    word: term.to_string(),
                    entity_group: label.to_string(),
                    score: Some(0.8),
                },
            ));
            search_from = start + term_lower.len();
        }
    }
    found
}

/// Build the gazetteer recogniser used when no model is available.
pub fn fallback_recognizer() -> Arc<dyn EntityRecognizer> {
    Arc::new(GazetteerRecognizer)
}
