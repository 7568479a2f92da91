//! Fuzzy canonicalisation of entity mentions within one debate.
//!
//! Greedy single-pass clustering over normalised keys: exact hits reuse the
//! memoised assignment, near hits merge via token-sort similarity, everything
//! else opens a new cluster. Results are deterministic for a fixed input
//! order but can legitimately differ under permutation; the total mention
//! count is conserved either way.

use std::collections::{BTreeSet, HashMap};

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use strsim::normalized_levenshtein;

use crate::nlp::entities::EntityMention;

/// Default minimum 0-100 similarity for merging into an existing cluster.
pub const DEFAULT_SIM_THRESHOLD: f64 = 92.0;

/// A merged cluster representing one real-world entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalEntity {
    /// Surface text of the first mention assigned to the cluster.
    pub canonical: String,
    /// Type of the highest-scoring member seen so far.
    #[serde(rename = "type")]
    pub kind: String,
    /// Deduplicated surface forms, lexicographically sorted.
    pub mentions: BTreeSet<String>,
    /// Total mentions assigned, duplicates included.
    pub count: usize,
    #[serde(skip)]
    best_score: f64,
}

static KEY_STRIP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s&\-./]").expect("valid regex"));
static MULTI_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Lowercased, punctuation-stripped form used for exact and fuzzy matching.
pub fn normalize_key(text: &str) -> String {
    let stripped = KEY_STRIP.replace_all(text, "");
    let lowered = stripped.trim().to_lowercase();
    MULTI_SPACE.replace_all(&lowered, " ").into_owned()
}

/// Token-order-insensitive similarity on a 0-100 scale.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(&sort_tokens(a), &sort_tokens(b)) * 100.0
}

fn sort_tokens(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Cluster mentions into a canonical entity map keyed by canonical key.
///
/// Map iteration order is cluster discovery order. The key assignment is
/// memoised, so repeated normalised keys never re-run the fuzzy search.
pub fn canonicalize(
    mentions: &[EntityMention],
    sim_threshold: f64,
) -> IndexMap<String, CanonicalEntity> {
    // Normalised key -> canonical key, permanent once recorded.
    let mut assigned: HashMap<String, String> = HashMap::new();
    // Canonical keys in discovery order, for deterministic fuzzy tie-breaks.
    let mut canonical_keys: Vec<String> = Vec::new();
    let mut clusters: IndexMap<String, CanonicalEntity> = IndexMap::new();

    for mention in mentions {
        let key = normalize_key(&mention.text);
        let canon = match assigned.get(&key) {
            Some(existing) => existing.clone(),
            None => {
                let chosen = best_existing_key(&key, &canonical_keys, sim_threshold)
                    .unwrap_or_else(|| key.clone());
                if chosen == key {
                    canonical_keys.push(key.clone());
                }
                assigned.insert(key.clone(), chosen.clone());
                chosen
            }
        };

        let cluster = clusters.entry(canon).or_insert_with(|| CanonicalEntity {
            canonical: mention.text.clone(),
            kind: mention.kind.clone(),
            mentions: BTreeSet::new(),
            count: 0,
            best_score: -1.0,
        });
        cluster.mentions.insert(mention.text.clone());
        cluster.count += 1;
        // Strictly higher positive score adopts that mention's type; ties
        // keep the earlier value.
        if mention.score > 0.0 && mention.score > cluster.best_score {
            cluster.kind = mention.kind.clone();
            cluster.best_score = mention.score;
        }
    }
    clusters
}

/// Best fuzzy match among existing canonical keys, if it clears the
/// threshold. Strictly-greater comparison keeps the earliest key on ties.
fn best_existing_key(
    key: &str,
    canonical_keys: &[String],
    sim_threshold: f64,
) -> Option<String> {
    let mut best: Option<(f64, &String)> = None;
    for candidate in canonical_keys {
        let score = token_sort_ratio(key, candidate);
        if best.as_ref().map_or(true, |(top, _)| score > *top) {
            best = Some((score, candidate));
        }
    }
    best.filter(|(score, _)| *score >= sim_threshold)
        .map(|(_, candidate)| candidate.clone())
}
