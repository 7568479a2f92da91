use hansard_extract::nlp::{
    canonical::{canonicalize, normalize_key, token_sort_ratio, DEFAULT_SIM_THRESHOLD},
    entities::EntityMention,
};
use proptest::prelude::*;

fn mention(text: &str, kind: &str, score: f64) -> EntityMention {
    EntityMention {
        text: text.to_string(),
        kind: kind.to_string(),
        score,
    }
}

#[test]
fn normalize_key_strips_and_lowercases() {
    assert_eq!(normalize_key("  United  Kingdom! "), "united kingdom");
    assert_eq!(normalize_key("N.H.S."), "n.h.s.");
    assert_eq!(normalize_key("M&S / Ltd"), "m&s / ltd");
}

#[test]
fn token_sort_ratio_ignores_token_order() {
    let score = token_sort_ratio("kingdom united", "united kingdom");
    assert!((score - 100.0).abs() < f64::EPSILON);
}

#[test]
fn single_mention_forms_one_cluster() {
    let mentions = vec![mention("United Kingdom", "LOC", 0.99)];
    let map = canonicalize(&mentions, DEFAULT_SIM_THRESHOLD);
    assert_eq!(map.len(), 1);
    let cluster = &map["united kingdom"];
    assert_eq!(cluster.canonical, "United Kingdom");
    assert_eq!(cluster.count, 1);
    assert_eq!(
        cluster.mentions.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["United Kingdom"]
    );
}

#[test]
fn identical_keys_share_a_cluster_regardless_of_threshold() {
    let mentions = vec![mention("NHS", "ORG", 0.9), mention("NHS", "ORG", 0.8)];
    // A threshold no fuzzy score can reach still merges exact key hits.
    let map = canonicalize(&mentions, 150.0);
    assert_eq!(map.len(), 1);
    assert_eq!(map["nhs"].count, 2);
}

#[test]
fn strictly_higher_score_overwrites_cluster_type() {
    let mentions = vec![
        mention("NHS", "ORG", 0.9),
        mention("N.H.S.", "MISC", 0.95),
    ];
    // Low threshold so the fuzzy match between the two keys succeeds.
    let map = canonicalize(&mentions, 40.0);
    assert_eq!(map.len(), 1);
    let cluster = &map["nhs"];
    assert_eq!(cluster.kind, "MISC");
    assert_eq!(cluster.canonical, "NHS");
    assert_eq!(cluster.count, 2);
    assert!(cluster.mentions.contains("N.H.S."));
}

#[test]
fn equal_score_keeps_the_earlier_type() {
    let mentions = vec![
        mention("NHS", "ORG", 0.9),
        mention("NHS", "MISC", 0.9),
    ];
    let map = canonicalize(&mentions, DEFAULT_SIM_THRESHOLD);
    assert_eq!(map["nhs"].kind, "ORG");
}

#[test]
fn canonical_display_is_first_seen_surface_form() {
    let mentions = vec![
        mention("United Kingdom", "LOC", 0.5),
        mention("united kingdom", "LOC", 0.99),
    ];
    let map = canonicalize(&mentions, DEFAULT_SIM_THRESHOLD);
    assert_eq!(map["united kingdom"].canonical, "United Kingdom");
}

#[test]
fn canonicalization_is_deterministic() {
    let mentions = vec![
        mention("United Kingdom", "LOC", 0.9),
        mention("Kingdom United", "LOC", 0.8),
        mention("NHS", "ORG", 0.7),
    ];
    let first = canonicalize(&mentions, DEFAULT_SIM_THRESHOLD);
    let second = canonicalize(&mentions, DEFAULT_SIM_THRESHOLD);
    assert_eq!(first, second);
    let first_keys: Vec<_> = first.keys().collect();
    let second_keys: Vec<_> = second.keys().collect();
    assert_eq!(first_keys, second_keys);
}

proptest! {
    // Cluster boundaries may move under permutation (greedy, order-dependent
    // pass), but no mention is ever lost or double-counted.
    #[test]
    fn mention_count_is_conserved(texts in proptest::collection::vec("[a-z]{1,6}( [a-z]{1,6})?", 0..24)) {
        let mentions: Vec<EntityMention> = texts
            .iter()
            .map(|text| mention(text, "ORG", 0.5))
            .collect();
        let reversed: Vec<EntityMention> = mentions.iter().rev().cloned().collect();

        let forward: usize = canonicalize(&mentions, DEFAULT_SIM_THRESHOLD)
            .values()
            .map(|cluster| cluster.count)
            .sum();
        let backward: usize = canonicalize(&reversed, DEFAULT_SIM_THRESHOLD)
            .values()
            .map(|cluster| cluster.count)
            .sum();

        prop_assert_eq!(forward, mentions.len());
        prop_assert_eq!(backward, mentions.len());
    }
}
