//! Speaker-label parsing into structured metadata.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Structured speaker metadata derived from the raw label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeakerMeta {
    pub name: String,
    pub constituency: Option<String>,
    pub party: Option<String>,
}

/// Whole-label shape: `name [(group1)] [(group2)]`.
static SPEAKER_META: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)(?:\s*\(([^)]+)\))?(?:\s*\(([^)]+)\))?$").expect("valid regex"));

/// Party names as they appear in Hansard speaker labels.
const PARTY_NAMES: &[&str] = &[
    "Labour",
    "Co-op",
    "Conservative",
    "Liberal Democrat",
    "SNP",
    "Scottish National Party",
    "DUP",
    "Green",
    "Plaid Cymru",
    "Reform",
    "Independent",
    "Alliance",
    "Crossbench",
];

/// A single parenthetical group is a party when every `/`-joined part is a
/// known party name (e.g. "Labour/Co-op"); otherwise it is a constituency.
/// Ministerial titles carry no constituency, so this beats positional guessing.
fn is_party(group: &str) -> bool {
    group.split('/').all(|part| {
        let part = part.trim();
        !part.is_empty() && PARTY_NAMES.iter().any(|name| name.eq_ignore_ascii_case(part))
    })
}

/// Parse a raw speaker label into name, constituency, and party fields.
///
/// Two trailing groups read as `(constituency) (party)`. A lone group is
/// classified by the party allow-list. An unmatchable label (defensive; the
/// speech segmenter should never produce one) keeps the raw text as the name.
pub fn parse(speaker_raw: &str) -> SpeakerMeta {
    let Some(caps) = SPEAKER_META.captures(speaker_raw) else {
        return SpeakerMeta {
            name: speaker_raw.to_string(),
            constituency: None,
            party: None,
        };
    };

    let name = caps
        .get(1)
        .map_or_else(|| speaker_raw.to_string(), |m| m.as_str().trim().to_string());
    let group = |idx: usize| {
        caps.get(idx)
            .map(|m| m.as_str().trim().to_string())
            .filter(|text| !text.is_empty())
    };

    match (group(2), group(3)) {
        (Some(constituency), Some(party)) => SpeakerMeta {
            name,
            constituency: Some(constituency),
            party: Some(party),
        },
        (Some(only), None) if is_party(&only) => SpeakerMeta {
            name,
            constituency: None,
            party: Some(only),
        },
        (Some(only), None) => SpeakerMeta {
            name,
            constituency: Some(only),
            party: None,
        },
        _ => SpeakerMeta {
            name,
            constituency: None,
            party: None,
        },
    }
}
