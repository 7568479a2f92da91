//! Speaker-turn detection within one debate section.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// One contiguous utterance by a single identified speaker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechTurn {
    /// Unparsed speaker label as it appeared before the colon.
    pub speaker_raw: String,
    /// Paragraph-collapsed speech body.
    pub speech_text: String,
}

/// Start-of-line speaker label: a capitalised name, up to two parenthetical
/// groups, then a colon and a space.
static SPEAKER_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([A-Z][A-Za-z .’'\-]+(?:\([^)]+\))?(?:\s*\([A-Za-z/ \-]+\))?)\s*:\s")
        .expect("valid regex")
});

static PARA_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));
static MULTI_WS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

/// Split a section body into ordered speech turns.
///
/// Text before the first speaker line is discarded; a section with no
/// speaker lines at all (procedural notices) contributes no speeches.
pub fn segment(section_text: &str) -> Vec<SpeechTurn> {
    struct Hit {
        start: usize,
        body_start: usize,
        speaker_raw: String,
    }

    let hits: Vec<Hit> = SPEAKER_LINE
        .captures_iter(section_text)
        .map(|caps| {
            let whole = caps.get(0).expect("match");
            let name = caps.get(1).expect("name group");
            Hit {
                start: whole.start(),
                body_start: whole.end(),
                speaker_raw: name.as_str().trim().to_string(),
            }
        })
        .collect();

    if hits.is_empty() {
        debug!("no speaker lines in section; contributing no speeches");
        return Vec::new();
    }

    let mut turns = Vec::with_capacity(hits.len());
    for (idx, hit) in hits.iter().enumerate() {
        let end = hits
            .get(idx + 1)
            .map_or(section_text.len(), |next| next.start);
        turns.push(SpeechTurn {
            speaker_raw: hit.speaker_raw.clone(),
            speech_text: collapse_paragraphs(&section_text[hit.body_start..end]),
        });
    }
    turns
}

/// Collapse a speech body to one line: blank-line runs become a paragraph
/// marker, remaining newlines become spaces, whitespace runs collapse.
pub fn collapse_paragraphs(text: &str) -> String {
    let text = PARA_BREAK.replace_all(text, " <PARA> ");
    let text = text.replace('\n', " ");
    MULTI_WS.replace_all(&text, " ").trim().to_string()
}
