//! Pipeline orchestration: raw text to enriched debates to JSON.

use std::{fs, path::Path, sync::Arc};

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    config::Settings,
    data::{normalize, pdf},
    error::ExtractError,
    nlp::{
        canonical::{self, CanonicalEntity},
        entities::{self, EntityMention},
        ner::EntityRecognizer,
        relations::{self, RelationGenerator, RelationTriple},
    },
    segment::{
        debates::{self, DebateSection},
        speaker::{self, SpeakerMeta},
        speeches::{self, SpeechTurn},
    },
};

/// One speech with parsed speaker metadata, entities, and relations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedSpeech {
    pub speaker: SpeakerMeta,
    pub speech_text: String,
    pub entities: Vec<EntityMention>,
    pub relations: Vec<RelationTriple>,
}

/// One debate with its speeches and canonicalised entity map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDebate {
    pub title: String,
    pub speeches: Vec<EnrichedSpeech>,
    pub entity_map: IndexMap<String, CanonicalEntity>,
}

/// Final output for one document run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub debates: Vec<EnrichedDebate>,
}

/// Drives segmentation, per-speech enrichment, and canonicalisation.
///
/// Collaborators are constructed once and passed in by handle; there is no
/// process-wide model state. A missing relation generator selects the
/// pattern-only fallback inside the relation adapter.
pub struct Pipeline {
    recognizer: Arc<dyn EntityRecognizer>,
    generator: Option<Arc<dyn RelationGenerator>>,
    settings: Settings,
}

impl Pipeline {
    pub fn new(
        recognizer: Arc<dyn EntityRecognizer>,
        generator: Option<Arc<dyn RelationGenerator>>,
        settings: Settings,
    ) -> Self {
        Self {
            recognizer,
            generator,
            settings,
        }
    }

    /// Run the full pipeline over pre-extracted text.
    pub fn run(&self, raw_text: &str) -> ExtractionResult {
        let sections = debates::segment(raw_text);
        info!(debates = sections.len(), "segmented document");
        let debates = sections
            .into_iter()
            .map(|section| self.enrich_debate(section))
            .collect();
        ExtractionResult { debates }
    }

    /// External contract: extract a PDF, run the pipeline, write pretty JSON.
    pub fn process_document(&self, pdf_path: &Path, out_path: &Path) -> Result<(), ExtractError> {
        let pages = pdf::extract_pages(pdf_path)?;
        let raw_text = normalize::normalize_pages(&pages);
        let result = self.run(&raw_text);
        write_json(&result, out_path)
    }

    fn enrich_debate(&self, section: DebateSection) -> EnrichedDebate {
        let turns = speeches::segment(&section.text);
        let mut all_mentions: Vec<EntityMention> = Vec::new();
        let mut enriched = Vec::with_capacity(turns.len());
        for turn in turns {
            let speech = self.enrich_speech(&section.title, turn);
            all_mentions.extend(speech.entities.iter().cloned());
            enriched.push(speech);
        }
        let entity_map = canonical::canonicalize(&all_mentions, self.settings.sim_threshold);
        EnrichedDebate {
            title: section.title,
            speeches: enriched,
            entity_map,
        }
    }

    /// Enrich one speech turn. A recogniser failure is isolated to this
    /// speech: it degrades to empty entities rather than aborting the run.
    fn enrich_speech(&self, debate_title: &str, turn: SpeechTurn) -> EnrichedSpeech {
        let meta = speaker::parse(&turn.speaker_raw);

        let entities = if turn.speech_text.is_empty() {
            Vec::new()
        } else {
            match self.recognizer.recognize(&turn.speech_text) {
                Ok(raw) => entities::clean(&raw),
                Err(error) => {
                    warn!(
                        debate = debate_title,
                        speaker = %meta.name,
                        %error,
                        "entity recognition failed; continuing with empty entities"
                    );
                    Vec::new()
                }
            }
        };

        let relations = relations::extract(
            self.generator.as_deref(),
            &turn.speech_text,
            self.settings.max_chunk_len,
        );

        EnrichedSpeech {
            speaker: meta,
            speech_text: turn.speech_text,
            entities,
            relations,
        }
    }
}

/// Persist the result as 2-space-indented UTF-8 JSON, non-ASCII preserved.
pub fn write_json(result: &ExtractionResult, path: &Path) -> Result<(), ExtractError> {
    let payload = serde_json::to_string_pretty(result)?;
    fs::write(path, payload).map_err(|source| ExtractError::Persist {
        path: path.to_path_buf(),
        source,
    })
}
