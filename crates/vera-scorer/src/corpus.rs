//! Labelled training examples: the built-in seed corpus and JSONL datasets.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScorerError;

/// Label of a real (class 0) example.
pub const LABEL_REAL: u8 = 0;
/// Label of a fabricated (class 1) example.
pub const LABEL_FAKE: u8 = 1;

/// One training example. Serialized as one JSONL line
/// `{"text": "...", "label": 0|1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledText {
    pub text: String,
    pub label: u8,
}

impl LabeledText {
    pub fn new(text: impl Into<String>, label: u8) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

const SEED_FAKE: [&str; 5] = [
    "BREAKING: Scientists discover that drinking hot water with lemon cures all diseases instantly! This miracle cure has been hidden by big pharma for years.",
    "ALIENS CONFIRMED: Government admits to covering up extraterrestrial contact for decades. Shocking new evidence reveals everything.",
    "5G CAUSES COVID: New study proves that 5G networks are responsible for the coronavirus pandemic. Experts say radiation is the real culprit.",
    "FLAT EARTH PROVEN: NASA finally admits the Earth is flat after pressure from social media. All space photos were CGI.",
    "TIME TRAVEL ACHIEVED: Scientists successfully send a cat back to 1920. The cat returned with a message from the past.",
];

const SEED_REAL: [&str; 10] = [
    "NASA's Perseverance rover successfully landed on Mars, beginning its mission to search for signs of ancient life.",
    "The World Health Organization reports that COVID-19 vaccines have been proven safe and effective in clinical trials.",
    "Scientists discover new species of deep-sea creatures in the Pacific Ocean during research expedition.",
    "Global temperatures continue to rise, with 2023 being one of the warmest years on record according to climate data.",
    "Researchers develop new renewable energy technology that could reduce carbon emissions by 50%.",
    "Study shows that regular exercise can improve mental health and reduce symptoms of depression.",
    "New cancer treatment shows promising results in early clinical trials, offering hope for patients.",
    "International space station celebrates 20 years of continuous human presence in space.",
    "Renewable energy sources now provide over 30% of global electricity generation.",
    "Scientists develop biodegradable plastic alternative made from plant materials.",
];

/// The 15-example seed corpus used when no dataset is configured.
#[must_use]
pub fn builtin_corpus() -> Vec<LabeledText> {
    SEED_FAKE
        .iter()
        .map(|text| LabeledText::new(*text, LABEL_FAKE))
        .chain(SEED_REAL.iter().map(|text| LabeledText::new(*text, LABEL_REAL)))
        .collect()
}

/// Check that a corpus is trainable: non-empty, binary labels, both present.
///
/// # Errors
///
/// [`ScorerError::EmptyCorpus`], [`ScorerError::InvalidLabel`] or
/// [`ScorerError::SingleClass`].
pub fn validate(corpus: &[LabeledText]) -> Result<(), ScorerError> {
    let Some(first) = corpus.first() else {
        return Err(ScorerError::EmptyCorpus);
    };
    if let Some((index, example)) = corpus
        .iter()
        .enumerate()
        .find(|(_, e)| e.label != LABEL_REAL && e.label != LABEL_FAKE)
    {
        return Err(ScorerError::InvalidLabel {
            index,
            label: example.label,
        });
    }
    if corpus.iter().all(|e| e.label == first.label) {
        return Err(ScorerError::SingleClass { label: first.label });
    }
    Ok(())
}

/// Read a JSONL dataset.
///
/// # Errors
///
/// [`ScorerError::Dataset`] if the file cannot be opened or a line is not a
/// valid example.
pub fn load_jsonl(path: &Path) -> Result<Vec<LabeledText>, ScorerError> {
    let wrap = |source| ScorerError::Dataset {
        path: path.display().to_string(),
        source,
    };
    serde_jsonlines::json_lines(path)
        .map_err(wrap)?
        .collect::<std::io::Result<Vec<LabeledText>>>()
        .map_err(wrap)
}

/// Write a JSONL dataset, replacing any existing file.
///
/// # Errors
///
/// [`ScorerError::Dataset`] on any I/O failure.
pub fn save_jsonl(path: &Path, corpus: &[LabeledText]) -> Result<(), ScorerError> {
    serde_jsonlines::write_json_lines(path, corpus).map_err(|source| ScorerError::Dataset {
        path: path.display().to_string(),
        source,
    })
}
