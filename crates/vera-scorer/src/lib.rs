//! # vera-scorer
//!
//! Statistical fabrication scorer for Vera.
//!
//! Texts are cleaned (lower-case ASCII letters only), vectorized with TF-IDF,
//! joined with standardized metadata features (length, sentiment, punctuation
//! counts, ...) and classified by an L2-regularized logistic regression. The
//! model is trained by deterministic full-batch gradient descent, so the same
//! corpus always yields the same parameters.
//!
//! ## Concurrency
//!
//! [`Scorer`] is shared behind `&self`. Training runs under a gate so only
//! one fit happens at a time; the fitted [`TrainedModel`] is published as a
//! whole `Arc` under a write lock. Readers clone the `Arc` and never observe
//! a partially trained model.
//!
//! ```ignore
//! let scorer = Scorer::new(TrainingParams::default());
//! scorer.ensure_trained(|| Ok(corpus::builtin_corpus()))?;
//! let result = scorer.score("BREAKING: miracle cure hidden for years!")?;
//! ```

pub mod corpus;
pub mod error;
pub mod features;
pub mod generator;
pub mod model;
pub mod sentiment;
pub mod tfidf;

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use serde::Serialize;
use tracing::{debug, info};
use vera_core::ScorerResult;

pub use corpus::LabeledText;
pub use error::ScorerError;
pub use generator::SyntheticGenerator;
pub use model::{TrainedModel, TrainingParams};

/// Outcome of one training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingReport {
    /// Accuracy on the training corpus itself.
    pub accuracy: f64,
    pub samples: usize,
    pub vocabulary_size: usize,
}

/// Owns the fitted parameters and serializes training.
pub struct Scorer {
    params: TrainingParams,
    model: RwLock<Option<Arc<TrainedModel>>>,
    training_gate: Mutex<()>,
}

impl Scorer {
    #[must_use]
    pub fn new(params: TrainingParams) -> Self {
        Self {
            params,
            model: RwLock::new(None),
            training_gate: Mutex::new(()),
        }
    }

    /// Whether a model has been published.
    pub fn is_trained(&self) -> bool {
        self.current().is_some()
    }

    fn current(&self) -> Option<Arc<TrainedModel>> {
        self.model
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn fit_and_publish(&self, corpus: &[LabeledText]) -> Result<TrainingReport, ScorerError> {
        corpus::validate(corpus)?;
        let texts: Vec<&str> = corpus.iter().map(|e| e.text.as_str()).collect();
        let labels: Vec<u8> = corpus.iter().map(|e| e.label).collect();
        let model = TrainedModel::fit(&texts, &labels, &self.params);

        let correct = texts
            .iter()
            .zip(&labels)
            .filter(|(text, label)| {
                let predicted = u8::from(model.fabrication_probability(text) > 0.5);
                predicted == **label
            })
            .count();
        #[allow(clippy::cast_precision_loss)]
        let report = TrainingReport {
            accuracy: correct as f64 / corpus.len() as f64,
            samples: corpus.len(),
            vocabulary_size: model.vocabulary_size(),
        };

        *self.model.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(model));
        info!(
            accuracy = report.accuracy,
            samples = report.samples,
            vocabulary = report.vocabulary_size,
            "scorer trained"
        );
        Ok(report)
    }

    /// Train on `corpus`, replacing any previous model.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError::EmptyCorpus`], [`ScorerError::SingleClass`] or
    /// [`ScorerError::InvalidLabel`] for an untrainable corpus. The previous
    /// model, if any, stays in place.
    pub fn train(&self, corpus: &[LabeledText]) -> Result<TrainingReport, ScorerError> {
        let _gate = self
            .training_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.fit_and_publish(corpus)
    }

    /// Train once if no model exists yet. `load` is only invoked when a fit
    /// is actually needed; concurrent callers wait on the gate and then see
    /// the published model.
    ///
    /// Returns `Some(report)` when this call trained, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Propagates errors from `load` and from training.
    pub fn ensure_trained<F>(&self, load: F) -> Result<Option<TrainingReport>, ScorerError>
    where
        F: FnOnce() -> Result<Vec<LabeledText>, ScorerError>,
    {
        let _gate = self
            .training_gate
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if self.is_trained() {
            debug!("scorer already trained");
            return Ok(None);
        }
        let corpus = load()?;
        self.fit_and_publish(&corpus).map(Some)
    }

    /// Score one text.
    ///
    /// # Errors
    ///
    /// Returns [`ScorerError::NotTrained`] before the first successful
    /// training run.
    pub fn score(&self, text: &str) -> Result<ScorerResult, ScorerError> {
        let model = self.current().ok_or(ScorerError::NotTrained)?;
        let probability = model.fabrication_probability(text);
        let snapshot = features::metadata_snapshot(&features::clean_text(text));
        Ok(ScorerResult::try_new(probability, snapshot)?)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(TrainingParams::default())
    }
}
