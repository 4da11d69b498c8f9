//! Output of the statistical text classifier.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Prediction;
use crate::errors::CoreError;

/// Named numeric features extracted from a text, ordered by name.
pub type FeatureSnapshot = BTreeMap<String, f64>;

/// Probability-like fabrication score plus the features it was computed from.
///
/// The classifier is binary: class 1 is "fake" with probability
/// `fabrication_probability`, class 0 is "real" with probability
/// `real_probability`. The two always sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScorerResult {
    pub fabrication_probability: f64,
    pub real_probability: f64,
    pub feature_snapshot: FeatureSnapshot,
}

impl ScorerResult {
    /// Build a result from the class-1 probability.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the probability is not a finite
    /// value in `[0, 1]`.
    pub fn try_new(
        fabrication_probability: f64,
        feature_snapshot: FeatureSnapshot,
    ) -> Result<Self, CoreError> {
        if !fabrication_probability.is_finite() || !(0.0..=1.0).contains(&fabrication_probability)
        {
            return Err(CoreError::Validation(format!(
                "fabrication probability {fabrication_probability} is outside [0, 1]"
            )));
        }
        Ok(Self {
            fabrication_probability,
            real_probability: 1.0 - fabrication_probability,
            feature_snapshot,
        })
    }

    /// Probability of class 0 (real).
    #[must_use]
    pub const fn class0_probability(&self) -> f64 {
        self.real_probability
    }

    /// Probability of class 1 (fake).
    #[must_use]
    pub const fn class1_probability(&self) -> f64 {
        self.fabrication_probability
    }

    /// The scorer's confidence in its own top class.
    #[must_use]
    pub fn confidence(&self) -> f64 {
        self.class0_probability().max(self.class1_probability())
    }

    /// The scorer's own class label. Ties resolve to `Real` (class 0).
    #[must_use]
    pub fn label(&self) -> Prediction {
        if self.class1_probability() > self.class0_probability() {
            Prediction::Fake
        } else {
            Prediction::Real
        }
    }
}
