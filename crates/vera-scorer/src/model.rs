//! Fitted scorer parameters: vectorizer, metadata standardizer and an
//! L2-regularized logistic regression.

use tracing::debug;

use crate::features::{self, METADATA_FEATURES};
use crate::tfidf::{SparseRow, TfidfVectorizer};

const META_DIM: usize = METADATA_FEATURES.len();

/// Gradient descent hyper-parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingParams {
    pub max_features: usize,
    pub epochs: usize,
    pub learning_rate: f64,
    pub l2: f64,
}

impl Default for TrainingParams {
    fn default() -> Self {
        Self {
            max_features: 5000,
            epochs: 400,
            learning_rate: 0.5,
            l2: 0.001,
        }
    }
}

/// Per-column mean and standard deviation of the metadata features.
#[derive(Debug, Clone)]
struct Standardizer {
    mean: [f64; META_DIM],
    std: [f64; META_DIM],
}

impl Standardizer {
    #[allow(clippy::cast_precision_loss)]
    fn fit(rows: &[[f64; META_DIM]]) -> Self {
        let n = rows.len().max(1) as f64;
        let mut mean = [0.0; META_DIM];
        for row in rows {
            for (m, v) in mean.iter_mut().zip(row) {
                *m += v / n;
            }
        }
        let mut std = [0.0; META_DIM];
        for row in rows {
            for ((s, v), m) in std.iter_mut().zip(row).zip(&mean) {
                *s += (v - m).powi(2) / n;
            }
        }
        for s in &mut std {
            // Constant columns standardize to zero instead of dividing by zero.
            *s = if *s > 0.0 { s.sqrt() } else { 1.0 };
        }
        Self { mean, std }
    }

    fn apply(&self, row: &[f64; META_DIM]) -> [f64; META_DIM] {
        let mut out = [0.0; META_DIM];
        for (i, value) in out.iter_mut().enumerate() {
            *value = (row[i] - self.mean[i]) / self.std[i];
        }
        out
    }
}

/// One model input: sparse TF-IDF columns followed by dense metadata.
#[derive(Debug, Clone)]
struct Example {
    text: SparseRow,
    meta: [f64; META_DIM],
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// Everything needed to score a text. Immutable once fitted.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    vectorizer: TfidfVectorizer,
    standardizer: Standardizer,
    weights: Vec<f64>,
    bias: f64,
}

impl TrainedModel {
    /// Fit on `(text, label)` pairs. Labels must already be validated to be
    /// 0 or 1 with both classes present.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn fit(texts: &[&str], labels: &[u8], params: &TrainingParams) -> Self {
        let cleaned: Vec<String> = texts.iter().map(|t| features::clean_text(t)).collect();
        let vectorizer = TfidfVectorizer::fit(&cleaned, params.max_features);
        let raw_meta: Vec<[f64; META_DIM]> = cleaned
            .iter()
            .map(|t| features::metadata_vector(t))
            .collect();
        let standardizer = Standardizer::fit(&raw_meta);

        let examples: Vec<Example> = cleaned
            .iter()
            .zip(&raw_meta)
            .map(|(text, meta)| Example {
                text: vectorizer.transform(text),
                meta: standardizer.apply(meta),
            })
            .collect();

        let dim = vectorizer.len() + META_DIM;
        let mut model = Self {
            vectorizer,
            standardizer,
            weights: vec![0.0; dim],
            bias: 0.0,
        };

        let n = examples.len() as f64;
        let mut gradient = vec![0.0; dim];
        for _ in 0..params.epochs {
            gradient.iter_mut().for_each(|g| *g = 0.0);
            let mut bias_gradient = 0.0;
            for (example, label) in examples.iter().zip(labels) {
                let error = sigmoid(model.logit(example)) - f64::from(*label);
                for (column, weight) in &example.text {
                    gradient[*column] += error * weight;
                }
                let offset = model.vectorizer.len();
                for (j, value) in example.meta.iter().enumerate() {
                    gradient[offset + j] += error * value;
                }
                bias_gradient += error;
            }
            for (w, g) in model.weights.iter_mut().zip(&gradient) {
                *w -= params.learning_rate * (g / n + params.l2 * *w);
            }
            model.bias -= params.learning_rate * bias_gradient / n;
        }

        debug!(
            vocabulary = model.vectorizer.len(),
            samples = examples.len(),
            epochs = params.epochs,
            "scorer fitted"
        );
        model
    }

    fn logit(&self, example: &Example) -> f64 {
        let offset = self.vectorizer.len();
        let text: f64 = example
            .text
            .iter()
            .map(|(column, value)| self.weights[*column] * value)
            .sum();
        let meta: f64 = example
            .meta
            .iter()
            .enumerate()
            .map(|(j, value)| self.weights[offset + j] * value)
            .sum();
        self.bias + text + meta
    }

    fn example(&self, cleaned: &str) -> Example {
        Example {
            text: self.vectorizer.transform(cleaned),
            meta: self
                .standardizer
                .apply(&features::metadata_vector(cleaned)),
        }
    }

    /// Class-1 (fake) probability of a raw text.
    #[must_use]
    pub fn fabrication_probability(&self, text: &str) -> f64 {
        let cleaned = features::clean_text(text);
        sigmoid(self.logit(&self.example(&cleaned))).clamp(0.0, 1.0)
    }

    /// Vocabulary size of the fitted vectorizer.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.len()
    }
}
