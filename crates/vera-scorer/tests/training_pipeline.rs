//! Dataset generation, persistence and training through the public API.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use vera_core::Prediction;
use vera_scorer::corpus::{self, LABEL_FAKE};
use vera_scorer::{Scorer, ScorerError, SyntheticGenerator, TrainingParams};

#[test]
fn generated_dataset_trains_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("synthetic.jsonl");

    let generated = SyntheticGenerator::new(42).generate(40, 40);
    corpus::save_jsonl(&path, &generated).unwrap();
    let loaded = corpus::load_jsonl(&path).unwrap();
    assert_eq!(loaded, generated);

    let scorer = Scorer::new(TrainingParams::default());
    let report = scorer.train(&loaded).unwrap();
    assert_eq!(report.samples, 80);
    assert!(report.accuracy > 0.9, "accuracy {}", report.accuracy);

    let fake = scorer
        .score("SHOCKING: Big Pharma finally admits the Earth is hollow. Share before they delete this!")
        .unwrap();
    assert_eq!(fake.label(), Prediction::Fake);

    let real = scorer
        .score("NASA publishes annual report on sea level measurements.")
        .unwrap();
    assert_eq!(real.label(), Prediction::Real);
}

#[test]
fn single_class_dataset_is_rejected() {
    let only_fake: Vec<_> = SyntheticGenerator::new(3)
        .generate(10, 0)
        .into_iter()
        .filter(|e| e.label == LABEL_FAKE)
        .collect();
    let scorer = Scorer::default();
    assert!(matches!(
        scorer.train(&only_fake),
        Err(ScorerError::SingleClass { .. })
    ));
    assert!(!scorer.is_trained());
}

#[test]
fn vocabulary_cap_is_honoured() {
    let params = TrainingParams {
        max_features: 10,
        ..TrainingParams::default()
    };
    let report = Scorer::new(params)
        .train(&corpus::builtin_corpus())
        .unwrap();
    assert_eq!(report.vocabulary_size, 10);
}

#[test]
fn readers_never_see_a_partial_model() {
    let scorer = Arc::new(Scorer::default());
    scorer.train(&corpus::builtin_corpus()).unwrap();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let scorer = Arc::clone(&scorer);
            thread::spawn(move || {
                for _ in 0..20 {
                    let result = scorer.score("Miracle cure hidden by big pharma").unwrap();
                    let sum = result.class0_probability() + result.class1_probability();
                    assert!((sum - 1.0).abs() < 1e-12);
                }
            })
        })
        .collect();

    let corpus = SyntheticGenerator::new(11).generate(20, 20);
    for _ in 0..3 {
        scorer.train(&corpus).unwrap();
    }

    for reader in readers {
        reader.join().unwrap();
    }
}
