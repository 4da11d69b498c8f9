//! Lexicon-based sentiment.
//!
//! Each lexicon entry carries a polarity in [-1, 1] and a subjectivity in
//! [0, 1]. A text's sentiment is the mean over matched words after modifier
//! handling.

/// `(word, polarity, subjectivity)`.
const LEXICON: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("beneficial", 0.5, 0.5),
    ("best", 1.0, 0.3),
    ("biggest", 0.0, 0.5),
    ("brilliant", 0.9, 1.0),
    ("crisis", -0.4, 0.6),
    ("dangerous", -0.6, 0.9),
    ("deadly", -0.2, 0.4),
    ("effective", 0.6, 0.8),
    ("enormous", 0.0, 0.8),
    ("evil", -1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("false", -0.4, 0.6),
    ("fantastic", 0.4, 0.9),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("harmful", -0.5, 0.7),
    ("hidden", -0.17, 0.33),
    ("hope", 0.3, 0.5),
    ("horrible", -1.0, 1.0),
    ("important", 0.4, 1.0),
    ("improve", 0.3, 0.4),
    ("incredible", 0.9, 0.9),
    ("innovative", 0.5, 0.75),
    ("lie", -0.5, 0.8),
    ("massive", 0.0, 1.0),
    ("miracle", 0.5, 0.8),
    ("new", 0.14, 0.45),
    ("outrageous", -0.6, 0.9),
    ("poor", -0.4, 0.6),
    ("positive", 0.23, 0.55),
    ("promising", 0.5, 0.6),
    ("real", 0.2, 0.3),
    ("safe", 0.5, 0.5),
    ("scary", -0.5, 1.0),
    ("secret", -0.4, 0.6),
    ("severe", -0.5, 0.7),
    ("shocking", -1.0, 1.0),
    ("significant", 0.38, 0.88),
    ("simple", 0.0, 0.36),
    ("successful", 0.75, 0.95),
    ("successfully", 0.75, 0.95),
    ("terrible", -1.0, 1.0),
    ("true", 0.35, 0.65),
    ("unbelievable", -0.5, 1.0),
    ("undeniable", 0.5, 0.9),
    ("urgent", -0.2, 0.6),
    ("useful", 0.3, 0.1),
    ("warm", 0.6, 0.6),
    ("wonderful", 1.0, 1.0),
    ("worst", -1.0, 1.0),
    ("wrong", -0.5, 0.9),
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "dont", "doesnt", "didnt", "isnt", "wasnt", "arent", "cant", "wont",
    "don't", "doesn't", "didn't", "isn't", "wasn't", "aren't", "can't", "won't",
];

const INTENSIFIERS: &[&str] = &[
    "very",
    "extremely",
    "really",
    "absolutely",
    "incredibly",
    "totally",
    "highly",
    "completely",
];

const INTENSIFIER_FACTOR: f64 = 1.3;

/// Polarity and subjectivity of a text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sentiment {
    pub polarity: f64,
    pub subjectivity: f64,
}

fn lookup(word: &str) -> Option<(f64, f64)> {
    LEXICON
        .binary_search_by(|(entry, _, _)| entry.cmp(&word))
        .ok()
        .map(|i| (LEXICON[i].1, LEXICON[i].2))
}

fn is_negator(word: &str) -> bool {
    NEGATORS.contains(&word) || word.ends_with("n't")
}

/// Score `text` against the built-in lexicon.
///
/// Only the word immediately before a lexicon hit is inspected for a negator
/// or intensifier. Texts with no lexicon hits score `0.0 / 0.0`.
#[must_use]
pub fn analyze(text: &str) -> Sentiment {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut hits = 0_u32;

    for (i, word) in words.iter().enumerate() {
        let Some((mut polarity, subjectivity)) = lookup(word) else {
            continue;
        };
        if let Some(previous) = i.checked_sub(1).map(|j| words[j].as_str()) {
            if is_negator(previous) {
                polarity *= -0.5;
            } else if INTENSIFIERS.contains(&previous) {
                polarity = (polarity * INTENSIFIER_FACTOR).clamp(-1.0, 1.0);
            }
        }
        polarity_sum += polarity;
        subjectivity_sum += subjectivity;
        hits += 1;
    }

    if hits == 0 {
        return Sentiment::default();
    }
    let n = f64::from(hits);
    Sentiment {
        polarity: (polarity_sum / n).clamp(-1.0, 1.0),
        subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_is_sorted_for_binary_search() {
        assert!(LEXICON.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn no_hits_is_neutral() {
        assert_eq!(analyze("the cat sat on the mat"), Sentiment::default());
        assert_eq!(analyze(""), Sentiment::default());
    }

    #[test]
    fn mean_over_hits() {
        let s = analyze("good and bad");
        assert!((s.polarity - 0.0).abs() < 1e-9);
        assert!((s.subjectivity - (0.6 + 0.67) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn negator_flips_and_halves() {
        let s = analyze("this is not good");
        assert!((s.polarity - (-0.35)).abs() < 1e-9);
    }

    #[test]
    fn contraction_counts_as_negator() {
        let s = analyze("it isn't good");
        assert!((s.polarity - (-0.35)).abs() < 1e-9);
    }

    #[test]
    fn intensifier_scales_and_clamps() {
        let s = analyze("very good");
        assert!((s.polarity - 0.91).abs() < 1e-9);
        let clamped = analyze("extremely excellent");
        assert!((clamped.polarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_hold() {
        let s = analyze("shocking terrible awful very worst never best");
        assert!((-1.0..=1.0).contains(&s.polarity));
        assert!((0.0..=1.0).contains(&s.subjectivity));
    }
}
