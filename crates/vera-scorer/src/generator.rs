//! Seeded synthetic corpus generator.
//!
//! Produces template-based sensational (fake) and sober (real) headlines.
//! Output is deterministic for a given seed.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::corpus::{LABEL_FAKE, LABEL_REAL, LabeledText};

const FAKE_TEMPLATES: &[&str] = &[
    "BREAKING: {actor} caught trying to {scheme}! {hook}",
    "SHOCKING: {actor} finally admits {secret}. {hook}",
    "EXPOSED: {actor} linked to {ailment} outbreak! {remedy}",
    "URGENT: {actor} hid the cure for {ailment} for years. {remedy}",
    "THEY LIED: {secret} and {actor} knew all along! {hook}",
    "MIRACLE: this trick beats {ailment} overnight and {actor} hates it! {remedy}",
    "WAKE UP: {actor} plans to {scheme}. {hook}",
];

const FAKE_ACTORS: &[&str] = &[
    "Big Pharma",
    "The Deep State",
    "Global Elites",
    "Mainstream Media",
    "Tech Giants",
    "Secret Labs",
    "The Government",
    "5G Towers",
    "Chemtrail Pilots",
];

const FAKE_SCHEMES: &[&str] = &[
    "control the weather",
    "read your thoughts",
    "replace the moon",
    "ban all vegetables",
    "microchip every citizen",
    "erase history books",
];

const FAKE_SECRETS: &[&str] = &[
    "the Earth is hollow",
    "dinosaurs never existed",
    "gravity is optional",
    "the moon landing was staged",
    "birds are surveillance drones",
];

const FAKE_AILMENTS: &[&str] = &[
    "cancer",
    "diabetes",
    "memory loss",
    "the flu",
    "baldness",
    "heart disease",
];

const FAKE_HOOKS: &[&str] = &[
    "Share before they delete this!",
    "The truth they never wanted out!",
    "Everything you were told is a lie!",
    "Doctors are furious!",
    "Nobody is talking about this!",
];

const FAKE_REMEDIES: &[&str] = &[
    "One kitchen spice fixes it instantly!",
    "A forbidden herbal tea is the answer!",
    "Drink this every morning and never get sick!",
    "Banned ancient remedy works in minutes!",
];

const REAL_TEMPLATES: &[&str] = &[
    "{agency} publishes annual report on {topic}.",
    "Researchers at {institution} report progress in {topic} after a multi-year study.",
    "Peer-reviewed study in {journal} examines {topic} across several countries.",
    "{agency} updates guidance on {topic} following new data.",
    "{institution} team releases open dataset on {topic} for other scientists.",
    "Clinical trial coordinated by {institution} finds modest benefit for {condition} patients.",
    "{agency} confirms schedule for next phase of {topic} monitoring.",
];

const REAL_AGENCIES: &[&str] = &[
    "The World Health Organization",
    "NASA",
    "The European Space Agency",
    "The National Weather Service",
    "The Centers for Disease Control",
    "The United Nations",
    "The National Science Foundation",
];

const REAL_INSTITUTIONS: &[&str] = &[
    "Stanford University",
    "Oxford University",
    "MIT",
    "Johns Hopkins University",
    "University of Tokyo",
    "ETH Zurich",
];

const REAL_JOURNALS: &[&str] = &["Nature", "Science", "The Lancet", "Cell", "JAMA"];

const REAL_TOPICS: &[&str] = &[
    "ocean temperatures",
    "vaccine coverage",
    "air quality",
    "renewable energy adoption",
    "antibiotic resistance",
    "crop yields",
    "sea level measurements",
];

const REAL_CONDITIONS: &[&str] = &[
    "hypertension",
    "asthma",
    "type 2 diabetes",
    "migraine",
    "arthritis",
];

fn pick(rng: &mut StdRng, items: &[&'static str]) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

fn fill(template: &str, slots: &[(&str, &str)]) -> String {
    slots
        .iter()
        .fold(template.to_string(), |text, (slot, value)| {
            text.replace(slot, value)
        })
}

/// Deterministic synthetic corpus generator.
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn fake_headline(&mut self) -> String {
        let template = pick(&mut self.rng, FAKE_TEMPLATES);
        let slots = [
            ("{actor}", pick(&mut self.rng, FAKE_ACTORS)),
            ("{scheme}", pick(&mut self.rng, FAKE_SCHEMES)),
            ("{secret}", pick(&mut self.rng, FAKE_SECRETS)),
            ("{ailment}", pick(&mut self.rng, FAKE_AILMENTS)),
            ("{hook}", pick(&mut self.rng, FAKE_HOOKS)),
            ("{remedy}", pick(&mut self.rng, FAKE_REMEDIES)),
        ];
        fill(template, &slots)
    }

    fn real_headline(&mut self) -> String {
        let template = pick(&mut self.rng, REAL_TEMPLATES);
        let slots = [
            ("{agency}", pick(&mut self.rng, REAL_AGENCIES)),
            ("{institution}", pick(&mut self.rng, REAL_INSTITUTIONS)),
            ("{journal}", pick(&mut self.rng, REAL_JOURNALS)),
            ("{topic}", pick(&mut self.rng, REAL_TOPICS)),
            ("{condition}", pick(&mut self.rng, REAL_CONDITIONS)),
        ];
        fill(template, &slots)
    }

    /// Generate `fake` fabricated and `real` genuine examples, shuffled.
    pub fn generate(&mut self, fake: usize, real: usize) -> Vec<LabeledText> {
        let mut corpus: Vec<LabeledText> = Vec::with_capacity(fake + real);
        for _ in 0..fake {
            let text = self.fake_headline();
            corpus.push(LabeledText::new(text, LABEL_FAKE));
        }
        for _ in 0..real {
            let text = self.real_headline();
            corpus.push(LabeledText::new(text, LABEL_REAL));
        }
        corpus.shuffle(&mut self.rng);
        corpus
    }
}
