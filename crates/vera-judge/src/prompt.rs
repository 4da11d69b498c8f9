//! Prompt text sent to the judge.

pub const SYSTEM_PROMPT: &str = "You are an expert fact-checker and fake news detector. \
Analyze the given news article and provide a detailed assessment of its credibility.";

const CHECKLIST: [&str; 10] = [
    "Sensational language and emotional manipulation",
    "Lack of credible sources or citations",
    "Conspiracy theory patterns",
    "Miracle cure claims",
    "Authority figure manipulation",
    "Urgency and fear tactics",
    "Contradictions with established facts",
    "Professional journalistic standards",
    "Source credibility",
    "Factual accuracy indicators",
];

/// User message for one article. `article` must already be truncated.
#[must_use]
pub fn analysis_prompt(article: &str) -> String {
    let checklist: String = CHECKLIST
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {item}\n", i + 1))
        .collect();

    format!(
        r#"Please analyze the following news article for potential fake news indicators. Provide your assessment in the following JSON format:

{{
    "credibility_score": 0-100,
    "is_likely_fake": true/false,
    "confidence": 0-100,
    "red_flags": ["list", "of", "red", "flags"],
    "green_flags": ["list", "of", "positive", "indicators"],
    "reasoning": "detailed explanation",
    "recommendations": "what to check or verify"
}}

News Article:
{article}

Focus on:
{checklist}
Respond only with the JSON analysis.
"#
    )
}
