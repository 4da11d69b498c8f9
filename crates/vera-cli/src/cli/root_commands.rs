use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Classify a news text as credible or fabricated.
    Analyze(AnalyzeArgs),
    /// Corroborate a news text against web search results.
    Verify(InputArgs),
    /// Train the statistical scorer and report its fit.
    Train(TrainArgs),
    /// Analyze every line of a file.
    Batch(BatchArgs),
    /// Training dataset utilities.
    Dataset {
        #[command(subcommand)]
        action: DatasetCommands,
    },
    /// Show readiness of the scorer, judge and evidence search.
    Status,
}

/// Where the news text comes from. Falls back to stdin when neither is given.
#[derive(Clone, Debug, Args)]
pub struct InputArgs {
    /// News text to analyze.
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the news text from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Skip the language-model judge and use the scorer only.
    #[arg(long)]
    pub no_ai: bool,

    /// Also attach a web corroboration report.
    #[arg(long)]
    pub verify: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TrainArgs {
    /// JSONL dataset to train on (overrides `scorer.dataset_path`).
    #[arg(long)]
    pub dataset: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct BatchArgs {
    /// File with one news text per line.
    #[arg(long)]
    pub file: PathBuf,

    /// Skip the language-model judge.
    #[arg(long)]
    pub no_ai: bool,
}

#[derive(Clone, Debug, Subcommand)]
pub enum DatasetCommands {
    /// Write a synthetic labelled corpus as JSONL.
    Generate(GenerateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Output path.
    #[arg(long)]
    pub out: PathBuf,

    /// Number of fabricated examples.
    #[arg(long, default_value_t = 100)]
    pub fake: usize,

    /// Number of credible examples.
    #[arg(long, default_value_t = 100)]
    pub real: usize,

    /// RNG seed; the same seed always yields the same corpus.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
