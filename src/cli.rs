use clap::Parser;

use crate::loader::{ShuffleMode, DEFAULT_SOURCE};

const LOGGING_HELP: &str = "\
Logging:
  Set RUST_LOG (e.g. RUST_LOG=debug) to enable logs. They are written to
  stderr, which the TUI shares, so redirect it while playing
  (quizline questions.json 2>quiz.log) or pair RUST_LOG with --check.";

#[derive(Parser, Debug)]
#[command(
    name = "quizline",
    version,
    about = "Terminal multiple-choice quiz",
    after_help = LOGGING_HELP
)]
pub struct Cli {
    /// Question bank: file path (.json, .yaml) or http(s) URL
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Title shown on every screen
    #[arg(long, default_value = "Quiz")]
    pub title: String,

    /// Seed for the question order, for reproducible runs
    #[arg(long, value_name = "n", conflicts_with = "no_shuffle")]
    pub seed: Option<u64>,

    /// Keep questions in file order
    #[arg(long)]
    pub no_shuffle: bool,

    /// Validate the question bank and print a summary without entering the TUI
    #[arg(long)]
    pub check: bool,
}

impl Cli {
    pub fn shuffle_mode(&self) -> ShuffleMode {
        if self.no_shuffle {
            ShuffleMode::Off
        } else if let Some(seed) = self.seed {
            ShuffleMode::Seeded(seed)
        } else {
            ShuffleMode::Random
        }
    }
}
