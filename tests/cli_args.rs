use clap::{CommandFactory, Parser};

use quizline::cli::Cli;
use quizline::loader::{ShuffleMode, DEFAULT_SOURCE};

#[test]
fn test_help_explains_where_logs_go() {
    let help = Cli::command().render_long_help().to_string();
    assert!(help.contains("RUST_LOG"));
    assert!(help.contains("2>quiz.log"));
    assert!(help.contains("--check"));
}

#[test]
fn test_defaults() {
    let cli = Cli::try_parse_from(["quizline"]).unwrap();
    assert_eq!(cli.source, DEFAULT_SOURCE);
    assert_eq!(cli.title, "Quiz");
    assert!(!cli.check);
    assert_eq!(cli.shuffle_mode(), ShuffleMode::Random);
}

#[test]
fn test_shuffle_flags() {
    let seeded = Cli::try_parse_from(["quizline", "bank.yaml", "--seed", "7"]).unwrap();
    assert_eq!(seeded.source, "bank.yaml");
    assert_eq!(seeded.shuffle_mode(), ShuffleMode::Seeded(7));

    let off = Cli::try_parse_from(["quizline", "--no-shuffle"]).unwrap();
    assert_eq!(off.shuffle_mode(), ShuffleMode::Off);

    assert!(Cli::try_parse_from(["quizline", "--seed", "7", "--no-shuffle"]).is_err());
}
