use clap::Parser;

use quizline::cli::Cli;
use quizline::loader::{self, Loader};
use quizline::model::QuestionBank;
use quizline::session::Session;
use quizline::state::AppState;
use quizline::tui;

fn main() {
    pretty_env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let loader = Loader::new(loader::source_for(&cli.source)).with_shuffle(cli.shuffle_mode());

    // The load is the only async step; the TUI runs on this thread afterwards.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Cannot start runtime: {}", e))?;
    let bank = runtime.block_on(loader.load()).map_err(|e| {
        log::error!("loading {} failed: {}", cli.source, e);
        e.to_string()
    })?;
    drop(runtime);

    if cli.check {
        print_check(&cli.source, &bank);
        return Ok(());
    }

    let state = AppState::new(cli.title.clone(), Session::new(bank));
    tui::run_tui(state)
}

fn print_check(source: &str, bank: &QuestionBank) {
    println!("Source: {}", source);
    println!("Questions: {}", bank.len());
    for (i, q) in bank.iter().enumerate() {
        println!(
            "  {:>3}. {} ({} options, answer {})",
            i + 1,
            q.question,
            q.options.len(),
            (b'A' + (q.correct % 26) as u8) as char
        );
    }
    if bank.is_empty() {
        println!("Warning: the bank is empty; the quiz cannot be started.");
    }
}
