use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use ohio_quiz::{DEFAULT_PAIRS_PATH, DEFAULT_QUIZ_LENGTH, Quiz, QuizOptions, sampler};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the comparison records from
    #[arg(short, long, default_value = DEFAULT_PAIRS_PATH)]
    pairs: PathBuf,

    /// Number of questions per quiz
    #[arg(short = 'n', long, default_value_t = DEFAULT_QUIZ_LENGTH, value_parser = parse_count)]
    count: usize,

    /// Seed for reproducible question selection
    #[arg(long)]
    seed: Option<u64>,

    /// Rejected draws and restarts allowed before the sampler falls back to an exhaustive search
    #[arg(long, default_value_t = sampler::DEFAULT_RETRY_BUDGET)]
    retries: usize,

    /// Write logs to this file (the terminal is busy with the quiz)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("a quiz needs at least one question".to_string()),
        Ok(count) => Ok(count),
        Err(err) => Err(err.to_string()),
    }
}

fn init_logging(path: Option<&PathBuf>) -> std::io::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_file.as_ref()) {
        eprintln!("Cannot open log file: {}", e);
        std::process::exit(1);
    }

    let options = QuizOptions {
        count: args.count,
        retry_budget: args.retries,
        seed: args.seed,
    };

    let quiz = match Quiz::from_json(&args.pairs, options) {
        Ok(quiz) => quiz,
        Err(e) => {
            error!(error = %e, "cannot start quiz");
            if let Err(screen_error) = ohio_quiz::show_startup_failure(&e) {
                eprintln!("{}", screen_error);
            }
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    info!(questions = quiz.session().len(), "starting quiz");
    if let Err(e) = quiz.run() {
        error!(error = %e, "quiz aborted");
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
