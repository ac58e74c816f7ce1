//! quizscore CLI — list, validate, and score multiple-choice quizzes.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "quizscore", version, about = "Multiple-choice quiz scorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available quizzes
    List {
        /// Directory of quiz .toml files (default: quiz_dir from config)
        #[arg(long)]
        quiz_dir: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Score an answer set against a quiz
    Score {
        /// Quiz .toml file, or a directory searched for the answers' quiz_id
        #[arg(long)]
        quiz: PathBuf,

        /// Answer set JSON file
        #[arg(long)]
        answers: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Save a JSON report under the configured output directory
        #[arg(long)]
        save: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config, example quiz, and example answers
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizscore=info".parse().unwrap())
                .add_directive("quizscore_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List { quiz_dir, config } => commands::list::execute(quiz_dir, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Score {
            quiz,
            answers,
            format,
            save,
            config,
        } => commands::score::execute(quiz, answers, format, save, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
