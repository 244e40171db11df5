//! quizscore CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "quizscore",
    version,
    about = "Multiple-choice quiz with per-chapter summaries and highscores"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz in the terminal
    Play {
        /// Path to a .toml question bank
        #[arg(long)]
        bank: PathBuf,

        /// Player name (overrides config)
        #[arg(long)]
        player: Option<String>,

        /// Keep the bank's question order
        #[arg(long)]
        no_shuffle: bool,

        /// Highscore JSON file (overrides config)
        #[arg(long)]
        highscore: Option<PathBuf>,

        /// Number of highscores to keep (overrides config)
        #[arg(long)]
        max_scores: Option<usize>,

        /// Write a JSON report of the attempt to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the highscore list
    Highscore {
        /// Highscore JSON file (overrides config)
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format: text, table, json
        #[arg(long, default_value = "table")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to question bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create starter config and example question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizscore=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            bank,
            player,
            no_shuffle,
            highscore,
            max_scores,
            report,
            config,
        } => commands::play::execute(commands::play::PlayArgs {
            bank,
            player,
            no_shuffle,
            highscore,
            max_scores,
            report,
            config,
        }),
        Commands::Highscore {
            file,
            format,
            config,
        } => commands::highscore::execute(file, format, config),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
