//! CLI for OCR-driven document renaming.
//!
//! Thin consumer of `docren-core`: OCR itself is out of scope here, so the
//! `suggest` command reads already-recognized text and produces a filename
//! suggestion for the document it came from.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, plan, suggest};

/// Suggest descriptive filenames for OCR-scanned documents
#[derive(Parser)]
#[command(name = "docren")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest a filename from an OCR text dump
    Suggest(suggest::SuggestArgs),

    /// Show how much of a document must be scanned for a component list
    Plan(plan::PlanArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Suggest(args) => suggest::run(args, cli.config.as_deref()),
        Commands::Plan(args) => plan::run(args),
        Commands::Config(args) => config::run(args, cli.config.as_deref()),
    }
}
