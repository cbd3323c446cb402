//! Suggest command - extract metadata from OCR text and compose a filename.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use serde_json::json;
use tracing::{debug, info};

use docren_core::{
    compose, parse_component_list, promote_custom_match, LineScanner, NamingConfig,
};

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// OCR text file to read ("-" for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Name of the document the text came from; supplies the extension
    #[arg(short = 'n', long)]
    original_name: Option<String>,

    /// Prefix placed ahead of every name component
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Separator between name parts (defaults to the configured separator)
    #[arg(short, long)]
    separator: Option<String>,

    /// Comma-separated, ordered component list
    #[arg(short = 'l', long, default_value = "date,vendor")]
    components: String,

    /// Custom search term to look for in the text
    #[arg(long)]
    search: Option<String>,

    /// Label whose trailing value should be captured
    #[arg(long)]
    label: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain suggested name
    Text,
    /// Full response with extracted metadata
    Json,
}

pub fn run(args: SuggestArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        NamingConfig::from_file(Path::new(path))?
    } else {
        NamingConfig::default()
    };

    let text = read_input(&args.input)?;
    debug!("raw OCR text ({} chars):\n{}", text.len(), text);

    let mut components = parse_component_list(&args.components);
    // A searched-for term should show up in the name, at the front.
    if args.search.as_deref().is_some_and(|s| !s.trim().is_empty()) {
        promote_custom_match(&mut components);
    }

    let scanner = LineScanner::new().with_placeholder_vendor(config.placeholder_vendor.clone());
    let result = scanner.extract(&text, args.search.as_deref(), args.label.as_deref());
    info!("extracted metadata: {result:?}");

    let extension = args
        .original_name
        .as_deref()
        .map(derive_extension)
        .unwrap_or_default();

    let separator = args
        .separator
        .as_deref()
        .unwrap_or(&config.default_separator);

    let suggested = compose(
        &result,
        &extension,
        &args.prefix,
        separator,
        &components,
        &config,
    );

    match args.format {
        OutputFormat::Text => {
            println!("{suggested}");
            eprintln!("{} suggestion ready", style("✓").green());
        }
        OutputFormat::Json => {
            let response = json!({
                "original_name": args.original_name,
                "suggested_name": suggested,
                "metadata": result,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }
    Ok(fs::read_to_string(input)?)
}

/// Lowercased extension of the original document name, leading dot included.
fn derive_extension(original_name: &str) -> String {
    Path::new(original_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
        .unwrap_or_default()
}
