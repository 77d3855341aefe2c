use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use iran_law_loader::law::{self, LawOptions};
use iran_law_loader::report::{init_tracing, TracingReporter};
use iran_law_loader::settings::Settings;

#[derive(Parser)]
#[command(name = "build_law_db", about = "Build SQLite & JSONL from Iranian law text files")]
struct Cli {
    /// Directory containing the law text files
    #[arg(short, long)]
    src_dir: Option<PathBuf>,
    /// Output SQLite database path
    #[arg(short, long)]
    db_file: Option<PathBuf>,
    /// Output JSONL file path
    #[arg(short, long)]
    jsonl_file: Option<PathBuf>,
    /// Delete existing outputs and rebuild from scratch
    #[arg(long)]
    overwrite: bool,
    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(if cli.debug { "debug" } else { "info" });

    let settings = Settings::load().context("Failed to load settings")?;
    let opts = LawOptions {
        src_dir: cli.src_dir.unwrap_or(settings.src_dir),
        db_file: cli.db_file.unwrap_or(settings.db_file),
        jsonl_file: cli.jsonl_file.unwrap_or(settings.jsonl_file),
        overwrite: cli.overwrite,
        extension: settings.extension,
        law_suffix: settings.law_suffix,
    };

    law::build_database(&opts, &TracingReporter)
        .with_context(|| format!("Failed to build {}", opts.db_file.display()))?;
    Ok(())
}
