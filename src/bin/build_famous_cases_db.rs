use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use iran_law_loader::cases::{self, CaseOptions};
use iran_law_loader::report::{init_tracing, TracingReporter};
use iran_law_loader::settings::Settings;

#[derive(Parser)]
#[command(name = "build_famous_cases_db", about = "Build famous cases database")]
struct Cli {
    /// Folder containing the case text files
    #[arg(long)]
    src: PathBuf,
    /// Output SQLite database file
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing("info");
    let cli = Cli::parse();

    let settings = Settings::load().context("Failed to load settings")?;
    let opts = CaseOptions {
        src_dir: cli.src,
        db_file: cli.db.unwrap_or(settings.cases_db_file),
        extension: settings.extension,
        case_prefix: settings.case_prefix,
    };

    let summary = cases::build_database(&opts, &TracingReporter)?;
    println!("{} cases saved to {}", summary.cases, summary.db_file.display());
    Ok(())
}
