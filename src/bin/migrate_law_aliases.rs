use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use iran_law_loader::aliases::{self, DEFAULT_ALIASES};
use iran_law_loader::db;
use iran_law_loader::report::init_tracing;
use iran_law_loader::settings::Settings;

#[derive(Parser)]
#[command(name = "migrate_law_aliases", about = "Seed the law alias table")]
struct Cli {
    /// SQLite database to migrate
    #[arg(long)]
    db: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing("info");
    let cli = Cli::parse();

    let settings = Settings::load().context("Failed to load settings")?;
    let path = cli.db.unwrap_or(settings.db_file);
    let conn = db::connect(&path).with_context(|| format!("Failed to open {}", path.display()))?;
    let n = aliases::migrate(&conn, DEFAULT_ALIASES)?;
    info!(aliases = n, db = %path.display(), "Migration complete");
    Ok(())
}
