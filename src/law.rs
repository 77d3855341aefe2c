use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::article::LawDocument;
use crate::db::{self, LawArticle};
use crate::error::{LoaderError, Result};
use crate::jsonl::JsonlWriter;
use crate::naming;
use crate::report::Reporter;
use crate::source;

#[derive(Debug, Clone)]
pub struct LawOptions {
    pub src_dir: PathBuf,
    pub db_file: PathBuf,
    pub jsonl_file: PathBuf,
    /// Delete the database and truncate the JSONL before loading.
    pub overwrite: bool,
    pub extension: String,
    pub law_suffix: String,
}

#[derive(Debug, Clone)]
pub struct LawSummary {
    pub files: usize,
    pub files_failed: usize,
    /// Articles kept after per-file dedup (rows attempted, JSONL lines written).
    pub articles: usize,
    /// Rows new to the database in this run.
    pub inserted: usize,
    pub db_file: PathBuf,
    pub jsonl_file: PathBuf,
    pub elapsed: Duration,
    pub finished_at: DateTime<Utc>,
}

/// Articles of one law file, first occurrence of each id kept.
pub fn collect_articles(code: &str, text: &str, reporter: &dyn Reporter) -> Vec<LawArticle> {
    let doc = LawDocument::new(text);
    let mut seen_ids: HashSet<i64> = HashSet::new();
    let mut articles = Vec::new();
    for segment in doc.segments() {
        match segment {
            Ok(a) if seen_ids.insert(a.id) => articles.push(LawArticle {
                code: code.to_string(),
                id: a.id,
                text: a.body.to_string(),
            }),
            Ok(a) => reporter.duplicate_article(code, a.id),
            Err(skipped) => reporter.segment_skipped(code, &skipped),
        }
    }
    articles
}

/// Load every law file of `opts.src_dir` into the `articles` table and the
/// JSONL export.
///
/// Fails up front when the directory holds no qualifying file. A file that
/// cannot be read is reported and skipped; store and export errors abort.
pub fn build_database(opts: &LawOptions, reporter: &dyn Reporter) -> Result<LawSummary> {
    let t0 = Instant::now();

    let sources = source::scan(&opts.src_dir, &opts.extension)?;
    if sources.remaining().is_empty() {
        return Err(LoaderError::NoSourceFiles {
            dir: opts.src_dir.clone(),
            extension: opts.extension.clone(),
        });
    }
    reporter.sources_found(&opts.src_dir, sources.remaining());

    if opts.overwrite && opts.db_file.exists() {
        fs::remove_file(&opts.db_file)?;
    }
    let conn = db::connect(&opts.db_file)?;
    db::init_article_schema(&conn)?;
    let mut jsonl = JsonlWriter::open(&opts.jsonl_file, opts.overwrite)?;

    let mut files = 0;
    let mut files_failed = 0;
    let mut total = 0;
    let mut inserted = 0;

    for path in sources {
        let text = match source::read_text(&path) {
            Ok(t) => t,
            Err(e) => {
                reporter.file_failed(&path, &e);
                files_failed += 1;
                continue;
            }
        };
        let code = naming::law_code(&source::file_name(&path), &opts.law_suffix);
        let articles = collect_articles(&code, &text, reporter);

        inserted += db::insert_articles(&conn, &articles)?;
        for a in &articles {
            jsonl.write(a)?;
        }
        reporter.law_loaded(&code, articles.len());
        files += 1;
        total += articles.len();
    }
    jsonl.finish()?;

    let summary = LawSummary {
        files,
        files_failed,
        articles: total,
        inserted,
        db_file: opts.db_file.clone(),
        jsonl_file: opts.jsonl_file.clone(),
        elapsed: t0.elapsed(),
        finished_at: Utc::now(),
    };
    reporter.law_finished(&summary);
    Ok(summary)
}

// ── Tests ──
