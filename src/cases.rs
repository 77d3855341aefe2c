use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::db::{self, FamousCase};
use crate::error::Result;
use crate::naming;
use crate::report::Reporter;
use crate::source::{self, SourceFiles};

#[derive(Debug, Clone)]
pub struct CaseOptions {
    pub src_dir: PathBuf,
    pub db_file: PathBuf,
    pub extension: String,
    pub case_prefix: String,
}

#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub files: usize,
    pub files_failed: usize,
    pub cases: usize,
    pub db_file: PathBuf,
    pub elapsed: Duration,
}

/// Whole-file case record; `None` when the text is blank.
pub fn normalize_case(file_name: &str, text: &str, prefix: &str) -> Option<FamousCase> {
    let summary = text.trim();
    if summary.is_empty() {
        return None;
    }
    Some(FamousCase {
        title: naming::case_title(file_name, prefix),
        summary: summary.to_string(),
    })
}

/// Read every source file into a case. Unreadable files are reported and
/// left out; the returned count is the number of such failures.
pub fn load_cases(
    sources: SourceFiles,
    prefix: &str,
    reporter: &dyn Reporter,
) -> (Vec<FamousCase>, usize) {
    let mut cases = Vec::new();
    let mut failed = 0;
    for path in sources {
        match source::read_text(&path) {
            Ok(text) => {
                if let Some(case) = normalize_case(&source::file_name(&path), &text, prefix) {
                    reporter.case_loaded(&case.title);
                    cases.push(case);
                }
            }
            Err(e) => {
                reporter.file_failed(&path, &e);
                failed += 1;
            }
        }
    }
    (cases, failed)
}

/// Upsert every case file of `opts.src_dir` into `famous_cases`.
pub fn build_database(opts: &CaseOptions, reporter: &dyn Reporter) -> Result<CaseSummary> {
    let t0 = Instant::now();

    let sources = source::scan(&opts.src_dir, &opts.extension)?;
    reporter.sources_found(&opts.src_dir, sources.remaining());
    let files = sources.len();

    let conn = db::connect(&opts.db_file)?;
    db::init_case_schema(&conn)?;

    let (cases, files_failed) = load_cases(sources, &opts.case_prefix, reporter);
    let count = db::upsert_cases(&conn, &cases)?;

    let summary = CaseSummary {
        files,
        files_failed,
        cases: count,
        db_file: opts.db_file.clone(),
        elapsed: t0.elapsed(),
    };
    reporter.cases_finished(&summary);
    Ok(summary)
}

// ── Tests ──
