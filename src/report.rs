//! Progress and summary reporting for the loaders.
//!
//! Loaders never log directly; they are handed a [`Reporter`]. The binaries
//! pass [`TracingReporter`], tests pass a recorder.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::article::Skipped;
use crate::cases::CaseSummary;
use crate::error::LoaderError;
use crate::law::LawSummary;

pub trait Reporter {
    fn sources_found(&self, dir: &Path, files: &[PathBuf]);
    /// A marker whose segment produced no article.
    fn segment_skipped(&self, code: &str, skipped: &Skipped<'_>);
    /// A repeated article id within one file; the first one was kept.
    fn duplicate_article(&self, code: &str, id: i64);
    fn law_loaded(&self, code: &str, articles: usize);
    fn case_loaded(&self, title: &str);
    fn file_failed(&self, path: &Path, err: &LoaderError);
    fn law_finished(&self, summary: &LawSummary);
    fn cases_finished(&self, summary: &CaseSummary);
}

/// Reports through `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn sources_found(&self, dir: &Path, files: &[PathBuf]) {
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name())
            .map(|n| n.to_string_lossy())
            .collect();
        info!(
            dir = %dir.display(),
            "Found {} source files: {}",
            files.len(),
            names.join(", ")
        );
    }

    fn segment_skipped(&self, code: &str, skipped: &Skipped<'_>) {
        debug!(code, raw_id = skipped.raw_id, reason = ?skipped.reason, "segment skipped");
    }

    fn duplicate_article(&self, code: &str, id: i64) {
        debug!(code, id, "duplicate article ignored");
    }

    fn law_loaded(&self, code: &str, articles: usize) {
        info!(code, articles, "{:<20} -> {:>4} ماده", code, articles);
    }

    fn case_loaded(&self, title: &str) {
        debug!(title, "case loaded");
    }

    fn file_failed(&self, path: &Path, err: &LoaderError) {
        warn!(file = %path.display(), "{}", err);
    }

    fn law_finished(&self, s: &LawSummary) {
        if s.files_failed > 0 {
            error!(failed = s.files_failed, "{} source files could not be read", s.files_failed);
        }
        info!(
            "Done! {} articles saved in {} & {} ({})",
            s.articles,
            s.db_file.display(),
            s.jsonl_file.display(),
            format_duration(s.elapsed)
        );
        info!("UTC timestamp: {}", s.finished_at.format("%Y-%m-%d %H:%M:%S"));
    }

    fn cases_finished(&self, s: &CaseSummary) {
        if s.files_failed > 0 {
            error!(failed = s.files_failed, "{} case files could not be read", s.files_failed);
        }
        info!(
            "{} cases saved in {} ({})",
            s.cases,
            s.db_file.display(),
            format_duration(s.elapsed)
        );
    }
}

/// Install the fmt subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .try_init();
}

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

/// Collects events as short strings so tests can assert on them.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingReporter {
    pub events: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl RecordingReporter {
    fn push(&self, event: String) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events.borrow().iter().filter(|e| e.starts_with(prefix)).count()
    }
}

#[cfg(test)]
impl Reporter for RecordingReporter {
    fn sources_found(&self, _dir: &Path, files: &[PathBuf]) {
        self.push(format!("found {}", files.len()));
    }

    fn segment_skipped(&self, code: &str, skipped: &Skipped<'_>) {
        self.push(format!("skipped {} {}", code, skipped.raw_id));
    }

    fn duplicate_article(&self, code: &str, id: i64) {
        self.push(format!("duplicate {} {}", code, id));
    }

    fn law_loaded(&self, code: &str, articles: usize) {
        self.push(format!("law {} {}", code, articles));
    }

    fn case_loaded(&self, title: &str) {
        self.push(format!("case {}", title));
    }

    fn file_failed(&self, path: &Path, _err: &LoaderError) {
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        self.push(format!("failed {}", name.unwrap_or_default()));
    }

    fn law_finished(&self, s: &LawSummary) {
        self.push(format!("law done {}", s.articles));
    }

    fn cases_finished(&self, s: &CaseSummary) {
        self.push(format!("cases done {}", s.cases));
    }
}
