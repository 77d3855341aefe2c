use std::path::PathBuf;

use config::{Config, Environment};
use serde::Deserialize;

use crate::error::Result;
use crate::naming::{CASE_PREFIX, LAW_SUFFIX};

pub const ENV_PREFIX: &str = "IRANLAW";

/// Defaults overlaid by `IRANLAW_*` environment variables
/// (`IRANLAW_DB_FILE`, `IRANLAW_EXTENSION`, ...). CLI flags override both.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub src_dir: PathBuf,
    pub db_file: PathBuf,
    pub jsonl_file: PathBuf,
    pub cases_db_file: PathBuf,
    pub extension: String,
    pub law_suffix: String,
    pub case_prefix: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("src_dir", ".")?
            .set_default("db_file", "iran_laws.db")?
            .set_default("jsonl_file", "iran_laws.jsonl")?
            .set_default("cases_db_file", "laws.db")?
            .set_default("extension", "txt")?
            .set_default("law_suffix", LAW_SUFFIX)?
            .set_default("case_prefix", CASE_PREFIX)?
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}
