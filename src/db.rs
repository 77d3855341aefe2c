use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;

use crate::error::Result;

pub fn connect(path: &Path) -> Result<Connection> {
    let conn = Connection::open(path)?;
    Ok(conn)
}

pub fn init_article_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS articles (
            code TEXT,
            id   INTEGER,
            text TEXT,
            PRIMARY KEY (code, id)
        );
        ",
    )?;
    Ok(())
}

pub fn init_case_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS famous_cases (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            title   TEXT UNIQUE,
            summary TEXT
        );
        ",
    )?;
    Ok(())
}

pub fn init_alias_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS law_aliases (
            alias    TEXT PRIMARY KEY,
            law_code TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_law_aliases_code ON law_aliases(law_code);
        ",
    )?;
    Ok(())
}

// ── Articles ──

/// One row of `articles`, also the shape of a JSONL export line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawArticle {
    pub code: String,
    pub id: i64,
    pub text: String,
}

/// Insert-if-absent: an existing `(code, id)` keeps its first text.
/// Returns the number of rows actually inserted.
pub fn insert_articles(conn: &Connection, rows: &[LawArticle]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare("INSERT OR IGNORE INTO articles (code, id, text) VALUES (?1, ?2, ?3)")?;
        for r in rows {
            count += stmt.execute(rusqlite::params![r.code, r.id, r.text])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

pub fn count_articles(conn: &Connection) -> Result<usize> {
    let n: usize = conn.query_row("SELECT COUNT(*) FROM articles", [], |r| r.get(0))?;
    Ok(n)
}

pub fn fetch_article(conn: &Connection, code: &str, id: i64) -> Result<Option<String>> {
    let text = conn
        .query_row(
            "SELECT text FROM articles WHERE code = ?1 AND id = ?2",
            rusqlite::params![code, id],
            |r| r.get(0),
        )
        .optional()?;
    Ok(text)
}

// ── Famous cases ──

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamousCase {
    pub title: String,
    pub summary: String,
}

/// Insert-or-replace: the newest summary for a title wins.
pub fn upsert_cases(conn: &Connection, rows: &[FamousCase]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare("INSERT OR REPLACE INTO famous_cases (title, summary) VALUES (?1, ?2)")?;
        for r in rows {
            count += stmt.execute(rusqlite::params![r.title, r.summary])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

pub fn count_cases(conn: &Connection) -> Result<usize> {
    let n: usize = conn.query_row("SELECT COUNT(*) FROM famous_cases", [], |r| r.get(0))?;
    Ok(n)
}

pub fn fetch_case_summary(conn: &Connection, title: &str) -> Result<Option<String>> {
    let summary = conn
        .query_row(
            "SELECT summary FROM famous_cases WHERE title = ?1",
            [title],
            |r| r.get(0),
        )
        .optional()?;
    Ok(summary)
}

// ── Aliases ──

pub fn upsert_aliases(conn: &Connection, rows: &[(&str, &str)]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut count = 0;
    {
        let mut stmt = tx.prepare("INSERT OR REPLACE INTO law_aliases (alias, law_code) VALUES (?1, ?2)")?;
        for (alias, code) in rows {
            count += stmt.execute(rusqlite::params![alias, code])?;
        }
    }
    tx.commit()?;
    Ok(count)
}

pub fn fetch_alias(conn: &Connection, alias: &str) -> Result<Option<String>> {
    let code = conn
        .query_row(
            "SELECT law_code FROM law_aliases WHERE alias = ?1",
            [alias],
            |r| r.get(0),
        )
        .optional()?;
    Ok(code)
}

// ── Tests ──
