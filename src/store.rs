//! Persistent store: a disk-backed SQLite table keyed by token.
//!
//! The connection is owned by [`TokenStore`] and passed explicitly to every
//! caller; it is released by `Drop` on every exit path, so there is no
//! long-lived global session state.

use crate::error::{BenchError, Result};
use crate::token::TokenGenerator;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// One stored row: token plus its persisted metadata.
#[derive(Debug, Clone)]
pub struct TokenRecord {
    pub token: String,
    pub status: String,
    pub last_modified: String,
}

pub struct TokenStore {
    conn: Connection,
}

impl TokenStore {
    /// Open (or create) the database file and tune the connection for a
    /// bulk-load-then-read workload.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path).map_err(BenchError::StorageInit)?;
        configure_connection(&conn).map_err(BenchError::StorageInit)?;
        Ok(Self { conn })
    }

    /// In-memory store, used by the criterion harness.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(BenchError::StorageInit)?;
        configure_connection(&conn).map_err(BenchError::StorageInit)?;
        Ok(Self { conn })
    }

    /// Create the schema if it does not exist. Idempotent; never drops
    /// existing data.
    pub fn initialize(&self) -> Result<()> {
        self.conn
            .execute_batch(
                "CREATE TABLE IF NOT EXISTS tokens (
                    token TEXT PRIMARY KEY,
                    last_modified TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
                    status TEXT NOT NULL
                )",
            )
            .map_err(BenchError::StorageInit)
    }

    /// Clear all existing records, then insert `count` freshly generated
    /// tokens with status "active", all in one transaction.
    ///
    /// A primary-key collision aborts the whole population run (no retry,
    /// no skip), so on success the stored count always equals `count`.
    pub fn repopulate(&mut self, count: usize, generator: &mut TokenGenerator) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let cleared = tx.execute("DELETE FROM tokens", [])?;
        log::debug!("cleared {cleared} existing rows");
        {
            let mut stmt = tx.prepare("INSERT INTO tokens (token, status) VALUES (?1, ?2)")?;
            for _ in 0..count {
                let token = generator.next_token();
                stmt.execute(params![token, "active"]).map_err(|e| {
                    if is_constraint_violation(&e) {
                        BenchError::DuplicateToken { token: token.clone(), source: e }
                    } else {
                        BenchError::Query(e)
                    }
                })?;
            }
        }
        tx.commit()?;
        Ok(count)
    }

    /// Point read by primary key. Returns whether the token exists and the
    /// elapsed time of the statement execution alone; statement preparation
    /// is cached and connection setup is excluded from the bracket.
    pub fn lookup(&self, token: &str) -> Result<(bool, Duration)> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT 1 FROM tokens WHERE token = ?1")?;
        let start = Instant::now();
        let found = stmt.exists(params![token])?;
        Ok((found, start.elapsed()))
    }

    /// Full record for one token, metadata included. The benchmark itself
    /// only ever checks existence; this is for inspection and tests.
    pub fn get_record(&self, token: &str) -> Result<Option<TokenRecord>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT token, status, last_modified FROM tokens WHERE token = ?1")?;
        let record = stmt
            .query_row(params![token], |row| {
                Ok(TokenRecord {
                    token: row.get(0)?,
                    status: row.get(1)?,
                    last_modified: row.get(2)?,
                })
            })
            .optional()?;
        Ok(record)
    }

    /// Full-table token snapshot, for handoff to the in-memory index.
    /// No concurrent writers exist during the run, so this is consistent.
    pub fn load_all_tokens(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT token FROM tokens")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut tokens = Vec::new();
        for row in rows {
            tokens.push(row?);
        }
        Ok(tokens)
    }

    pub fn count(&self) -> Result<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tokens", [], |r| r.get(0))?;
        Ok(n as usize)
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// Configure a connection for a bulk-load-then-read workload.
fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA cache_size = -65536;
         PRAGMA temp_store = MEMORY;",
    )
}
