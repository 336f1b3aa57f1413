//! Append-only commit ledger.
//!
//! One ledger holds the linear history of one document. Writes are
//! serialized through `&mut self` and run inside a transaction, so a failed
//! append leaves the ledger untouched. Reads of committed records never
//! observe partial state.

use std::path::Path;
use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension};

use crate::db;
use crate::errors::{from_rusqlite, Result};
use crate::migrations;
use redraft_core::{Commit, RedraftError};
use redraft_core_types::{CommitId, Timestamp};

/// SQLite-backed store of commit records for a single document
pub struct CommitLedger {
    conn: Connection,
}

/// A history record that could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    /// The raw timestamp text of the offending record
    pub timestamp: String,
    /// Why the record (and the tail after it) was skipped
    pub reason: String,
}

/// Result of loading history: the valid prefix plus any warnings
#[derive(Debug)]
pub struct HistoryLoad {
    /// Commits in creation order (oldest first)
    pub commits: Vec<Commit>,
    /// Non-empty when a corrupt tail was skipped
    pub warnings: Vec<LoadWarning>,
}

impl CommitLedger {
    /// Open (or create) a ledger at the given path and apply migrations
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut conn = db::open(path)?;
        db::configure(&conn)?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory ledger (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        migrations::apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    /// Append a commit record.
    ///
    /// The insert is transactional: on any failure no partial record is
    /// visible and previously committed records are untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHistory` if the commit's timestamp is not strictly
    /// greater than the newest persisted record's, `StoreUnavailable` on
    /// any database fault.
    pub fn append_commit(&mut self, commit: &Commit) -> Result<()> {
        let tx = self
            .conn
            .transaction()
            .map_err(|e| from_rusqlite("append_commit", e))?;

        let latest: Option<String> = tx
            .query_row(
                "SELECT timestamp FROM commits ORDER BY seq DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite("append_commit", e))?;
        if let Some(latest) = latest {
            if commit.timestamp.as_str() <= latest.as_str() {
                return Err(RedraftError::InvalidHistory {
                    timestamp: commit.timestamp.as_str().to_string(),
                    reason: format!("timestamp is not greater than predecessor '{}'", latest),
                });
            }
        }

        tx.execute(
            "INSERT INTO commits (commit_id, timestamp, message, content)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                commit.id.as_str(),
                commit.timestamp.as_str(),
                commit.message,
                commit.content,
            ],
        )
        .map_err(|e| from_rusqlite("append_commit", e))?;

        tx.commit().map_err(|e| from_rusqlite("append_commit", e))?;

        tracing::debug!(
            commit_id = %commit.id,
            timestamp = %commit.timestamp,
            content_chars = commit.content.chars().count(),
            "Persisted commit"
        );

        Ok(())
    }

    /// Load history in creation order.
    ///
    /// A record with an unparseable timestamp, or one not strictly greater
    /// than its predecessor's, marks the start of a corrupt tail: the valid
    /// prefix is returned together with a warning and the tail is skipped.
    pub fn load_history(&self) -> Result<HistoryLoad> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT commit_id, timestamp, message, content
                 FROM commits ORDER BY seq ASC",
            )
            .map_err(|e| from_rusqlite("load_history", e))?;
        let rows: Vec<(String, String, Option<String>, String)> = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .map_err(|e| from_rusqlite("load_history", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| from_rusqlite("load_history", e))?;

        let total = rows.len();
        let mut commits: Vec<Commit> = Vec::with_capacity(total);
        let mut warnings: Vec<LoadWarning> = Vec::new();

        for (index, (id, raw_timestamp, message, content)) in rows.into_iter().enumerate() {
            let timestamp = match Timestamp::from_str(&raw_timestamp) {
                Ok(ts) => ts,
                Err(e) => {
                    warnings.push(corrupt_tail(
                        &raw_timestamp,
                        &format!("unparseable timestamp: {}", e),
                        total - index,
                    ));
                    break;
                }
            };
            if let Some(prev) = commits.last() {
                if timestamp <= prev.timestamp {
                    warnings.push(corrupt_tail(
                        &raw_timestamp,
                        &format!(
                            "timestamp is not greater than predecessor '{}'",
                            prev.timestamp
                        ),
                        total - index,
                    ));
                    break;
                }
            }
            commits.push(Commit {
                id: CommitId::from_string(id),
                timestamp,
                message,
                content,
            });
        }

        if let Some(warning) = warnings.first() {
            tracing::warn!(
                timestamp = %warning.timestamp,
                reason = %warning.reason,
                loaded = commits.len(),
                "Skipped corrupt history tail"
            );
        }

        Ok(HistoryLoad { commits, warnings })
    }

    /// Content of the commit at the given timestamp
    ///
    /// # Errors
    ///
    /// Returns `CommitNotFound` if no record has that timestamp.
    pub fn content_at(&self, timestamp: &Timestamp) -> Result<String> {
        self.conn
            .query_row(
                "SELECT content FROM commits WHERE timestamp = ?1",
                [timestamp.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| from_rusqlite("content_at", e))?
            .ok_or_else(|| RedraftError::CommitNotFound {
                timestamp: timestamp.as_str().to_string(),
            })
    }

    /// Number of persisted commit records
    pub fn commit_count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM commits", [], |row| row.get(0))
            .map_err(|e| from_rusqlite("commit_count", e))?;
        Ok(count as usize)
    }
}

fn corrupt_tail(timestamp: &str, reason: &str, skipped: usize) -> LoadWarning {
    LoadWarning {
        timestamp: timestamp.to_string(),
        reason: format!("{} ({} record(s) skipped)", reason, skipped),
    }
}
