//! Embedded migration definitions
//!
//! Migrations are compiled into the binary and applied in order by id.

/// A single schema migration
pub struct Migration {
    /// Unique, ordered identifier
    pub id: &'static str,
    /// SQL executed inside one transaction
    pub sql: &'static str,
}

/// All migrations in application order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "0001_create_commits",
        sql: r#"
            CREATE TABLE IF NOT EXISTS commits (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                commit_id TEXT NOT NULL UNIQUE,
                timestamp TEXT NOT NULL UNIQUE,
                message TEXT,
                content TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_commits_timestamp ON commits (timestamp);
        "#,
    }]
}
