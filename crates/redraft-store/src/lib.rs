//! SQLite-backed persistence for commit history.
//!
//! One document's history lives in one database file holding an append-only
//! ledger of commit records. Appends are transactional, so a failed commit
//! leaves the ledger exactly as it was, and loading reconstructs history in
//! creation order while flagging any corrupt tail instead of aborting.

pub mod db;
pub mod errors;
pub mod ledger;
pub mod migrations;

pub use ledger::{CommitLedger, HistoryLoad, LoadWarning};
