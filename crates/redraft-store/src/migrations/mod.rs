//! Schema migrations for the commit ledger

pub mod embedded;
pub mod runner;

pub use runner::apply_migrations;
