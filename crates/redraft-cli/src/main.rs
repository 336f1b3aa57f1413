//! Redraft CLI
//!
//! Command-line interface for the redraft version-control engine

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "redraft")]
#[command(about = "Redraft - snapshot version control for a single document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Commit the document's current text
    Commit(commands::commit::CommitArgs),
    /// List commits, oldest to newest
    Log(commands::log::LogArgs),
    /// Print the document as of a commit
    Show(commands::show::ShowArgs),
    /// Report whether the document has uncommitted changes
    Status(commands::status::StatusArgs),
    /// Compare two versions of the document
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Commit(args) => commands::commit::execute(args),
        Commands::Log(args) => commands::log::execute(args),
        Commands::Show(args) => commands::show::execute(args),
        Commands::Status(args) => commands::status::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
