//! Commit command

use clap::Args;

#[derive(Debug, Args)]
pub struct CommitArgs {
    /// Path to the document file
    pub file: String,

    /// Short commit message
    #[arg(long, short)]
    pub message: Option<String>,

    #[arg(long, default_value = ".redraft/history.db")]
    pub db: String,
}

pub fn execute(args: CommitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut workspace = super::open_workspace(&args.file, &args.db)?;
    let meta = workspace.commit(args.message)?;

    println!("Committed:");
    println!("  id: {}", meta.id);
    println!("  timestamp: {}", meta.timestamp);
    Ok(())
}
