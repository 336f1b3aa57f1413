//! Show command

use clap::Args;
use redraft_core_types::Timestamp;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Path to the document file
    pub file: String,

    /// Timestamp of the commit to print
    #[arg(long)]
    pub at: String,

    #[arg(long, default_value = ".redraft/history.db")]
    pub db: String,
}

pub fn execute(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = super::open_workspace(&args.file, &args.db)?;
    let timestamp: Timestamp = args.at.parse()?;
    let content = workspace.content_at(&timestamp)?;
    print!("{}", content);
    Ok(())
}
