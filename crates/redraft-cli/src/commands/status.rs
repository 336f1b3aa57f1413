//! Status command

use clap::Args;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Path to the document file
    pub file: String,

    #[arg(long, default_value = ".redraft/history.db")]
    pub db: String,
}

pub fn execute(args: StatusArgs) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = super::open_workspace(&args.file, &args.db)?;
    let commits = workspace.commits();

    if workspace.has_uncommitted_changes() {
        println!("Uncommitted changes ({} commit(s) in history)", commits.len());
    } else {
        println!("Clean ({} commit(s) in history)", commits.len());
    }
    Ok(())
}
