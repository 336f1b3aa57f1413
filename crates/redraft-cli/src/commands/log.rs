//! Log command

use clap::Args;

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Path to the document file
    pub file: String,

    #[arg(long, default_value = ".redraft/history.db")]
    pub db: String,
}

pub fn execute(args: LogArgs) -> Result<(), Box<dyn std::error::Error>> {
    let workspace = super::open_workspace(&args.file, &args.db)?;
    let commits = workspace.commits();

    if commits.is_empty() {
        println!("No commits yet");
        return Ok(());
    }

    for meta in commits {
        match &meta.message {
            Some(message) => println!("{}  {}  {}", meta.timestamp, meta.id, message),
            None => println!("{}  {}", meta.timestamp, meta.id),
        }
    }
    Ok(())
}
