//! CLI command implementations

pub mod commit;
pub mod diff;
pub mod log;
pub mod show;
pub mod status;

use std::path::Path;

use redraft_core::DiffConfig;
use redraft_engine::{DocumentProvider, VersionRef, Workspace};

/// Live document text read from a file at command startup
pub struct FileDocument {
    text: String,
}

impl FileDocument {
    pub fn read<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        Ok(Self {
            text: std::fs::read_to_string(path)?,
        })
    }
}

impl DocumentProvider for FileDocument {
    fn current_text(&self) -> String {
        self.text.clone()
    }
}

/// Open a workspace for the given document and ledger path.
///
/// Warnings about a corrupt history tail go to stderr; the valid prefix of
/// history is still usable.
pub fn open_workspace(
    file: &str,
    db: &str,
) -> Result<Workspace<FileDocument>, Box<dyn std::error::Error>> {
    if let Some(parent) = Path::new(db).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let provider = FileDocument::read(file)?;
    let (workspace, warnings) = Workspace::open(db, provider, DiffConfig::default())?;
    for warning in warnings {
        eprintln!(
            "Warning: skipped history record at '{}': {}",
            warning.timestamp, warning.reason
        );
    }
    Ok(workspace)
}

/// Parse a version reference: `base`, `current`, or a commit timestamp
pub fn parse_ref(s: &str) -> Result<VersionRef, Box<dyn std::error::Error>> {
    match s {
        "base" => Ok(VersionRef::Base),
        "current" => Ok(VersionRef::Current),
        other => Ok(VersionRef::At(other.parse()?)),
    }
}
