//! Diff command
//!
//! Prints the union view with word-diff style markers: deleted text in
//! `[-...-]`, inserted text in `{+...+}`.

use clap::Args;
use redraft_core::diff::{EditOp, IndicatorKind};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Path to the document file
    pub file: String,

    /// Old side: `base`, `current`, or a commit timestamp
    #[arg(long, default_value = "base")]
    pub old: String,

    /// New side: `base`, `current`, or a commit timestamp
    #[arg(long, default_value = "current")]
    pub new: String,

    /// Also print normalized indicator ranges
    #[arg(long)]
    pub indicators: bool,

    #[arg(long, default_value = ".redraft/history.db")]
    pub db: String,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut workspace = super::open_workspace(&args.file, &args.db)?;
    let old = super::parse_ref(&args.old)?;
    let new = super::parse_ref(&args.new)?;
    let comparison = workspace.compare(old, new)?;

    let mut out = String::new();
    for span in comparison.diff.spans() {
        match span.op {
            EditOp::Equal => out.push_str(&span.text),
            EditOp::Delete => {
                out.push_str("[-");
                out.push_str(&span.text);
                out.push_str("-]");
            }
            EditOp::Insert => {
                out.push_str("{+");
                out.push_str(&span.text);
                out.push_str("+}");
            }
        }
    }
    println!("{}", out);

    if args.indicators {
        for range in workspace.indicator_ranges(&comparison.diff) {
            let kind = match range.kind {
                IndicatorKind::Insert => "insert",
                IndicatorKind::Delete => "delete",
            };
            println!(
                "{}  {:.3}..{:.3}",
                kind, range.start_fraction, range.end_fraction
            );
        }
    }
    Ok(())
}
