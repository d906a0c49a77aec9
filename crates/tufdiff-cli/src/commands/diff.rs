//! Compare two root versions

use clap::Args;
use tufdiff_core::diff::{compare_roots, render_human_summary};
use tufdiff_core::history::{versions_consecutive, RootHistory};

use crate::history::FsRootHistory;

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Directory containing TUF metadata files
    #[arg(long, default_value = "metadata")]
    pub metadata_dir: String,

    /// Old version (defaults to the second-newest available)
    #[arg(long)]
    pub old: Option<u64>,

    /// New version (defaults to the newest available)
    #[arg(long)]
    pub new: Option<u64>,

    /// Emit the structured diff as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let history = FsRootHistory::new(&args.metadata_dir);
    let (old_version, new_version) = resolve_versions(&history, args.old, args.new)?;

    if !versions_consecutive(old_version, new_version) {
        eprintln!(
            "warning: comparing non-consecutive root versions {} -> {}; \
             valid trust-chain updates move from version N to N+1",
            old_version, new_version
        );
    }

    let old_envelope = history.load_by_version(old_version)?;
    let new_envelope = history.load_by_version(new_version)?;

    let diff = compare_roots(
        &old_envelope.signed,
        &old_envelope.signatures,
        &new_envelope.signed,
        &new_envelope.signatures,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&diff)?);
    } else {
        print!("{}", render_human_summary(&diff));
    }
    Ok(())
}

/// Pick the two versions to compare, lower version as the old side.
fn resolve_versions(
    history: &FsRootHistory,
    old: Option<u64>,
    new: Option<u64>,
) -> Result<(u64, u64), Box<dyn std::error::Error>> {
    match (old, new) {
        (Some(old), Some(new)) => {
            if old <= new {
                Ok((old, new))
            } else {
                Ok((new, old))
            }
        }
        (None, None) => {
            let versions = history.list_available_versions()?;
            if versions.len() < 2 {
                return Err("need at least two root versions to diff".into());
            }
            Ok((versions[1], versions[0]))
        }
        _ => Err("specify both --old and --new, or neither".into()),
    }
}
