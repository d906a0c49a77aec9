//! List available root versions

use chrono::Utc;
use clap::Args;
use tufdiff_core::format::format_expiry_timespan;
use tufdiff_core::history::RootHistory;

use crate::history::FsRootHistory;

#[derive(Debug, Args)]
pub struct VersionsArgs {
    /// Directory containing TUF metadata files
    #[arg(long, default_value = "metadata")]
    pub metadata_dir: String,
}

pub fn execute(args: VersionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let history = FsRootHistory::new(&args.metadata_dir);
    let versions = history.list_available_versions()?;

    if versions.is_empty() {
        println!("No root versions found in {}", args.metadata_dir);
        return Ok(());
    }

    let now = Utc::now();
    for version in versions {
        let envelope = history.load_by_version(version)?;
        println!(
            "v{}  {}",
            version,
            format_expiry_timespan(&envelope.signed.expires, now)
        );
    }
    Ok(())
}
