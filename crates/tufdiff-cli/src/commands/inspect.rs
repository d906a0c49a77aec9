//! Show the key and role layout of one root version

use clap::Args;
use tufdiff_core::format::{format_expiration_date, format_key_id};
use tufdiff_core::history::RootHistory;

use crate::history::FsRootHistory;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Directory containing TUF metadata files
    #[arg(long, default_value = "metadata")]
    pub metadata_dir: String,

    /// Root version to inspect (defaults to the newest available)
    #[arg(long)]
    pub version: Option<u64>,
}

pub fn execute(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let history = FsRootHistory::new(&args.metadata_dir);

    let version = match args.version {
        Some(version) => version,
        None => *history
            .list_available_versions()?
            .first()
            .ok_or("no root versions found")?,
    };

    let envelope = history.load_by_version(version)?;
    let root = &envelope.signed;

    println!(
        "root v{}  ({})",
        root.version,
        format_expiration_date(&root.expires)
    );
    if let Some(spec_version) = &root.spec_version {
        println!("spec version: {}", spec_version);
    }

    for (role_name, role) in &root.roles {
        // Show resolved owner labels where the repository annotated them,
        // falling back to the display form of the raw key id
        let signers: Vec<String> = role
            .keyids
            .iter()
            .map(|keyid| {
                root.keys
                    .get(keyid)
                    .and_then(|key| key.owner_label())
                    .unwrap_or_else(|| format_key_id(keyid))
            })
            .collect();
        println!(
            "  {:<12} {} of {}  [{}]",
            role_name,
            role.threshold,
            role.keyids.len(),
            signers.join(", ")
        );
    }
    Ok(())
}
