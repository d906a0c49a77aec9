//! Filesystem-backed root version history.
//!
//! Scans a local metadata directory for root documents in the layouts
//! TUF repositories publish: the current `root.json`, versioned
//! `root.<N>.json` files, and consistent-snapshot style `<N>.root.json`
//! files. Only documents that actually exist on disk are surfaced.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use tufdiff_core::errors::{Result, TufDiffError};
use tufdiff_core::history::RootHistory;
use tufdiff_core::model::{parse_root_envelope_bytes, SignedRootEnvelope};

/// Root history resolved from a local TUF metadata directory.
pub struct FsRootHistory {
    metadata_dir: PathBuf,
}

impl FsRootHistory {
    pub fn new(metadata_dir: impl Into<PathBuf>) -> Self {
        Self {
            metadata_dir: metadata_dir.into(),
        }
    }

    /// Discover every root version present in the directory.
    ///
    /// Versioned filenames are trusted for the version number; the
    /// unversioned `root.json` is parsed to learn its version and fills
    /// a slot only when no dedicated versioned file exists for it. Files
    /// that fail to parse are skipped with a warning rather than
    /// breaking discovery.
    fn scan(&self) -> Result<BTreeMap<u64, PathBuf>> {
        let mut versions: BTreeMap<u64, PathBuf> = BTreeMap::new();
        let mut current_root: Option<PathBuf> = None;

        for entry in fs::read_dir(&self.metadata_dir)? {
            let path = entry?.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if name == "root.json" {
                current_root = Some(path);
            } else if let Some(version) = versioned_root_file(name) {
                versions.insert(version, path);
            }
        }

        if let Some(path) = current_root {
            match read_root_version(&path) {
                Ok(version) => {
                    versions.entry(version).or_insert(path);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "skipping unparseable root.json");
                }
            }
        }

        debug!(
            dir = %self.metadata_dir.display(),
            count = versions.len(),
            "discovered root versions"
        );
        Ok(versions)
    }
}

impl RootHistory for FsRootHistory {
    fn list_available_versions(&self) -> Result<Vec<u64>> {
        // Newest first
        Ok(self.scan()?.keys().rev().copied().collect())
    }

    fn load_by_version(&self, version: u64) -> Result<SignedRootEnvelope> {
        let versions = self.scan()?;
        let path = versions
            .get(&version)
            .ok_or(TufDiffError::NotFound { version })?;
        let bytes = fs::read(path)?;
        parse_root_envelope_bytes(&bytes)
    }
}

/// Extract the version number from a versioned root filename, if any.
fn versioned_root_file(name: &str) -> Option<u64> {
    let stem = name
        .strip_prefix("root.")
        .and_then(|rest| rest.strip_suffix(".json"))
        .or_else(|| name.strip_suffix(".root.json"))?;
    stem.parse().ok().filter(|v| *v > 0)
}

fn read_root_version(path: &Path) -> Result<u64> {
    let bytes = fs::read(path)?;
    Ok(parse_root_envelope_bytes(&bytes)?.signed.version)
}
