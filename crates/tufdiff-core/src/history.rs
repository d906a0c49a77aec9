//! Version history resolution contract.
//!
//! The diff engine never fetches anything itself; a history collaborator
//! delivers complete, owned documents before the engine is invoked.
//! Implementations live with the I/O they wrap (the CLI ships a
//! filesystem-backed one) and must surface only documents that really
//! exist, never fabricated history entries.

use crate::errors::Result;
use crate::model::SignedRootEnvelope;

/// Resolver for the trust history of a repository's root metadata.
pub trait RootHistory {
    /// All root versions the source can resolve, newest first.
    fn list_available_versions(&self) -> Result<Vec<u64>>;

    /// Load one root document by version number.
    ///
    /// # Errors
    ///
    /// - `NotFound` — the version does not exist in this history
    fn load_by_version(&self, version: u64) -> Result<SignedRootEnvelope>;
}

/// Whether two root versions are consecutive (N and N+1).
///
/// Valid trust-chain updates move from version N to N+1. This is a
/// policy signal for callers to warn about, not a precondition: the diff
/// engine produces a correct diff for any two distinct versions.
pub fn versions_consecutive(old_version: u64, new_version: u64) -> bool {
    new_version == old_version + 1
}
