//! Root diff computation engine.
//!
//! The core entry point is [`compare_roots`], which accepts two parsed
//! root documents plus their detached signature lists and produces a
//! [`RootDiff`]. [`compare_root_bytes`] layers envelope parsing on top
//! for callers holding raw document bytes.

use crate::diff::keys::diff_keys;
use crate::diff::model::RootDiff;
use crate::diff::roles::diff_roles;
use crate::diff::signatures::diff_signatures;
use crate::errors::{Result, TufDiffError};
use crate::model::{parse_root_envelope_bytes, RootMetadata, SignatureEntry};
use tracing::debug;

/// Compute a structured diff between two root metadata documents.
///
/// The caller is responsible for ordering the documents chronologically
/// (lower version = old); no reordering happens here. The three differs
/// run independently over their own slices of the input and their outputs
/// are bundled with the version/expiry fields verbatim. Pure function:
/// no I/O, no shared state, either a complete diff or an error.
///
/// # Errors
///
/// - `InvalidComparison` — both documents carry the same version
pub fn compare_roots(
    old: &RootMetadata,
    old_signatures: &[SignatureEntry],
    new: &RootMetadata,
    new_signatures: &[SignatureEntry],
) -> Result<RootDiff> {
    if old.version == new.version {
        return Err(TufDiffError::InvalidComparison {
            version: old.version,
        });
    }

    let key_diffs = diff_keys(&old.keys, &new.keys);
    let role_diffs = diff_roles(&old.roles, &new.roles);
    let signature_diffs = diff_signatures(old_signatures, new_signatures, &old.keys, &new.keys);

    debug!(
        old_version = old.version,
        new_version = new.version,
        key_diffs = key_diffs.len(),
        role_diffs = role_diffs.len(),
        signature_diffs = signature_diffs.len(),
        "computed root diff"
    );

    Ok(RootDiff {
        old_version: old.version,
        new_version: new.version,
        old_expires: old.expires.clone(),
        new_expires: new.expires.clone(),
        key_diffs,
        role_diffs,
        signature_diffs,
    })
}

/// Parse two raw signed-root documents and diff them.
///
/// # Errors
///
/// - `MalformedMetadata` / `MissingField` — either document fails
///   envelope validation
/// - `InvalidComparison` — both documents carry the same version
pub fn compare_root_bytes(old_bytes: &[u8], new_bytes: &[u8]) -> Result<RootDiff> {
    let old_envelope = parse_root_envelope_bytes(old_bytes)?;
    let new_envelope = parse_root_envelope_bytes(new_bytes)?;
    compare_roots(
        &old_envelope.signed,
        &old_envelope.signatures,
        &new_envelope.signed,
        &new_envelope.signatures,
    )
}
