//! Signature-status differ.

use crate::diff::model::SignatureDiff;
use crate::model::{KeyRecord, SignatureEntry};
use std::collections::{BTreeMap, BTreeSet};

/// Collapse a signature list into per-key signed-ness.
///
/// Later entries for the same key id override earlier ones (last-wins).
/// Whether duplicate entries deserve rejection instead is an open
/// compatibility question; callers relying on this collapse should not
/// treat it as a verified-signature statement.
fn signed_status(entries: &[SignatureEntry]) -> BTreeMap<&str, bool> {
    let mut status = BTreeMap::new();
    for entry in entries {
        status.insert(entry.keyid.as_str(), entry.is_signed());
    }
    status
}

/// Compute signed/unsigned status flips between two signature lists.
///
/// The candidate set is every key id appearing in either raw list, signed
/// or not; an entry is emitted only when signed-ness actually flips.
/// Owner labels resolve against the old document's keys first, falling
/// back to the new document's; a key absent from both simply has no
/// label. Only presence of a non-empty payload matters, never the
/// signature bytes themselves.
pub fn diff_signatures(
    old_signatures: &[SignatureEntry],
    new_signatures: &[SignatureEntry],
    old_keys: &BTreeMap<String, KeyRecord>,
    new_keys: &BTreeMap<String, KeyRecord>,
) -> Vec<SignatureDiff> {
    let old_status = signed_status(old_signatures);
    let new_status = signed_status(new_signatures);

    let candidates: BTreeSet<&str> = old_status.keys().chain(new_status.keys()).copied().collect();

    let mut diffs = Vec::new();
    for keyid in candidates {
        let old_signed = old_status.get(keyid).copied().unwrap_or(false);
        let new_signed = new_status.get(keyid).copied().unwrap_or(false);

        if old_signed != new_signed {
            let keyowner = old_keys
                .get(keyid)
                .or_else(|| new_keys.get(keyid))
                .and_then(|key| key.owner_label());
            diffs.push(SignatureDiff {
                keyid: keyid.to_string(),
                old_signed,
                new_signed,
                keyowner,
            });
        }
    }

    diffs
}
