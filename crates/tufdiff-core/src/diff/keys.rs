//! Key-set differ.

use crate::diff::model::{KeyDiff, KeyDiffStatus};
use crate::model::KeyRecord;
use std::collections::BTreeMap;

/// Compute per-key changes between two `keys` mappings.
///
/// Additions and changes are emitted first in new-map order, then pure
/// removals in old-map order. `keytype`, `scheme`, and the raw key
/// material are compared by deep equality; a key id never produces more
/// than one entry. Unchanged keys are omitted.
pub fn diff_keys(
    old_keys: &BTreeMap<String, KeyRecord>,
    new_keys: &BTreeMap<String, KeyRecord>,
) -> Vec<KeyDiff> {
    let mut diffs = Vec::new();

    for (keyid, new_key) in new_keys {
        match old_keys.get(keyid) {
            None => diffs.push(KeyDiff {
                keyid: keyid.clone(),
                status: KeyDiffStatus::Added,
                keytype: Some(new_key.keytype.clone()),
                scheme: Some(new_key.scheme.clone()),
                old_keytype: None,
                old_scheme: None,
                keyowner: new_key.owner_label(),
            }),
            Some(old_key) => {
                if old_key.keytype != new_key.keytype
                    || old_key.scheme != new_key.scheme
                    || old_key.keyval != new_key.keyval
                {
                    diffs.push(KeyDiff {
                        keyid: keyid.clone(),
                        status: KeyDiffStatus::Changed,
                        keytype: Some(new_key.keytype.clone()),
                        scheme: Some(new_key.scheme.clone()),
                        old_keytype: Some(old_key.keytype.clone()),
                        old_scheme: Some(old_key.scheme.clone()),
                        keyowner: new_key.owner_label(),
                    });
                }
            }
        }
    }

    for (keyid, old_key) in old_keys {
        if !new_keys.contains_key(keyid) {
            diffs.push(KeyDiff {
                keyid: keyid.clone(),
                status: KeyDiffStatus::Removed,
                keytype: None,
                scheme: None,
                old_keytype: Some(old_key.keytype.clone()),
                old_scheme: Some(old_key.scheme.clone()),
                keyowner: old_key.owner_label(),
            });
        }
    }

    diffs
}
