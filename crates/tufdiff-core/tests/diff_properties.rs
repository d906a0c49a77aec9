//! Property tests for the differ laws.
//!
//! Each differ must satisfy the identity law (diffing a document against
//! itself is empty) and the symmetry law (swapping old/new flips statuses
//! and booleans but never invents or drops entries).

use proptest::prelude::*;
use std::collections::BTreeMap;
use tufdiff_core::diff::keys::diff_keys;
use tufdiff_core::diff::model::KeyDiffStatus;
use tufdiff_core::diff::roles::diff_roles;
use tufdiff_core::diff::signatures::diff_signatures;
use tufdiff_core::model::{KeyRecord, RoleRecord, SignatureEntry};

fn key_record() -> impl Strategy<Value = KeyRecord> {
    (
        prop_oneof![Just("ed25519"), Just("ecdsa-sha2-nistp256")],
        "[a-c]",
    )
        .prop_map(|(keytype, public)| KeyRecord {
            keytype: keytype.to_string(),
            scheme: keytype.to_string(),
            keyval: serde_json::json!({ "public": public }),
            extra: BTreeMap::new(),
        })
}

fn key_map() -> impl Strategy<Value = BTreeMap<String, KeyRecord>> {
    proptest::collection::btree_map("k[0-5]", key_record(), 0..5)
}

fn role_record() -> impl Strategy<Value = RoleRecord> {
    (0u32..4, proptest::collection::vec("k[0-5]", 0..4))
        .prop_map(|(threshold, keyids)| RoleRecord { threshold, keyids })
}

fn role_map() -> impl Strategy<Value = BTreeMap<String, RoleRecord>> {
    proptest::collection::btree_map(
        prop_oneof![
            Just("root".to_string()),
            Just("timestamp".to_string()),
            Just("snapshot".to_string()),
            Just("targets".to_string()),
        ],
        role_record(),
        0..4,
    )
}

fn signature_list() -> impl Strategy<Value = Vec<SignatureEntry>> {
    proptest::collection::vec(
        ("k[0-3]", prop_oneof![Just(""), Just("aa"), Just("bb")])
            .prop_map(|(keyid, sig)| SignatureEntry {
                keyid,
                sig: sig.to_string(),
            }),
        0..6,
    )
}

proptest! {
    #[test]
    fn identity_law_keys(keys in key_map()) {
        prop_assert!(diff_keys(&keys, &keys).is_empty());
    }

    #[test]
    fn identity_law_roles(roles in role_map()) {
        prop_assert!(diff_roles(&roles, &roles).is_empty());
    }

    #[test]
    fn identity_law_signatures(sigs in signature_list(), keys in key_map()) {
        prop_assert!(diff_signatures(&sigs, &sigs, &keys, &keys).is_empty());
    }

    #[test]
    fn completeness_one_decision_per_key_id(old in key_map(), new in key_map()) {
        let diffs = diff_keys(&old, &new);

        // No key id produces more than one entry
        let mut ids: Vec<&str> = diffs.iter().map(|d| d.keyid.as_str()).collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);

        // Every key id in the union gets exactly one decision: an entry,
        // or "unchanged" (present in both with equal records)
        let union: Vec<&String> = old.keys().chain(new.keys()).collect();
        for keyid in union {
            let has_entry = diffs.iter().any(|d| &d.keyid == keyid);
            let unchanged = matches!(
                (old.get(keyid), new.get(keyid)),
                (Some(o), Some(n)) if o == n
            );
            prop_assert!(has_entry != unchanged, "key {} skipped or double-counted", keyid);
        }
    }

    #[test]
    fn symmetry_law_keys(old in key_map(), new in key_map()) {
        let forward = diff_keys(&old, &new);
        let backward = diff_keys(&new, &old);
        prop_assert_eq!(forward.len(), backward.len());

        for f in &forward {
            let b = backward
                .iter()
                .find(|b| b.keyid == f.keyid)
                .expect("entry missing from reversed diff");
            match f.status {
                KeyDiffStatus::Added => prop_assert_eq!(b.status, KeyDiffStatus::Removed),
                KeyDiffStatus::Removed => prop_assert_eq!(b.status, KeyDiffStatus::Added),
                KeyDiffStatus::Changed => {
                    prop_assert_eq!(b.status, KeyDiffStatus::Changed);
                    prop_assert_eq!(&b.keytype, &f.old_keytype);
                    prop_assert_eq!(&b.old_keytype, &f.keytype);
                    prop_assert_eq!(&b.scheme, &f.old_scheme);
                    prop_assert_eq!(&b.old_scheme, &f.scheme);
                }
            }
        }
    }

    #[test]
    fn symmetry_law_roles(old in role_map(), new in role_map()) {
        let forward = diff_roles(&old, &new);
        let backward = diff_roles(&new, &old);
        prop_assert_eq!(forward.len(), backward.len());

        for f in &forward {
            let b = backward
                .iter()
                .find(|b| b.role_name == f.role_name)
                .expect("role missing from reversed diff");
            let mut f_added = f.added_keyids.clone();
            let mut b_removed = b.removed_keyids.clone();
            f_added.sort_unstable();
            b_removed.sort_unstable();
            prop_assert_eq!(f_added, b_removed);
            prop_assert_eq!(f.old_threshold, b.new_threshold);
            prop_assert_eq!(f.new_threshold, b.old_threshold);
        }
    }

    #[test]
    fn symmetry_law_signatures(
        old in signature_list(),
        new in signature_list(),
        keys in key_map(),
    ) {
        let forward = diff_signatures(&old, &new, &keys, &keys);
        let backward = diff_signatures(&new, &old, &keys, &keys);
        prop_assert_eq!(forward.len(), backward.len());

        for (f, b) in forward.iter().zip(backward.iter()) {
            prop_assert_eq!(&f.keyid, &b.keyid);
            prop_assert_eq!(f.old_signed, b.new_signed);
            prop_assert_eq!(f.new_signed, b.old_signed);
        }
    }
}
