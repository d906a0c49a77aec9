//! Role-set differ.

use crate::diff::model::RoleDiff;
use crate::model::RoleRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Compute per-role changes between two `roles` mappings.
///
/// One entry per role name in the union of both mappings, emitted only
/// when a change exists: a threshold delta, key membership delta, or the
/// role existing in only one document. Membership is compared as a set of
/// key ids, not by array order. Threshold fields are populated only when
/// the threshold itself changed (or the role was added/removed as a
/// whole); a role whose keys rotated under an unchanged threshold reports
/// no threshold values.
pub fn diff_roles(
    old_roles: &BTreeMap<String, RoleRecord>,
    new_roles: &BTreeMap<String, RoleRecord>,
) -> Vec<RoleDiff> {
    let role_names: BTreeSet<&String> = old_roles.keys().chain(new_roles.keys()).collect();

    let mut diffs = Vec::new();
    for role_name in role_names {
        match (old_roles.get(role_name), new_roles.get(role_name)) {
            (None, Some(new_role)) => diffs.push(RoleDiff {
                role_name: role_name.clone(),
                added_keyids: new_role.keyids.clone(),
                removed_keyids: Vec::new(),
                old_threshold: None,
                new_threshold: Some(new_role.threshold),
            }),
            (Some(old_role), None) => diffs.push(RoleDiff {
                role_name: role_name.clone(),
                added_keyids: Vec::new(),
                removed_keyids: old_role.keyids.clone(),
                old_threshold: Some(old_role.threshold),
                new_threshold: None,
            }),
            (Some(old_role), Some(new_role)) => {
                let old_set = old_role.key_id_set();
                let new_set = new_role.key_id_set();

                let added_keyids: Vec<String> = new_role
                    .keyids
                    .iter()
                    .filter(|id| !old_set.contains(id.as_str()))
                    .cloned()
                    .collect();
                let removed_keyids: Vec<String> = old_role
                    .keyids
                    .iter()
                    .filter(|id| !new_set.contains(id.as_str()))
                    .cloned()
                    .collect();

                let threshold_changed = old_role.threshold != new_role.threshold;

                if threshold_changed || !added_keyids.is_empty() || !removed_keyids.is_empty() {
                    diffs.push(RoleDiff {
                        role_name: role_name.clone(),
                        added_keyids,
                        removed_keyids,
                        old_threshold: threshold_changed.then_some(old_role.threshold),
                        new_threshold: threshold_changed.then_some(new_role.threshold),
                    });
                }
            }
            (None, None) => unreachable!("role name taken from the union of both mappings"),
        }
    }

    diffs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(threshold: u32, keyids: &[&str]) -> RoleRecord {
        RoleRecord {
            threshold,
            keyids: keyids.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn rolemap(entries: &[(&str, RoleRecord)]) -> BTreeMap<String, RoleRecord> {
        entries
            .iter()
            .map(|(name, r)| (name.to_string(), r.clone()))
            .collect()
    }

    #[test]
    fn test_identity_yields_no_diffs() {
        let roles = rolemap(&[
            ("root", role(2, &["a", "b"])),
            ("timestamp", role(1, &["c"])),
        ]);
        assert!(diff_roles(&roles, &roles).is_empty());
    }

    #[test]
    fn test_key_rotation_with_unchanged_threshold_omits_thresholds() {
        // Old version 3: root threshold 2 over [A, B]; new version 4: [A, C]
        let old = rolemap(&[("root", role(2, &["A", "B"]))]);
        let new = rolemap(&[("root", role(2, &["A", "C"]))]);
        let diffs = diff_roles(&old, &new);
        assert_eq!(diffs.len(), 1);
        let d = &diffs[0];
        assert_eq!(d.role_name, "root");
        assert_eq!(d.added_keyids, vec!["C".to_string()]);
        assert_eq!(d.removed_keyids, vec!["B".to_string()]);
        assert_eq!(d.old_threshold, None);
        assert_eq!(d.new_threshold, None);
    }

    #[test]
    fn test_threshold_only_change() {
        let old = rolemap(&[("root", role(2, &["a", "b"]))]);
        let new = rolemap(&[("root", role(3, &["a", "b"]))]);
        let diffs = diff_roles(&old, &new);
        assert_eq!(diffs.len(), 1);
        let d = &diffs[0];
        assert!(d.added_keyids.is_empty());
        assert!(d.removed_keyids.is_empty());
        assert_eq!(d.old_threshold, Some(2));
        assert_eq!(d.new_threshold, Some(3));
    }

    #[test]
    fn test_role_added_as_a_whole() {
        let old = BTreeMap::new();
        let new = rolemap(&[("snapshot", role(1, &["x", "y"]))]);
        let diffs = diff_roles(&old, &new);
        assert_eq!(diffs.len(), 1);
        let d = &diffs[0];
        assert_eq!(d.added_keyids, vec!["x".to_string(), "y".to_string()]);
        assert!(d.removed_keyids.is_empty());
        assert_eq!(d.old_threshold, None);
        assert_eq!(d.new_threshold, Some(1));
    }

    #[test]
    fn test_role_removed_as_a_whole() {
        let old = rolemap(&[("snapshot", role(1, &["x"]))]);
        let new = BTreeMap::new();
        let diffs = diff_roles(&old, &new);
        assert_eq!(diffs.len(), 1);
        let d = &diffs[0];
        assert!(d.added_keyids.is_empty());
        assert_eq!(d.removed_keyids, vec!["x".to_string()]);
        assert_eq!(d.old_threshold, Some(1));
        assert_eq!(d.new_threshold, None);
    }

    #[test]
    fn test_membership_is_set_based_not_order_based() {
        let old = rolemap(&[("targets", role(1, &["a", "b"]))]);
        let new = rolemap(&[("targets", role(1, &["b", "a"]))]);
        assert!(diff_roles(&old, &new).is_empty());
    }

    #[test]
    fn test_unchanged_roles_are_omitted() {
        let old = rolemap(&[
            ("root", role(2, &["a", "b"])),
            ("timestamp", role(1, &["c"])),
        ]);
        let new = rolemap(&[("root", role(2, &["a", "b"])), ("timestamp", role(1, &["d"]))]);
        let diffs = diff_roles(&old, &new);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].role_name, "timestamp");
    }

    #[test]
    fn test_duplicate_keyids_in_wire_order_do_not_double_count() {
        let old = rolemap(&[("root", role(2, &["a", "a", "b"]))]);
        let new = rolemap(&[("root", role(2, &["a", "b"]))]);
        assert!(diff_roles(&old, &new).is_empty());
    }
}
