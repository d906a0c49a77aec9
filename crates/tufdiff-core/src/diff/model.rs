//! Root diff output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Serialized field names use the camelCase wire shape consumed by display
//! layers; collections are emitted in deterministic order.

use serde::{Deserialize, Serialize};

/// What happened to a key entry between the two documents.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KeyDiffStatus {
    /// Key id present only in the new document
    Added,
    /// Key id present only in the old document
    Removed,
    /// Key id present in both with differing type, scheme, or material
    Changed,
}

/// Change to a single entry of the `keys` mapping.
///
/// Computed only for `keys`; role membership changes surface in
/// [`RoleDiff`] instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KeyDiff {
    /// Key id this entry describes
    pub keyid: String,

    /// Added, removed, or changed
    pub status: KeyDiffStatus,

    /// Key algorithm family in the new document (absent for removals)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keytype: Option<String>,

    /// Signature scheme in the new document (absent for removals)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// Key algorithm family in the old document (absent for additions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_keytype: Option<String>,

    /// Signature scheme in the old document (absent for additions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_scheme: Option<String>,

    /// Owner label resolved from the key's repository annotations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyowner: Option<String>,
}

/// Change to a single entry of the `roles` mapping.
///
/// Emitted only when the role changed: threshold delta, key membership
/// delta, or the role existing in only one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoleDiff {
    /// Role name (root, timestamp, snapshot, targets, or delegated)
    pub role_name: String,

    /// Key ids authorised in the new document but not the old
    pub added_keyids: Vec<String>,

    /// Key ids authorised in the old document but not the new
    pub removed_keyids: Vec<String>,

    /// Old threshold; populated only when the threshold changed or the
    /// role was removed as a whole
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_threshold: Option<u32>,

    /// New threshold; populated only when the threshold changed or the
    /// role was added as a whole
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_threshold: Option<u32>,
}

/// A signed/unsigned status flip for one signing key.
///
/// Emitted only when the status actually changed; a key signed in both
/// documents produces no entry even if the signature bytes differ.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignatureDiff {
    /// Key id whose status flipped
    pub keyid: String,

    /// Whether the old document carried a non-empty signature for this key
    pub old_signed: bool,

    /// Whether the new document carries a non-empty signature for this key
    pub new_signed: bool,

    /// Owner label, resolved from the old document's keys first, then the
    /// new document's
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyowner: Option<String>,
}

/// The aggregate diff between two root metadata documents.
///
/// Constructed once per comparison by the engine, immutable afterwards,
/// and owned exclusively by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RootDiff {
    /// Version of the old document
    pub old_version: u64,

    /// Version of the new document
    pub new_version: u64,

    /// Expiry of the old document, verbatim
    pub old_expires: String,

    /// Expiry of the new document, verbatim
    pub new_expires: String,

    /// Per-key changes
    pub key_diffs: Vec<KeyDiff>,

    /// Per-role changes
    pub role_diffs: Vec<RoleDiff>,

    /// Signature status flips
    pub signature_diffs: Vec<SignatureDiff>,
}

impl RootDiff {
    /// Whether the comparison found no changes at all.
    pub fn is_empty(&self) -> bool {
        self.key_diffs.is_empty() && self.role_diffs.is_empty() && self.signature_diffs.is_empty()
    }
}
