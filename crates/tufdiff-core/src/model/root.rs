//! Root metadata document model.
//!
//! Mirrors the canonical TUF root metadata JSON shape: a signed payload
//! (`version`, `expires`, `keys`, `roles`) wrapped in a detached signature
//! envelope. Maps use `BTreeMap` so that every enumeration over keys and
//! roles is deterministic.
//!
//! ## Required fields
//!
//! - `signed.version`: positive integer
//! - `signed.expires`: ISO 8601 timestamp string
//! - `signed.keys`: key-id → key record
//! - `signed.roles`: role-name → role record
//!
//! Everything else (`spec_version`, `consistent_snapshot`, repository
//! annotations) is optional and tolerated; unknown fields are retained in
//! `extra` rather than rejected.

use crate::errors::{Result, TufDiffError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest as _, Sha256};
use std::collections::{BTreeMap, BTreeSet};

/// Annotation carrying the human owner of a signing key.
pub const KEY_OWNER_ANNOTATION: &str = "x-tuf-on-ci-keyowner";

/// Annotation declaring a key as online (repository-held) signing material.
pub const ONLINE_URI_ANNOTATION: &str = "x-tuf-on-ci-online-uri";

/// Display label used for keys that carry the online-signing annotation.
pub const ONLINE_KEY_LABEL: &str = "Online Key";

/// One entry of the detached signature envelope.
///
/// Not part of the signed content itself. A document may carry zero, one,
/// or many entries per key id; only entries with a non-empty payload count
/// as "signed".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignatureEntry {
    /// Key id the signature claims to come from
    pub keyid: String,

    /// Signature payload (opaque bytes-as-string; empty = unsigned slot)
    #[serde(default)]
    pub sig: String,
}

impl SignatureEntry {
    /// Whether this entry counts as a signature at all.
    pub fn is_signed(&self) -> bool {
        !self.sig.is_empty()
    }
}

/// A public key record from the `keys` mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyRecord {
    /// Key algorithm family (e.g. "ed25519", "ecdsa-sha2-nistp256")
    pub keytype: String,

    /// Signature scheme (e.g. "ed25519")
    pub scheme: String,

    /// Opaque public key material; compared by deep equality only
    pub keyval: Value,

    /// Repository annotations and any unrecognised fields
    /// (e.g. `keyid_hash_algorithms`, `x-tuf-on-ci-*`)
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl KeyRecord {
    /// Resolve the human-readable owner label for this key.
    ///
    /// The explicit owner annotation wins; a key carrying only the
    /// online-signing annotation is labelled [`ONLINE_KEY_LABEL`]. Keys
    /// with neither have no owner metadata, which is not an error.
    pub fn owner_label(&self) -> Option<String> {
        if let Some(Value::String(owner)) = self.extra.get(KEY_OWNER_ANNOTATION) {
            return Some(owner.clone());
        }
        if self.extra.contains_key(ONLINE_URI_ANNOTATION) {
            return Some(ONLINE_KEY_LABEL.to_string());
        }
        None
    }

    /// Whether the key's owner metadata declares an online-signing
    /// annotation. This is the authoritative capability check; label
    /// string matching in the formatters is a display fallback only.
    pub fn is_online_key(&self) -> bool {
        self.extra.contains_key(ONLINE_URI_ANNOTATION)
    }

    /// Compute the key id as the SHA-256 of the key body's compact JSON
    /// encoding with lexicographically sorted fields.
    ///
    /// This matches the canonical-JSON key ids used by TUF repositories
    /// for key bodies whose strings need no escaping (the common case for
    /// base64/hex key material). Callers cross-checking ids against the
    /// `keys` mapping should treat a mismatch as a warning, not a failure.
    pub fn key_id(&self) -> Result<String> {
        let keytype = Value::String(self.keytype.clone());
        let scheme = Value::String(self.scheme.clone());
        let mut body: BTreeMap<&str, &Value> = BTreeMap::new();
        body.insert("keytype", &keytype);
        body.insert("scheme", &scheme);
        body.insert("keyval", &self.keyval);
        if let Some(algos) = self.extra.get("keyid_hash_algorithms") {
            body.insert("keyid_hash_algorithms", algos);
        }
        let canonical = serde_json::to_string(&body)?;
        let mut hasher = Sha256::new();
        hasher.update(canonical.as_bytes());
        Ok(hex::encode(hasher.finalize()))
    }
}

/// A role record from the `roles` mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoleRecord {
    /// Minimum number of distinct valid signatures required
    pub threshold: u32,

    /// Key ids authorised to sign for this role. Kept in wire order;
    /// membership comparisons use [`RoleRecord::key_id_set`].
    #[serde(default)]
    pub keyids: Vec<String>,
}

impl RoleRecord {
    /// The role's key ids as a set, for order-insensitive comparison.
    pub fn key_id_set(&self) -> BTreeSet<&str> {
        self.keyids.iter().map(|s| s.as_str()).collect()
    }
}

/// One version of the signed root-of-trust payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RootMetadata {
    /// Metadata type marker (always "root" in well-formed documents)
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,

    /// Document version; positive and monotonically increasing across
    /// the trust history
    pub version: u64,

    /// Expiry timestamp (ISO 8601 string; not interpreted here)
    pub expires: String,

    /// TUF specification version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spec_version: Option<String>,

    /// Whether the repository uses consistent-snapshot file naming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistent_snapshot: Option<bool>,

    /// Trusted keys by key id
    pub keys: BTreeMap<String, KeyRecord>,

    /// Role definitions by role name. Role records may reference key ids
    /// absent from `keys`; the differs tolerate such dangling references.
    pub roles: BTreeMap<String, RoleRecord>,

    /// Unrecognised payload fields, retained for forward compatibility
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// A root document together with its detached signature list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedRootEnvelope {
    /// Detached signature entries over the signed payload
    pub signatures: Vec<SignatureEntry>,

    /// The signed root metadata payload
    pub signed: RootMetadata,
}

/// Parse raw bytes into a typed `SignedRootEnvelope`.
///
/// Validation is staged so that failures carry field context: UTF-8
/// decode, JSON parse, envelope shape, required payload fields, then the
/// full typed deserialisation.
///
/// # Errors
///
/// - `MalformedMetadata` — bytes are not valid UTF-8, not valid JSON,
///   not an object, or `version` is not a positive integer
/// - `MissingField` — `signed`, `signatures`, or one of the payload's
///   required fields (`version`, `expires`, `keys`, `roles`) is absent
pub fn parse_root_envelope_bytes(bytes: &[u8]) -> Result<SignedRootEnvelope> {
    let text = std::str::from_utf8(bytes).map_err(|e| TufDiffError::MalformedMetadata {
        reason: format!("document is not valid UTF-8: {}", e),
    })?;

    let raw: Value = serde_json::from_str(text).map_err(|e| TufDiffError::MalformedMetadata {
        reason: format!("document is not valid JSON: {}", e),
    })?;

    let obj = raw.as_object().ok_or_else(|| TufDiffError::MalformedMetadata {
        reason: "document JSON root must be an object".to_string(),
    })?;

    for field in ["signatures", "signed"] {
        if !obj.contains_key(field) {
            return Err(TufDiffError::MissingField {
                field: field.to_string(),
            });
        }
    }

    let signed = obj["signed"]
        .as_object()
        .ok_or_else(|| TufDiffError::MalformedMetadata {
            reason: "`signed` must be an object".to_string(),
        })?;

    for field in ["version", "expires", "keys", "roles"] {
        if !signed.contains_key(field) {
            return Err(TufDiffError::MissingField {
                field: format!("signed.{}", field),
            });
        }
    }

    match signed["version"].as_u64() {
        Some(v) if v > 0 => {}
        _ => {
            return Err(TufDiffError::MalformedMetadata {
                reason: format!(
                    "`signed.version` must be a positive integer, got: {}",
                    signed["version"]
                ),
            })
        }
    }

    let envelope: SignedRootEnvelope =
        serde_json::from_value(raw).map_err(|e| TufDiffError::MalformedMetadata {
            reason: format!("failed to deserialize root envelope: {}", e),
        })?;

    Ok(envelope)
}
