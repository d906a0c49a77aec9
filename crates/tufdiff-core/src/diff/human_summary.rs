//! Human-readable summary renderer for root diffs.

use crate::diff::model::{KeyDiffStatus, RootDiff};
use crate::format::{format_expiration_date, format_key_id};

/// Render a human-readable Markdown/text summary of a [`RootDiff`].
///
/// Intended for review workflows and terminal display. Informational
/// only; the structured diff is the authoritative output.
pub fn render_human_summary(diff: &RootDiff) -> String {
    let mut out = String::new();

    out.push_str("## Root Metadata Changes\n\n");
    out.push_str(&format!(
        "**Version**: {} → {}\n**Expiry**: {} → {}\n\n",
        diff.old_version,
        diff.new_version,
        format_expiration_date(&diff.old_expires),
        format_expiration_date(&diff.new_expires),
    ));

    if diff.is_empty() {
        out.push_str("_No key, role, or signature changes detected._\n");
        return out;
    }

    if !diff.key_diffs.is_empty() {
        out.push_str("### Key Changes\n\n");
        for key in &diff.key_diffs {
            let label = key
                .keyowner
                .clone()
                .unwrap_or_else(|| format_key_id(&key.keyid));
            match key.status {
                KeyDiffStatus::Added => out.push_str(&format!(
                    "- **Added**: {} ({}/{})\n",
                    label,
                    key.keytype.as_deref().unwrap_or("?"),
                    key.scheme.as_deref().unwrap_or("?"),
                )),
                KeyDiffStatus::Removed => out.push_str(&format!(
                    "- **Removed**: {} (was {}/{})\n",
                    label,
                    key.old_keytype.as_deref().unwrap_or("?"),
                    key.old_scheme.as_deref().unwrap_or("?"),
                )),
                KeyDiffStatus::Changed => out.push_str(&format!(
                    "- **Changed**: {} ({}/{} → {}/{})\n",
                    label,
                    key.old_keytype.as_deref().unwrap_or("?"),
                    key.old_scheme.as_deref().unwrap_or("?"),
                    key.keytype.as_deref().unwrap_or("?"),
                    key.scheme.as_deref().unwrap_or("?"),
                )),
            }
        }
        out.push('\n');
    }

    if !diff.role_diffs.is_empty() {
        out.push_str("### Role Changes\n\n");
        for role in &diff.role_diffs {
            let mut parts: Vec<String> = Vec::new();
            if !role.added_keyids.is_empty() {
                let ids: Vec<String> =
                    role.added_keyids.iter().map(|id| format_key_id(id)).collect();
                parts.push(format!("added {}", ids.join(", ")));
            }
            if !role.removed_keyids.is_empty() {
                let ids: Vec<String> = role
                    .removed_keyids
                    .iter()
                    .map(|id| format_key_id(id))
                    .collect();
                parts.push(format!("removed {}", ids.join(", ")));
            }
            match (role.old_threshold, role.new_threshold) {
                (Some(old), Some(new)) => parts.push(format!("threshold {} → {}", old, new)),
                (None, Some(new)) => parts.push(format!("role added (threshold {})", new)),
                (Some(old), None) => parts.push(format!("role removed (threshold was {})", old)),
                (None, None) => {}
            }
            out.push_str(&format!("- **{}**: {}\n", role.role_name, parts.join("; ")));
        }
        out.push('\n');
    }

    if !diff.signature_diffs.is_empty() {
        out.push_str("### Signature Status\n\n");
        let required = diff
            .role_diffs
            .iter()
            .find(|r| r.role_name == "root")
            .and_then(|r| r.new_threshold)
            .unwrap_or(1);
        let signed_count = diff.signature_diffs.iter().filter(|s| s.new_signed).count();
        out.push_str(&format!(
            "Signed by **{}** out of **{}** required signers\n",
            signed_count, required
        ));
        let missing: Vec<String> = diff
            .signature_diffs
            .iter()
            .filter(|s| !s.new_signed)
            .map(|s| {
                s.keyowner
                    .clone()
                    .unwrap_or_else(|| "Unknown".to_string())
            })
            .collect();
        if !missing.is_empty() {
            out.push_str(&format!(
                "- Missing signatures from: {}\n",
                missing.join(", ")
            ));
        }
        out.push('\n');
    }

    out
}
