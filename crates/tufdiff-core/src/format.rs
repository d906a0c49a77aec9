//! Presentation formatters.
//!
//! Pure helpers turning raw metadata fields (ISO timestamps, key ids,
//! owner labels) into human-readable strings. Consumed by rendering
//! layers; none of these participate in diff decisions.

use chrono::{DateTime, Datelike as _, Months, Utc};

use crate::model::root::ONLINE_KEY_LABEL;

/// Key ids historically used by repositories for online signing before
/// the annotation existed. Display fallback data only.
const LEGACY_ONLINE_KEY_IDS: &[&str] = &["0c87432c", "5e3a4021"];

/// Format an expiration timestamp for display, e.g. `"Mar 5, 2026 14:30 UTC"`.
///
/// Unparseable input is returned unchanged rather than failing.
pub fn format_expiration_date(date_string: &str) -> String {
    match DateTime::parse_from_rfc3339(date_string) {
        Ok(date) => date
            .with_timezone(&Utc)
            .format("%b %-d, %Y %H:%M UTC")
            .to_string(),
        Err(_) => date_string.to_string(),
    }
}

/// Format the timespan until expiry in human-readable form.
///
/// `now` is an explicit parameter so the function stays pure; callers
/// pass `Utc::now()`. Produces `"expires in 1 year and 2 months (Mar 5,
/// 2027)"` or `"expired on Mar 5, 2024"`. When the timestamp cannot be
/// parsed, falls back to `"expires on <raw input>"`.
pub fn format_expiry_timespan(expiry_date: &str, now: DateTime<Utc>) -> String {
    let expiry = match DateTime::parse_from_rfc3339(expiry_date) {
        Ok(date) => date.with_timezone(&Utc),
        Err(_) => return format!("expires on {}", expiry_date),
    };

    if expiry < now {
        return format!("expired on {}", expiry.format("%b %-d, %Y"));
    }

    let months_total = full_months_between(now, expiry);
    let years = months_total / 12;
    let remaining_months = months_total % 12;
    let days = (expiry - now).num_days() % 30;

    let mut timespan = String::new();
    if years > 0 {
        timespan.push_str(&plural(years, "year"));
        if remaining_months > 0 {
            timespan.push_str(" and ");
            timespan.push_str(&plural(remaining_months, "month"));
        }
    } else if remaining_months > 0 {
        timespan.push_str(&plural(remaining_months, "month"));
        if days > 0 {
            timespan.push_str(" and ");
            timespan.push_str(&plural(days, "day"));
        }
    } else {
        timespan.push_str(&plural(days, "day"));
    }

    format!("expires in {} ({})", timespan, expiry.format("%b %-d, %Y"))
}

/// Number of full months elapsed between two instants.
fn full_months_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    let mut months = (i64::from(to.year()) - i64::from(from.year())) * 12
        + (i64::from(to.month()) - i64::from(from.month()));
    if months > 0 {
        // Step back when the final month is incomplete
        let anchor = from.checked_add_months(Months::new(months as u32));
        if anchor.map(|a| a > to).unwrap_or(false) {
            months -= 1;
        }
    }
    months.max(0)
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Truncate a key id to its first 8 characters for display.
pub fn truncate_key_id(keyid: &str) -> &str {
    match keyid.char_indices().nth(8) {
        Some((idx, _)) => &keyid[..idx],
        None => keyid,
    }
}

/// Format a key id (or resolved owner label) for display.
///
/// Owner handles already in `@name` form and the online-key label pass
/// through unchanged; hex key ids are truncated and `@`-prefixed so they
/// read like handles alongside real owner names.
pub fn format_key_id(keyid: &str) -> String {
    if keyid.starts_with('@') {
        return keyid.to_string();
    }

    if keyid.eq_ignore_ascii_case(ONLINE_KEY_LABEL) {
        return keyid.to_string();
    }

    if !keyid.is_empty() && keyid.chars().all(|c| c.is_ascii_hexdigit()) {
        return format!("@{}", truncate_key_id(keyid));
    }

    format!("@{}", keyid)
}

/// Display-layer fallback for spotting online keys by label alone.
///
/// Known-weak heuristic: matches the online-key label, the substring
/// "online", and two historical hardcoded key-id prefixes. The
/// authoritative capability check is the key record's online-signing
/// annotation (`KeyRecord::is_online_key`); never use this as a security
/// boundary.
pub fn is_online_key_label(keyid: &str) -> bool {
    if keyid.eq_ignore_ascii_case(ONLINE_KEY_LABEL) {
        return true;
    }
    keyid.to_ascii_lowercase().contains("online") || LEGACY_ONLINE_KEY_IDS.contains(&keyid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_expiration_date() {
        assert_eq!(
            format_expiration_date("2026-03-05T14:30:00Z"),
            "Mar 5, 2026 14:30 UTC"
        );
    }

    #[test]
    fn test_format_expiration_date_normalizes_offsets_to_utc() {
        assert_eq!(
            format_expiration_date("2026-03-05T14:30:00+02:00"),
            "Mar 5, 2026 12:30 UTC"
        );
    }

    #[test]
    fn test_format_expiration_date_passes_through_garbage() {
        assert_eq!(format_expiration_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn test_timespan_years_and_months() {
        assert_eq!(
            format_expiry_timespan("2027-10-20T00:00:00Z", now()),
            "expires in 1 year and 2 months (Oct 20, 2027)"
        );
    }

    #[test]
    fn test_timespan_months_and_days() {
        assert_eq!(
            format_expiry_timespan("2026-10-20T00:00:00Z", now()),
            "expires in 2 months and 14 days (Oct 20, 2026)"
        );
    }

    #[test]
    fn test_timespan_days_only() {
        assert_eq!(
            format_expiry_timespan("2026-08-16T12:00:00Z", now()),
            "expires in 10 days (Aug 16, 2026)"
        );
    }

    #[test]
    fn test_timespan_expired() {
        assert_eq!(
            format_expiry_timespan("2024-02-01T00:00:00Z", now()),
            "expired on Feb 1, 2024"
        );
    }

    #[test]
    fn test_timespan_unparseable_falls_back() {
        assert_eq!(
            format_expiry_timespan("someday", now()),
            "expires on someday"
        );
    }

    #[test]
    fn test_timespan_singular_units() {
        assert_eq!(
            format_expiry_timespan("2026-08-07T13:00:00Z", now()),
            "expires in 1 day (Aug 7, 2026)"
        );
    }

    #[test]
    fn test_truncate_key_id() {
        assert_eq!(truncate_key_id("0123456789abcdef"), "01234567");
        assert_eq!(truncate_key_id("short"), "short");
    }

    #[test]
    fn test_format_key_id_variants() {
        assert_eq!(format_key_id("@alice"), "@alice");
        assert_eq!(format_key_id("Online Key"), "Online Key");
        assert_eq!(format_key_id("0123456789abcdef"), "@01234567");
        assert_eq!(format_key_id("not hex"), "@not hex");
    }

    #[test]
    fn test_online_key_label_heuristic() {
        assert!(is_online_key_label("Online Key"));
        assert!(is_online_key_label("online key"));
        assert!(is_online_key_label("0c87432c"));
        assert!(is_online_key_label("5e3a4021"));
        assert!(!is_online_key_label("@alice"));
        assert!(!is_online_key_label("0123456789abcdef"));
    }
}
