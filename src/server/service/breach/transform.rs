//! Mapping of breach API entries onto stored breach records.

use chrono::{NaiveDate, NaiveDateTime};
use hibp_client::model::BreachEntry;

use crate::server::data::breach::NewBreachRecord;

/// Format of the `BreachDate` field, e.g. `2013-10-04`
pub const BREACH_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the `ModifiedDate` field, always UTC, e.g. `2013-12-04T00:00:00Z`
pub const MODIFIED_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Maps a breach API entry onto the fields of a new breach record for `user_id`.
///
/// Never fails: missing or unparseable dates become `None`, other missing fields keep the
/// defaults the entry was decoded with. `added_at` is always `now`.
pub fn breach_entry_to_record(
    entry: BreachEntry,
    user_id: i32,
    now: NaiveDateTime,
) -> NewBreachRecord {
    NewBreachRecord {
        user_id,
        breach_date: parse_breach_date(entry.breach_date.as_deref()),
        modified_at: parse_modified_date(entry.modified_date.as_deref()),
        name: entry.name,
        title: entry.title,
        domain: entry.domain,
        added_at: now,
        pwn_count: entry.pwn_count,
        description: entry.description,
        logo_path: entry.logo_path,
        data_classes: entry.data_classes,
    }
}

/// Parses a `BreachDate` value, `None` when absent or malformed
pub fn parse_breach_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|value| NaiveDate::parse_from_str(value, BREACH_DATE_FORMAT).ok())
}

/// Parses a `ModifiedDate` value, `None` when absent or malformed
pub fn parse_modified_date(value: Option<&str>) -> Option<NaiveDateTime> {
    value.and_then(|value| NaiveDateTime::parse_from_str(value, MODIFIED_DATE_FORMAT).ok())
}
