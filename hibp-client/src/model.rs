//! Wire model of the breached account endpoint.

use serde::{Deserialize, Serialize};

/// A single breach as returned by `GET /breachedaccount/{account}?truncateResponse=false`.
///
/// Every field falls back to its default when absent so partially populated
/// upstream entries still decode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BreachEntry {
    /// Stable upstream identifier of the breach, e.g. "Adobe".
    pub name: String,
    /// Display title.
    pub title: String,
    /// Domain of the breached service, empty when unknown.
    pub domain: String,
    /// Date-only string, `YYYY-MM-DD`.
    pub breach_date: Option<String>,
    /// UTC timestamp string, `YYYY-MM-DDTHH:MM:SSZ`.
    pub modified_date: Option<String>,
    /// HTML fragment describing the incident.
    pub description: Option<String>,
    pub logo_path: Option<String>,
    /// Number of accounts exposed.
    pub pwn_count: i64,
    /// Kinds of data exposed, e.g. "Passwords".
    pub data_classes: Vec<String>,
}
