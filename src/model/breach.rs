//! Breach DTOs returned and accepted by the breach routes.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A breach stored for a user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct BreachDto {
    /// Internal ID of the breach record
    pub id: i32,
    /// ID of the user the breach was found for
    pub user_id: i32,
    /// Source name of the breach, e.g. "Adobe"
    pub name: String,
    /// Display title of the breach
    pub title: String,
    /// Domain of the breached service, empty when unknown
    pub domain: String,
    /// Date the breach occurred, if known
    pub breach_date: Option<NaiveDate>,
    /// When the breach was recorded for the user
    pub added_at: NaiveDateTime,
    /// When the breach was last modified upstream, if known
    pub modified_at: Option<NaiveDateTime>,
    /// Number of accounts affected by the breach
    pub pwn_count: i64,
    /// HTML description of the breach
    pub description: Option<String>,
    /// URL of the breach logo
    pub logo_path: Option<String>,
    /// Categories of data exposed, e.g. "Passwords"
    pub data_classes: Vec<String>,
}

impl From<entity::breach_record::Model> for BreachDto {
    fn from(record: entity::breach_record::Model) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name,
            title: record.title,
            domain: record.domain,
            breach_date: record.breach_date,
            added_at: record.added_at,
            modified_at: record.modified_at,
            pwn_count: record.pwn_count,
            description: record.description,
            logo_path: record.logo_path,
            data_classes: record.data_classes.into_inner(),
        }
    }
}

/// Query parameters for paginated breach listings
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of records to skip, defaults to 0
    pub skip: Option<u64>,
    /// Maximum number of records to return, defaults to and is capped at 100
    pub limit: Option<u64>,
}

/// Request body for sending a single breach alert email
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct NotificationRequestDto {
    /// Recipient address
    pub email: String,
    /// Title of the breach shown in the subject and body
    pub title: String,
    /// Date of the breach as it should be displayed
    pub date: String,
    /// Description of the breach, rendered as escaped text
    pub description: String,
    /// Image shown alongside the alert
    pub logo_path: String,
}
