//! Database model type aliases.
//!
//! Short names for the sea-orm models from the generated `entity` crate.

/// Type alias for the registered user database model.
///
/// # Fields (from `entity::breach_user::Model`)
/// - `id` - Primary key, unique user identifier
/// - `name` - Display name used in notification emails
/// - `email` - Email address checked against the breach API (unique)
/// - `notifications_enabled` - Whether the user opted in to the weekly breach digest
/// - `created_at` - Timestamp when the user was registered
pub type UserModel = entity::breach_user::Model;

/// Type alias for the breach record database model.
///
/// One row per breach a user's email appears in. Within a user's records the pair
/// (`name`, `breach_date`) is unique.
///
/// # Fields (from `entity::breach_record::Model`)
/// - `id` - Primary key, database identifier
/// - `user_id` - Foreign key to the owning user
/// - `name` - Source name of the breach as reported upstream, e.g. "Adobe"
/// - `title` - Display title of the breach
/// - `domain` - Domain of the breached service, empty when unknown
/// - `breach_date` - Date the breach occurred (nullable)
/// - `added_at` - Timestamp when the breach was recorded for the user
/// - `modified_at` - Timestamp the breach was last modified upstream (nullable)
/// - `pwn_count` - Number of accounts affected
/// - `description` - HTML description of the breach (nullable)
/// - `logo_path` - URL of the breach logo (nullable)
/// - `data_classes` - Categories of exposed data
pub type BreachRecordModel = entity::breach_record::Model;
