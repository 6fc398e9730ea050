//! Test fixture modules for database and HTTP mock creation.
//!
//! - `breach` - Breach records, upstream breach entries and breach API endpoints
//! - `user` - Registered users

pub mod breach;
pub mod user;
