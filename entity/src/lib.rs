//! SeaORM entities for the breach watch database.

pub mod prelude;

pub mod breach_record;
pub mod breach_user;
