pub use super::breach_record::Entity as BreachRecord;
pub use super::breach_user::Entity as BreachUser;
