//! Service layer for business logic.
//!
//! Services coordinate repositories, the breach API client and the mail transport. They
//! receive every collaborator explicitly at construction time and hold no global state.

pub mod breach;
pub mod notification;
