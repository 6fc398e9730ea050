//! Test utilities for the breach monitoring service.
//!
//! Tests declare their environment with [`TestBuilder`]: database tables, users and mocked
//! breach API endpoints. `build()` returns a [`TestContext`] holding an in-memory SQLite
//! database and a breach API client pointed at a local mock server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::breach::factory, TestBuilder, TestContext, TestError};
}
