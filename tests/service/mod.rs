//! Tests for the breach synchronization service.

mod breach;
