//! Server application core modules.
//!
//! This module contains all server-side functionality for the breach monitoring service,
//! including HTTP routing, database access, breach synchronization against the Have I Been
//! Pwned API, email notifications, and the weekly notification sweep.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod mail;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
