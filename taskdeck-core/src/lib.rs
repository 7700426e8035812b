//! # TaskDeck Core Library
//!
//! This crate contains the shared data layer for the TaskDeck task tracker:
//! database models, connection pooling, migrations, and credential utilities
//! used by the API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their CRUD operations
//! - `db`: Connection pool management and the migration runner
//! - `auth`: Password hashing utilities
//! - `ids`: Generated identifiers and task codes
//! - `error`: Common error types

pub mod auth;
pub mod db;
pub mod error;
pub mod ids;
pub mod models;

/// Current version of the TaskDeck core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
