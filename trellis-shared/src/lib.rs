//! # Trellis Shared Library
//!
//! This crate contains the data layer shared by the Trellis API server:
//! connection pooling, migrations, and the database models.
//!
//! ## Module Organization
//!
//! - `db`: PostgreSQL pool construction and migration runner
//! - `models`: Database models and their persistence operations

pub mod db;
pub mod models;

/// Current version of the Trellis shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
