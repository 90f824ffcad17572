//! Storage layer for comparison counters
//!
//! This module provides a thin abstraction over the SQLite database:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Counter upserts and lookups

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::ComparisonDatabase;
