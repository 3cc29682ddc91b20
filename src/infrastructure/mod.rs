//! External concerns: database access and migrations.

pub mod database;

pub use database::{init_database, DatabaseConfig};
