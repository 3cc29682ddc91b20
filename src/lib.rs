//! # RBAC Administration Backend
//!
//! Role-based access control administration service: persons, users, rols,
//! forms, modules and their assignments, exposed through uniform CRUD REST
//! endpoints with JWT authentication.
//!
//! ## Architecture
//!
//! - **domain**: error taxonomy and entity capability traits
//! - **application**: generic CRUD service, per-entity resource adapters,
//!   relationship queries, authentication use-cases
//! - **infrastructure**: SeaORM entities, migrations and the generic
//!   repository
//! - **auth**: JWT handling, password hashing and the request middleware
//! - **api**: REST handlers and router with Swagger documentation

pub mod api;
pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::migrator::Migrator;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use api::create_api_router;
