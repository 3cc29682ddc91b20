//! Request handlers, one module per resource.

pub mod auth;
pub mod form_modules;
pub mod forms;
pub mod health;
pub mod modules;
pub mod persons;
pub mod rol_forms;
pub mod rols;
pub mod user_rols;
pub mod users;
