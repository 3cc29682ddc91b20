//! SeaORM entities for the RBAC schema.

pub mod form;
pub mod form_module;
pub mod module;
pub mod person;
pub mod rol;
pub mod rol_form;
pub mod user;
pub mod user_rol;
