//! Business layer: generic CRUD orchestration, per-entity resource
//! adapters, relationship queries and the authentication use-cases.

pub mod activation;
pub mod auth;
pub mod crud;
pub mod queries;
pub mod registry;
pub mod resource;
pub mod resources;

pub use activation::ActivationService;
pub use auth::{AuthResult, AuthService};
pub use crud::CrudService;
pub use queries::RelationQueries;
pub use registry::ServiceRegistry;
pub use resource::Resource;
