//! Core domain types: error taxonomy and entity capabilities.

pub mod capabilities;
pub mod error;

pub use capabilities::{Activatable, ActiveFlag, Auditable};
pub use error::{ServiceError, ServiceResult};
