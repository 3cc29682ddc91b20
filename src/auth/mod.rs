//! JWT authentication: token handling, password hashing and the Axum
//! middleware that guards the protected routes.

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{create_token, verify_token, Claims, JwtConfig};
pub use middleware::{auth_middleware, AuthState, AuthenticatedUser};
