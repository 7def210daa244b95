pub mod claims;
pub mod google;
pub mod guard;
pub mod jwt;
pub mod middleware;
pub mod password;

pub use claims::Claims;
pub use google::{GoogleProfile, GoogleTokenVerifier};
pub use guard::{can_mutate, require_can_mutate};
pub use jwt::JwtService;
pub use middleware::{AuthMiddleware, AuthenticatedUser};
