pub mod claims;
pub mod errors;
pub mod service;

pub use claims::Claims;
pub use errors::AuthError;
pub use errors::SigningError;
pub use service::TokenService;
