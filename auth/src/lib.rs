//! Bearer token utilities library
//!
//! Provides the stateless token infrastructure the HTTP services build on:
//! - JWT token issuance (HS256, symmetric server secret)
//! - JWT token verification (signature + not-before bound)
//!
//! Tokens are never persisted server-side; each one is verified independently
//! on every protected request. Services adapt these primitives to their own
//! routes rather than sharing handler code.
//!
//! # Examples
//!
//! ```
//! use auth::TokenService;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!");
//! let token = tokens.issue("alice").unwrap();
//! let claims = tokens.verify(&token).unwrap();
//! assert_eq!(claims.user, "alice");
//! ```

pub mod jwt;

// Re-export commonly used items
pub use jwt::AuthError;
pub use jwt::Claims;
pub use jwt::SigningError;
pub use jwt::TokenService;
