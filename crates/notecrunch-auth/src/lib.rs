//! # notecrunch-auth
//!
//! Authentication for NoteCrunch. Tokens are issued by an external
//! identity provider; this crate only verifies them and maps the verified
//! subject onto an internal user row.
//!
//! ## Modules
//!
//! - `jwt`: claims, JWKS key cache and the token verifier
//! - `identity`: subject-to-owner resolution (lazy user upsert)

pub mod identity;
pub mod jwt;

pub use identity::{IdentityResolver, VerifiedIdentity};
pub use jwt::{Claims, JwksCache, TokenVerifier};
