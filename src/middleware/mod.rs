//! Authentication and authorization extractors.
//!
//! - [`auth`]: [`auth::AuthUser`], the bearer-token guard
//! - [`role`]: policy extractors ([`role::RequireAuthenticated`], [`role::RequireAdmin`])
//!
//! # Authentication Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. The guard verifies signature and expiry and extracts the claims
//! 3. The route's policy is enforced against the claims' role
//! 4. Handler executes if all checks pass
//!
//! Public routes take no extractor at all.

pub mod auth;
pub mod role;
