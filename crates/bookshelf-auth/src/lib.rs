//! # Bookshelf Auth
//!
//! Authentication types, JWT utilities and role policies for the Bookshelf API.
//!
//! - [`claims`]: the access token payload
//! - [`jwt`]: token issuing and verification
//! - [`role`]: the `admin` / `user` role enum
//! - [`policy`]: per-route access policies and the single function enforcing them
//!
//! A request moves through three states: anonymous, authenticated (a valid
//! token was presented) and authorized (the token's role satisfies the
//! route's [`RoutePolicy`]). Tokens are stateless; nothing is stored server
//! side and a token stops working only when it expires.
//!
//! # Example
//!
//! ```ignore
//! use bookshelf_auth::{RoutePolicy, Role, create_access_token, enforce, verify_token};
//! use bookshelf_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token("alice", Role::User, &config)?;
//! let claims = verify_token(&token, &config)?;
//! enforce(RoutePolicy::Authenticated, Some(&claims))?;
//! ```

pub mod claims;
pub mod jwt;
pub mod policy;
pub mod role;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
pub use policy::{RoutePolicy, enforce};
pub use role::{ParseRoleError, Role};
