//! Declarative per-route access policies.
//!
//! Every route declares one [`RoutePolicy`]; [`enforce`] is the only place
//! that decides whether the resolved identity may proceed.

use bookshelf_core::AppError;

use crate::claims::Claims;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Anyone, with or without a token.
    Public,
    /// Any holder of a valid token, whatever the role.
    Authenticated,
    /// Valid token with the `admin` role.
    AdminOnly,
}

/// Checks `identity` against `policy`.
///
/// A missing identity fails with 401 on protected routes; an identity whose
/// role is too weak fails with 403.
pub fn enforce(policy: RoutePolicy, identity: Option<&Claims>) -> Result<(), AppError> {
    match (policy, identity) {
        (RoutePolicy::Public, _) => Ok(()),
        (_, None) => Err(AppError::unauthorized("Not authenticated")),
        (RoutePolicy::Authenticated, Some(_)) => Ok(()),
        (RoutePolicy::AdminOnly, Some(claims)) if claims.role.is_admin() => Ok(()),
        (RoutePolicy::AdminOnly, Some(claims)) => Err(AppError::forbidden(format!(
            "Access denied. Administrator privileges required, but user has role: {}",
            claims.role
        ))),
    }
}
