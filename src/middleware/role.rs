//! Role policy extractors.
//!
//! Each extractor is the typed form of one [`RoutePolicy`]: a handler that
//! takes `RequireAdmin` can only run for admins, one that takes
//! `RequireAuthenticated` for any valid token. The decision itself is always
//! made by [`bookshelf_auth::enforce`].
//!
//! ```rust,ignore
//! pub async fn delete_book(
//!     State(state): State<AppState>,
//!     RequireAdmin(auth_user): RequireAdmin,
//!     Path(id): Path<i64>,
//! ) -> Result<StatusCode, AppError> {
//!     // Only executes for admins
//! }
//! ```

use bookshelf_auth::RoutePolicy;

/// Declares an extractor that admits only callers satisfying a policy.
#[macro_export]
macro_rules! require_policy {
    ($name:ident, $policy:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub $crate::middleware::auth::AuthUser);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = bookshelf_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                $crate::middleware::auth::AuthUser::authorize(parts, state, $policy)
                    .await?
                    .map($name)
                    .ok_or_else(|| bookshelf_core::AppError::unauthorized("Not authenticated"))
            }
        }
    };
}

require_policy!(RequireAuthenticated, RoutePolicy::Authenticated);
require_policy!(RequireAdmin, RoutePolicy::AdminOnly);
