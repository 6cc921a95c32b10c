use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};

use bookshelf_auth::{Claims, Role, RoutePolicy, enforce, verify_token};
use bookshelf_core::AppError;

use crate::state::AppState;

/// Extractor that validates the bearer token and provides the caller's claims.
///
/// Rejects with 401 when the header is missing, is not a bearer credential,
/// or carries an invalid or expired token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn username(&self) -> &str {
        &self.0.sub
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    /// Resolves the caller's identity without requiring one.
    ///
    /// Returns `Ok(None)` when no `Authorization` header was sent. A header
    /// that is present but unusable is always an error.
    pub async fn resolve(parts: &mut Parts, state: &AppState) -> Result<Option<Self>, AppError> {
        match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await {
            Ok(TypedHeader(Authorization(bearer))) => {
                let claims = verify_token(bearer.token(), &state.jwt_config)?;
                Ok(Some(AuthUser(claims)))
            }
            Err(rejection) if rejection.is_missing() => Ok(None),
            Err(_) => Err(AppError::unauthorized(
                "Invalid authorization header format",
            )),
        }
    }

    /// Resolves the identity and checks it against `policy`.
    pub async fn authorize(
        parts: &mut Parts,
        state: &AppState,
        policy: RoutePolicy,
    ) -> Result<Option<Self>, AppError> {
        let identity = Self::resolve(parts, state).await?;
        enforce(policy, identity.as_ref().map(|user| &user.0))?;
        Ok(identity)
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Self::authorize(parts, state, RoutePolicy::Authenticated)
            .await?
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))
    }
}
