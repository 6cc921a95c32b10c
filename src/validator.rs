//! Body extractors that deserialize and validate in one step.
//!
//! Deserialization failures (missing fields, wrong types, malformed bodies
//! or path segments) and `validator` rule violations all answer 422. Only a
//! missing or wrong `Content-Type` answers 400.

use anyhow::anyhow;
use axum::{
    Form, Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{FormRejection, JsonRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use bookshelf_core::AppError;

/// Turns a serde error text into a short client-facing message.
fn describe_body_error(error_msg: &str) -> String {
    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return format!("{} is required", field);
    }

    if error_msg.contains("invalid type") || error_msg.contains("invalid digit") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::MissingJsonContentType(_) => AppError::bad_request(anyhow!(
                    "Missing 'Content-Type: application/json' header"
                )),
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                    AppError::unprocessable(anyhow!(describe_body_error(&rejection.body_text())))
                }
                _ => AppError::bad_request(anyhow!("Invalid request body")),
            })?;

        value.validate().map_err(|errors| AppError::validation(&errors))?;

        Ok(ValidatedJson(value))
    }
}

/// `application/x-www-form-urlencoded` counterpart of [`ValidatedJson`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                FormRejection::InvalidFormContentType(_) => AppError::bad_request(anyhow!(
                    "Missing 'Content-Type: application/x-www-form-urlencoded' header"
                )),
                FormRejection::FailedToDeserializeForm(_)
                | FormRejection::FailedToDeserializeFormBody(_) => {
                    AppError::unprocessable(anyhow!(describe_body_error(&rejection.body_text())))
                }
                _ => AppError::bad_request(anyhow!("Invalid request body")),
            })?;

        value.validate().map_err(|errors| AppError::validation(&errors))?;

        Ok(ValidatedForm(value))
    }
}

/// [`Path`] whose parse failures answer 422 with the usual JSON error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "Path parameter parsing failed");
                AppError::unprocessable(anyhow!("Invalid path parameter"))
            })?;

        Ok(ValidatedPath(value))
    }
}
