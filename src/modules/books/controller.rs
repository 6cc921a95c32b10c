use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use bookshelf_core::AppError;
use bookshelf_models::{Book, CreateBookDto, UpdateBookDto};

use super::service::BookService;
use crate::middleware::role::{RequireAdmin, RequireAuthenticated};
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

/// List all books
#[utoipa::path(
    get,
    path = "/books/",
    responses(
        (status = 200, description = "All books ordered by id", body = Vec<Book>)
    ),
    tag = "Books"
)]
#[instrument(skip(state))]
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = BookService::list_books(&state.db).await?;
    Ok(Json(books))
}

/// Get a book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book found", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 422, description = "Invalid book id", body = ErrorResponse)
    ),
    tag = "Books"
)]
#[instrument(skip(state))]
pub async fn get_book(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::get_book(&state.db, id).await?;
    Ok(Json(book))
}

/// Create a book (admin only)
#[utoipa::path(
    post,
    path = "/books/",
    request_body = CreateBookDto,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Books"
)]
#[instrument(
    skip(state, dto),
    fields(username = %auth_user.username(), role = %auth_user.role())
)]
pub async fn create_book(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    ValidatedJson(dto): ValidatedJson<CreateBookDto>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::create_book(&state.db, dto).await?;
    state.metrics.track_book_mutation("create");
    Ok(Json(book))
}

/// Update a book
///
/// Any authenticated user may edit; omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/books/{id}",
    params(("id" = i64, Path, description = "Book id")),
    request_body = UpdateBookDto,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Books"
)]
#[instrument(
    skip(state, dto),
    fields(username = %auth_user.username(), role = %auth_user.role())
)]
pub async fn update_book(
    State(state): State<AppState>,
    RequireAuthenticated(auth_user): RequireAuthenticated,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateBookDto>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::update_book(&state.db, id, dto).await?;
    state.metrics.track_book_mutation("update");
    Ok(Json(book))
}

/// Delete a book (admin only)
#[utoipa::path(
    delete,
    path = "/books/{id}",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 204, description = "Book deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin role required", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Books"
)]
#[instrument(
    skip(state),
    fields(username = %auth_user.username(), role = %auth_user.role())
)]
pub async fn delete_book(
    State(state): State<AppState>,
    RequireAdmin(auth_user): RequireAdmin,
    ValidatedPath(id): ValidatedPath<i64>,
) -> Result<StatusCode, AppError> {
    BookService::delete_book(&state.db, id).await?;
    state.metrics.track_book_mutation("delete");
    Ok(StatusCode::NO_CONTENT)
}
