//! # Bookshelf Models
//!
//! Domain models and DTOs for the Bookshelf API.
//!
//! - [`users`]: accounts, registration and login payloads
//! - [`books`]: the book resource and its create/update payloads
//!
//! Request DTOs derive [`validator::Validate`]; everything exposed through
//! the API derives [`utoipa::ToSchema`] for the OpenAPI document.

pub mod books;
pub mod users;

pub use books::{Book, CreateBookDto, UpdateBookDto};
pub use users::{LoginForm, RegisterRequestDto, TokenResponse, User};
