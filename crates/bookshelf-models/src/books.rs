//! Book domain models and DTOs.

use bookshelf_core::serde::deserialize_nullable;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "author must be between 1 and 255 characters"))]
    pub author: String,
    pub description: Option<String>,
    pub year: Option<i32>,
}

/// Partial update: absent fields keep their stored value.
///
/// `description` and `year` can be cleared with an explicit `null`; a `null`
/// title or author is treated as absent so both stay non-null.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBookDto {
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255, message = "author must be between 1 and 255 characters"))]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i32>)]
    pub year: Option<Option<i32>>,
}

impl UpdateBookDto {
    /// Merges the present fields over `book`.
    pub fn apply(self, book: Book) -> Book {
        Book {
            id: book.id,
            title: self.title.unwrap_or(book.title),
            author: self.author.unwrap_or(book.author),
            description: self.description.unwrap_or(book.description),
            year: self.year.unwrap_or(book.year),
        }
    }
}
