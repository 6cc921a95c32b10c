use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{create_book, delete_book, get_book, list_books, update_book};

/// Book routes. The collection answers on both `/books` and `/books/`.
pub fn init_books_router() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/", get(list_books).post(create_book))
        .route(
            "/books/{id}",
            get(get_book).put(update_book).delete(delete_book),
        )
}
