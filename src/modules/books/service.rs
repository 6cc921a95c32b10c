use sqlx::SqlitePool;
use tracing::instrument;

use bookshelf_core::AppError;
use bookshelf_models::{Book, CreateBookDto, UpdateBookDto};

pub struct BookService;

impl BookService {
    #[instrument(skip(db))]
    pub async fn list_books(db: &SqlitePool) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, description, year FROM books ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        Ok(books)
    }

    #[instrument(skip(db))]
    pub async fn get_book(db: &SqlitePool, id: i64) -> Result<Book, AppError> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, description, year FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Book not found")))
    }

    #[instrument(skip(db, dto), fields(title = %dto.title))]
    pub async fn create_book(db: &SqlitePool, dto: CreateBookDto) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author, description, year)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, author, description, year",
        )
        .bind(&dto.title)
        .bind(&dto.author)
        .bind(&dto.description)
        .bind(dto.year)
        .fetch_one(db)
        .await?;

        Ok(book)
    }

    /// Reads, merges and writes back inside one transaction so concurrent
    /// partial updates to the same row do not interleave.
    #[instrument(skip(db, dto))]
    pub async fn update_book(
        db: &SqlitePool,
        id: i64,
        dto: UpdateBookDto,
    ) -> Result<Book, AppError> {
        let mut tx = db.begin().await?;

        let existing = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, description, year FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Book not found")))?;

        let merged = dto.apply(existing);

        let book = sqlx::query_as::<_, Book>(
            "UPDATE books
             SET title = $1, author = $2, description = $3, year = $4
             WHERE id = $5
             RETURNING id, title, author, description, year",
        )
        .bind(&merged.title)
        .bind(&merged.author)
        .bind(&merged.description)
        .bind(merged.year)
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(book)
    }

    #[instrument(skip(db))]
    pub async fn delete_book(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Book not found")));
        }

        Ok(())
    }
}
