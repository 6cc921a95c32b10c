use anyhow::{Context, anyhow, bail};
use bookshelf_auth::Role;
use bookshelf_core::hash_password;
use bookshelf_models::User;
use sqlx::SqlitePool;

/// Inserts a new account with the `admin` role.
pub async fn create_admin(
    db: &SqlitePool,
    username: &str,
    password: &str,
) -> anyhow::Result<User> {
    if !(3..=50).contains(&username.chars().count()) {
        bail!("Username must be between 3 and 50 characters");
    }
    if password.chars().count() < 6 {
        bail!("Password must be at least 6 characters");
    }

    let hashed_password =
        hash_password(password).map_err(|e| anyhow!("Failed to hash password: {}", e.error))?;

    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, password_hash, role)
         VALUES ($1, $2, $3)
         ON CONFLICT (username) DO NOTHING
         RETURNING id, username, role",
    )
    .bind(username)
    .bind(&hashed_password)
    .bind(Role::Admin.as_str())
    .fetch_optional(db)
    .await
    .context("Failed to insert admin")?;

    user.ok_or_else(|| anyhow!("User '{username}' already exists"))
}

/// Changes the role of an existing account. Tokens issued before the change
/// keep their old role until they expire.
pub async fn set_role(db: &SqlitePool, username: &str, role: Role) -> anyhow::Result<User> {
    let user = sqlx::query_as::<_, User>(
        "UPDATE users SET role = $1 WHERE username = $2 RETURNING id, username, role",
    )
    .bind(role.as_str())
    .bind(username)
    .fetch_optional(db)
    .await
    .context("Failed to update role")?;

    user.ok_or_else(|| anyhow!("User '{username}' not found"))
}

pub async fn list_users(db: &SqlitePool) -> anyhow::Result<Vec<User>> {
    sqlx::query_as::<_, User>("SELECT id, username, role FROM users ORDER BY id")
        .fetch_all(db)
        .await
        .context("Failed to list users")
}
