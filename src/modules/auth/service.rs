use sqlx::SqlitePool;
use tracing::instrument;

use bookshelf_auth::{Role, create_access_token};
use bookshelf_config::JwtConfig;
use bookshelf_core::{AppError, hash_password, verify_password};
use bookshelf_models::{LoginForm, RegisterRequestDto, TokenResponse, User};

pub struct AuthService;

impl AuthService {
    /// Creates a plain `user` account. Admin rights are only ever granted
    /// out of band (see `bookshelf-cli promote`).
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn register_user(db: &SqlitePool, dto: RegisterRequestDto) -> Result<User, AppError> {
        let existing_user = Self::find_by_username(db, &dto.username).await?;

        if existing_user.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Username already registered"
            )));
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash, role)
             VALUES ($1, $2, $3)
             RETURNING id, username, role",
        )
        .bind(&dto.username)
        .bind(&hashed_password)
        .bind(Role::User.as_str())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    return AppError::bad_request(anyhow::anyhow!("Username already registered"));
                }
            }
            AppError::from(e)
        })?;

        Ok(user)
    }

    /// Checks a username/password pair against the credential store.
    ///
    /// Unknown users and wrong passwords produce the same 401.
    #[instrument(skip(db, password))]
    pub async fn authenticate(
        db: &SqlitePool,
        username: &str,
        password: &str,
    ) -> Result<User, AppError> {
        #[derive(sqlx::FromRow)]
        struct UserWithPassword {
            id: i64,
            username: String,
            password_hash: String,
            #[sqlx(try_from = "String")]
            role: Role,
        }

        let user_with_password = sqlx::query_as::<_, UserWithPassword>(
            "SELECT id, username, password_hash, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::unauthorized("Incorrect username or password"))?;

        let is_valid = verify_password(password, &user_with_password.password_hash)?;

        if !is_valid {
            return Err(AppError::unauthorized("Incorrect username or password"));
        }

        Ok(User {
            id: user_with_password.id,
            username: user_with_password.username,
            role: user_with_password.role,
        })
    }

    #[instrument(skip(db, form, jwt_config), fields(username = %form.username))]
    pub async fn login_user(
        db: &SqlitePool,
        form: LoginForm,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let user = Self::authenticate(db, &form.username, &form.password).await?;

        let access_token = create_access_token(&user.username, user.role, jwt_config)?;

        Ok(TokenResponse::bearer(access_token))
    }

    #[instrument(skip(db))]
    pub async fn find_by_username(
        db: &SqlitePool,
        username: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, role FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
