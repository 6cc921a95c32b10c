//! # Bookshelf API
//!
//! A book catalogue served over HTTP with axum and SQLite. Anyone may read
//! the catalogue; signed-in users may edit entries; admins may add and
//! remove them.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── middleware/       # Bearer-token guard and role policy extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Registration, login, current user
//! │   ├── books/       # Book CRUD
//! │   └── system/      # Health and Prometheus metrics
//! ├── docs.rs           # OpenAPI document
//! ├── router.rs         # Route table and layers
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Validating JSON and form extractors
//! ```
//!
//! Each feature module is split into `controller.rs` (HTTP handlers),
//! `service.rs` (queries and business rules) and `router.rs`.
//!
//! ## Roles
//!
//! | Policy | Routes |
//! |--------|--------|
//! | Public | `GET /books/`, `GET /books/{id}`, `/auth/*` (except `me`), `/metrics`, `/health` |
//! | Authenticated | `PUT /books/{id}`, `GET /auth/me` |
//! | Admin only | `POST /books/`, `DELETE /books/{id}` |
//!
//! Every account registered over HTTP is a `user`. Admins are made with
//! `bookshelf-cli create-admin` or `bookshelf-cli promote`.
//!
//! ## Quick Start
//!
//! ```bash
//! DATABASE_URL=sqlite://bookshelf.db?mode=rwc
//! JWT_SECRET=your-secure-secret-key
//! JWT_ACCESS_EXPIRY=1800
//! ```
//!
//! API documentation is served at `/docs` (Scalar) and `/openapi.json`.

pub mod docs;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

pub use bookshelf_auth;
pub use bookshelf_config;
pub use bookshelf_core;
pub use bookshelf_db;
