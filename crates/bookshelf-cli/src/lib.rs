//! # Bookshelf CLI
//!
//! Account administration that has no HTTP route:
//! creating admins and changing roles.
//!
//! ```ignore
//! use bookshelf_cli::admin::{create_admin, set_role};
//!
//! create_admin(&pool, "root", "s3cret!").await?;
//! set_role(&pool, "alice", Role::Admin).await?;
//! ```

pub mod admin;
