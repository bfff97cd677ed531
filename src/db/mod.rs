//! Local persistence: search-keyword history and the auth token.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: storage handles with watch-based reactive reads

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{Keyword, Token};
pub use schema::{SCHEMA_VERSION, SQLITE_INIT};
pub use sqlite::{KeywordStorage, SqlitePool, TokenStorage, open_pool};
