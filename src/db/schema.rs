//! SQL DDL for the local keyword/token store.
//! SQLite-first design; can be adapted for other RDBMS.

/// Bumping this triggers a destructive recreate on open: there is no
/// migration path, the tables are dropped and rebuilt from the DDL.
pub const SCHEMA_VERSION: i64 = 1;

/// SQLite schema with:
/// - `keyword`: search history, `id` INTEGER PRIMARY KEY AUTOINCREMENT.
///   `key_name` carries no UNIQUE constraint; duplicate names are legal
///   and conflict handling applies to the primary key only.
/// - `token`: auth tokens. The app treats at most one row as meaningful
///   even though the table allows more.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS keyword (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    key_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS token (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    access_token TEXT NOT NULL,
    refresh_token TEXT NOT NULL,
    user_id TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_keyword_key_name ON keyword(key_name);
"#;

pub const SQLITE_DROP: &str = r#"
DROP TABLE IF EXISTS keyword;
DROP TABLE IF EXISTS token;
"#;
