use crate::db::models::{Keyword, Token};
use crate::db::schema::{SCHEMA_VERSION, SQLITE_DROP, SQLITE_INIT};
use crate::error::ClientError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tokio::sync::watch;
use tracing::warn;

pub type SqlitePool = Pool<Sqlite>;

/// Open (or create) the database and bring the schema up.
///
/// There is no migration path: a `user_version` mismatch drops both tables
/// and rebuilds them from the DDL, losing whatever was stored.
pub async fn open_pool(database_url: &str) -> Result<SqlitePool, ClientError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(ClientError::Database)?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    init_schema(&pool).await?;
    Ok(pool)
}

async fn init_schema(pool: &SqlitePool) -> Result<(), ClientError> {
    let (version,): (i64,) = sqlx::query_as("PRAGMA user_version")
        .fetch_one(pool)
        .await?;
    if version != 0 && version != SCHEMA_VERSION {
        warn!(
            found = version,
            expected = SCHEMA_VERSION,
            "schema version mismatch; recreating tables destructively"
        );
        exec_multi(pool, SQLITE_DROP).await?;
    }
    exec_multi(pool, SQLITE_INIT).await?;
    sqlx::query(&format!("PRAGMA user_version = {SCHEMA_VERSION}"))
        .execute(pool)
        .await?;
    Ok(())
}

/// Execute multiple statements (SQLite supports multi-commands but
/// sqlx::query doesn't).
async fn exec_multi(pool: &SqlitePool, ddl: &str) -> Result<(), ClientError> {
    for stmt in ddl.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

/// Search-keyword history over a shared pool.
///
/// Mutations made through a handle are republished to every `subscribe()`
/// receiver, so reads stay current without an explicit refresh.
#[derive(Clone)]
pub struct KeywordStorage {
    pool: SqlitePool,
    watch: watch::Sender<Vec<Keyword>>,
}

impl KeywordStorage {
    pub async fn new(pool: SqlitePool) -> Result<Self, ClientError> {
        let (tx, _) = watch::channel(Vec::new());
        let storage = Self { pool, watch: tx };
        storage.publish().await?;
        Ok(storage)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Insert a keyword. A primary-key collision is silently dropped
    /// (ignore-on-conflict), leaving the stored row unchanged. Id 0 asks
    /// the store to assign one.
    pub async fn insert(&self, keyword: &Keyword) -> Result<(), ClientError> {
        if keyword.id == 0 {
            sqlx::query("INSERT INTO keyword (key_name) VALUES (?)")
                .bind(&keyword.key_name)
                .execute(&self.pool)
                .await?;
        } else {
            sqlx::query("INSERT OR IGNORE INTO keyword (id, key_name) VALUES (?, ?)")
                .bind(keyword.id)
                .bind(&keyword.key_name)
                .execute(&self.pool)
                .await?;
        }
        self.publish().await
    }

    /// Full-row overwrite by primary key.
    pub async fn update(&self, keyword: &Keyword) -> Result<(), ClientError> {
        sqlx::query("UPDATE keyword SET key_name = ? WHERE id = ?")
            .bind(&keyword.key_name)
            .bind(keyword.id)
            .execute(&self.pool)
            .await?;
        self.publish().await
    }

    /// Remove by primary key. Deleting an absent row is a no-op.
    pub async fn delete(&self, keyword: &Keyword) -> Result<(), ClientError> {
        sqlx::query("DELETE FROM keyword WHERE id = ?")
            .bind(keyword.id)
            .execute(&self.pool)
            .await?;
        self.publish().await
    }

    /// Full history, ascending by name.
    pub async fn all(&self) -> Result<Vec<Keyword>, ClientError> {
        let rows = sqlx::query_as::<_, Keyword>(
            "SELECT id, key_name FROM keyword ORDER BY key_name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Keyword>, ClientError> {
        let row = sqlx::query_as::<_, Keyword>("SELECT id, key_name FROM keyword WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn get_by_name(&self, key_name: &str) -> Result<Option<Keyword>, ClientError> {
        let row = sqlx::query_as::<_, Keyword>(
            "SELECT id, key_name FROM keyword WHERE key_name = ? LIMIT 1",
        )
        .bind(key_name)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    /// Reactive read: the receiver holds the current ordered list and
    /// re-emits after every mutation made through this storage.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Keyword>> {
        self.watch.subscribe()
    }

    async fn publish(&self) -> Result<(), ClientError> {
        let rows = self.all().await?;
        self.watch.send_replace(rows);
        Ok(())
    }
}

/// Auth-token store. The app treats "any row present" as logged in and
/// the first row as the current token.
#[derive(Clone)]
pub struct TokenStorage {
    pool: SqlitePool,
    watch: watch::Sender<Vec<Token>>,
}

impl TokenStorage {
    pub async fn new(pool: SqlitePool) -> Result<Self, ClientError> {
        let (tx, _) = watch::channel(Vec::new());
        let storage = Self { pool, watch: tx };
        storage.publish().await?;
        Ok(storage)
    }

    pub async fn insert(&self, token: &Token) -> Result<(), ClientError> {
        if token.id == 0 {
            sqlx::query(
                "INSERT INTO token (access_token, refresh_token, user_id) VALUES (?, ?, ?)",
            )
            .bind(&token.access_token)
            .bind(&token.refresh_token)
            .bind(&token.user_id)
            .execute(&self.pool)
            .await?;
        } else {
            sqlx::query(
                "INSERT OR IGNORE INTO token (id, access_token, refresh_token, user_id) \
                 VALUES (?, ?, ?, ?)",
            )
            .bind(token.id)
            .bind(&token.access_token)
            .bind(&token.refresh_token)
            .bind(&token.user_id)
            .execute(&self.pool)
            .await?;
        }
        self.publish().await
    }

    pub async fn delete(&self, token: &Token) -> Result<(), ClientError> {
        sqlx::query("DELETE FROM token WHERE id = ?")
            .bind(token.id)
            .execute(&self.pool)
            .await?;
        self.publish().await
    }

    pub async fn all(&self) -> Result<Vec<Token>, ClientError> {
        let rows = sqlx::query_as::<_, Token>(
            "SELECT id, access_token, refresh_token, user_id FROM token ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// The current token, if any.
    pub async fn first(&self) -> Result<Option<Token>, ClientError> {
        let row = sqlx::query_as::<_, Token>(
            "SELECT id, access_token, refresh_token, user_id FROM token ORDER BY id ASC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Token>> {
        self.watch.subscribe()
    }

    async fn publish(&self) -> Result<(), ClientError> {
        let rows = self.all().await?;
        self.watch.send_replace(rows);
        Ok(())
    }
}
