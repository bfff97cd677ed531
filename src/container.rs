use crate::api::{PhotosClient, PhotosRepository, PostsClient, PostsRepository};
use crate::config::Config;
use crate::db::{KeywordStorage, SqlitePool, TokenStorage, open_pool};
use crate::error::ClientError;
use crate::state::{PhotoFeed, PostBoard, SearchHistory, Session};
use std::sync::Arc;
use std::time::Duration;

/// Everything the app runs on, constructed once at startup and passed
/// around by value. No ambient lookup: components receive their handles
/// through constructors.
#[derive(Clone)]
pub struct Container {
    pub pool: SqlitePool,
    pub keywords: KeywordStorage,
    pub tokens: TokenStorage,
    pub photo_feed: PhotoFeed,
    pub post_board: PostBoard,
    pub session: Session,
    pub search_history: SearchHistory,
}

impl Container {
    pub async fn build(cfg: &Config) -> Result<Self, ClientError> {
        let client = http_client(cfg)?;
        let pool = open_pool(&cfg.database_url).await?;

        let keywords = KeywordStorage::new(pool.clone()).await?;
        let tokens = TokenStorage::new(pool.clone()).await?;

        let photos: Arc<dyn PhotosRepository> = Arc::new(PhotosClient::new(
            client.clone(),
            cfg.photos_base_url.clone(),
            cfg.photos_api_key.clone(),
        ));
        let posts: Arc<dyn PostsRepository> =
            Arc::new(PostsClient::new(client, cfg.posts_base_url.clone()));

        Ok(Self {
            photo_feed: PhotoFeed::new(photos),
            post_board: PostBoard::new(posts.clone(), tokens.clone()),
            session: Session::new(posts, tokens.clone()),
            search_history: SearchHistory::new(keywords.clone()),
            pool,
            keywords,
            tokens,
        })
    }
}

fn http_client(cfg: &Config) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder()
        .user_agent(concat!("todonotion/", env!("CARGO_PKG_VERSION")))
        .connect_timeout(Duration::from_secs(5))
        .timeout(Duration::from_secs(15));
    if let Some(proxy_url) = cfg.proxy.as_ref() {
        builder = builder.proxy(reqwest::Proxy::all(proxy_url.as_str())?);
    }
    Ok(builder.build()?)
}
