//! Shared test fixtures: a temp-file database per test and fake
//! repositories standing in for the remote APIs.
#![allow(dead_code)] // each test binary uses a subset of the fixtures

use async_trait::async_trait;
use reqwest::StatusCode;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};
use todonotion::ClientError;
use todonotion::api::{PhotosRepository, PostsRepository};
use todonotion::db::{SqlitePool, Token, open_pool};
use todonotion::types::{JwtAuthResponse, LoginRequest, Photo, Post, PostDraft, SignupRequest};
use tokio::sync::Notify;

/// Open a pool over a fresh temp sqlite file. The caller removes the file
/// when done.
pub async fn temp_db() -> (SqlitePool, PathBuf) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut temp_path = std::env::temp_dir();
    temp_path.push(format!(
        "todonotion-test-{}-{}.sqlite",
        std::process::id(),
        nanos
    ));

    let database_url = format!("sqlite:{}", temp_path.display());
    let pool = open_pool(&database_url).await.expect("open temp db");
    (pool, temp_path)
}

pub fn fake_token() -> Token {
    Token {
        id: 7,
        access_token: "accessToken".to_string(),
        refresh_token: "refreshToken".to_string(),
        user_id: "userId1".to_string(),
    }
}

pub fn posts_list() -> Vec<Post> {
    vec![
        Post {
            id: "id1".to_string(),
            title: "title1".to_string(),
            content: "content1".to_string(),
            create_date: "createDate1".to_string(),
            update_date: Some("updateDate1".to_string()),
            user_id: "userId1".to_string(),
        },
        Post {
            id: "id2".to_string(),
            title: "title2".to_string(),
            content: "content2".to_string(),
            create_date: "createDate2".to_string(),
            update_date: Some("updateDate2".to_string()),
            user_id: "userId2".to_string(),
        },
    ]
}

pub fn photo_hits() -> Vec<Photo> {
    vec![
        Photo {
            id: 1,
            tags: "moon, night".to_string(),
            user: "sam".to_string(),
            ..Photo::default()
        },
        Photo {
            id: 2,
            tags: "sea, waves".to_string(),
            user: "kim".to_string(),
            ..Photo::default()
        },
    ]
}

pub const LOGIN_ERROR_BODY: &str = r#"{"message":"Bad credentials"}"#;

fn status_error(status: StatusCode, body: &str) -> ClientError {
    ClientError::Status {
        status,
        body: body.to_string(),
    }
}

/// Fake posts API. `gate`, when armed, parks each call until the test has
/// observed the Loading state, so transition order is assertable.
#[derive(Default)]
pub struct FakePostsRepo {
    pub fail_login: bool,
    pub fail_logout: bool,
    pub gate: Option<Arc<Notify>>,
    pub login_calls: AtomicUsize,
    pub last_bearer: Mutex<String>,
    pub posts: Mutex<Vec<Post>>,
}

impl FakePostsRepo {
    pub fn with_posts() -> Self {
        Self {
            posts: Mutex::new(posts_list()),
            ..Self::default()
        }
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }

    fn record_bearer(&self, access_token: &str) {
        *self.last_bearer.lock().unwrap() = access_token.to_string();
    }
}

#[async_trait]
impl PostsRepository for FakePostsRepo {
    async fn login(&self, _login: &LoginRequest) -> Result<Token, ClientError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.pass_gate().await;
        if self.fail_login {
            return Err(status_error(StatusCode::UNAUTHORIZED, LOGIN_ERROR_BODY));
        }
        Ok(fake_token())
    }

    async fn signup(&self, _signup: &SignupRequest) -> Result<JwtAuthResponse, ClientError> {
        self.pass_gate().await;
        Ok(JwtAuthResponse {
            message: "User registered successfully!.".to_string(),
        })
    }

    async fn logout(&self, _token: &Token) -> Result<String, ClientError> {
        if self.fail_logout {
            return Err(status_error(StatusCode::BAD_GATEWAY, "gateway down"));
        }
        Ok("logged out".to_string())
    }

    async fn posts(&self) -> Result<Vec<Post>, ClientError> {
        Ok(self.posts.lock().unwrap().clone())
    }

    async fn post(&self, post_id: &str) -> Result<Post, ClientError> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == post_id)
            .cloned()
            .ok_or_else(|| status_error(StatusCode::NOT_FOUND, "no such post"))
    }

    async fn search_posts(&self, title: &str) -> Result<Vec<Post>, ClientError> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.title.contains(title))
            .cloned()
            .collect())
    }

    async fn add_post(&self, access_token: &str, draft: &PostDraft) -> Result<Post, ClientError> {
        self.record_bearer(access_token);
        let post = Post {
            id: format!("id{}", self.posts.lock().unwrap().len() + 1),
            title: draft.title.clone(),
            content: draft.content.clone(),
            create_date: "createDate3".to_string(),
            update_date: None,
            user_id: "userId1".to_string(),
        };
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn edit_post(
        &self,
        post_id: &str,
        access_token: &str,
        draft: &PostDraft,
    ) -> Result<Post, ClientError> {
        self.record_bearer(access_token);
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| status_error(StatusCode::NOT_FOUND, "no such post"))?;
        post.title = draft.title.clone();
        post.content = draft.content.clone();
        post.update_date = Some("updateDate3".to_string());
        Ok(post.clone())
    }

    async fn delete_post(
        &self,
        post_id: &str,
        access_token: &str,
    ) -> Result<String, ClientError> {
        self.record_bearer(access_token);
        self.posts.lock().unwrap().retain(|p| p.id != post_id);
        Ok("deleted".to_string())
    }
}

/// Fake photo-search API.
#[derive(Default)]
pub struct FakePhotosRepo {
    pub fail: bool,
}

#[async_trait]
impl PhotosRepository for FakePhotosRepo {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, ClientError> {
        if self.fail {
            return Err(status_error(
                StatusCode::TOO_MANY_REQUESTS,
                "rate limit exceeded",
            ));
        }
        Ok(photo_hits())
    }

    async fn fetch_photos_by_keyword(&self, query: &str) -> Result<Vec<Photo>, ClientError> {
        if self.fail {
            return Err(status_error(
                StatusCode::TOO_MANY_REQUESTS,
                "rate limit exceeded",
            ));
        }
        Ok(photo_hits()
            .into_iter()
            .filter(|p| p.tags.contains(query))
            .collect())
    }
}
