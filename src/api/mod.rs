//! Network repositories: thin 1:1 wrappers over the remote endpoints.
//!
//! Each trait method maps one endpoint call with no retry, caching, or
//! rate limiting; failures propagate to the reducers, which turn them
//! into Error view states.

pub mod photos;
pub mod posts;

pub use photos::PhotosClient;
pub use posts::PostsClient;

use crate::db::Token;
use crate::error::ClientError;
use crate::types::{JwtAuthResponse, LoginRequest, Photo, Post, PostDraft, SignupRequest};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[async_trait]
pub trait PhotosRepository: Send + Sync {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, ClientError>;
    async fn fetch_photos_by_keyword(&self, query: &str) -> Result<Vec<Photo>, ClientError>;
}

#[async_trait]
pub trait PostsRepository: Send + Sync {
    async fn login(&self, login: &LoginRequest) -> Result<Token, ClientError>;
    async fn signup(&self, signup: &SignupRequest) -> Result<JwtAuthResponse, ClientError>;
    /// Returns the server's acknowledgement body text.
    async fn logout(&self, token: &Token) -> Result<String, ClientError>;
    async fn posts(&self) -> Result<Vec<Post>, ClientError>;
    async fn post(&self, post_id: &str) -> Result<Post, ClientError>;
    async fn search_posts(&self, title: &str) -> Result<Vec<Post>, ClientError>;
    async fn add_post(&self, access_token: &str, draft: &PostDraft) -> Result<Post, ClientError>;
    async fn edit_post(
        &self,
        post_id: &str,
        access_token: &str,
        draft: &PostDraft,
    ) -> Result<Post, ClientError>;
    async fn delete_post(&self, post_id: &str, access_token: &str)
    -> Result<String, ClientError>;
}

/// Convert a non-2xx response into `ClientError::Status`, keeping the raw
/// error-body text the server sent.
pub(crate) async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}

/// Decode a JSON response body, keeping decode failures (`Json`) distinct
/// from transport failures (`Transport`).
pub(crate) async fn read_json<T: DeserializeOwned>(
    resp: reqwest::Response,
) -> Result<T, ClientError> {
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}
