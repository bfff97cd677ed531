use crate::api::{PostsRepository, check_status, read_json};
use crate::db::Token;
use crate::error::ClientError;
use crate::types::{JwtAuthResponse, LoginRequest, Post, PostDraft, SignupRequest};
use async_trait::async_trait;
use url::Url;

/// Client for the self-hosted posts API (`auth/*` and `todos` routes).
/// Write and logout calls carry a bearer `Authorization` header.
#[derive(Clone)]
pub struct PostsClient {
    client: reqwest::Client,
    base_url: Url,
}

impl PostsClient {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl PostsRepository for PostsClient {
    async fn login(&self, login: &LoginRequest) -> Result<Token, ClientError> {
        let resp = self
            .client
            .post(self.endpoint("auth/login")?)
            .json(login)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        read_json::<Token>(resp).await
    }

    async fn signup(&self, signup: &SignupRequest) -> Result<JwtAuthResponse, ClientError> {
        let resp = self
            .client
            .post(self.endpoint("auth/signup")?)
            .json(signup)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        read_json::<JwtAuthResponse>(resp).await
    }

    async fn logout(&self, token: &Token) -> Result<String, ClientError> {
        let resp = self
            .client
            .post(self.endpoint("auth/logout")?)
            .bearer_auth(&token.access_token)
            .json(&token.refresh_token)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.text().await?)
    }

    async fn posts(&self) -> Result<Vec<Post>, ClientError> {
        let resp = self.client.get(self.endpoint("todos")?).send().await?;
        let resp = check_status(resp).await?;
        read_json::<Vec<Post>>(resp).await
    }

    async fn post(&self, post_id: &str) -> Result<Post, ClientError> {
        let resp = self
            .client
            .get(self.endpoint(&format!("todos/{post_id}"))?)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        read_json::<Post>(resp).await
    }

    async fn search_posts(&self, title: &str) -> Result<Vec<Post>, ClientError> {
        let mut url = self.endpoint("todos/search/")?;
        url.query_pairs_mut().append_pair("title", title);
        let resp = self.client.get(url).send().await?;
        let resp = check_status(resp).await?;
        read_json::<Vec<Post>>(resp).await
    }

    async fn add_post(&self, access_token: &str, draft: &PostDraft) -> Result<Post, ClientError> {
        let resp = self
            .client
            .post(self.endpoint("todos")?)
            .bearer_auth(access_token)
            .json(draft)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        read_json::<Post>(resp).await
    }

    async fn edit_post(
        &self,
        post_id: &str,
        access_token: &str,
        draft: &PostDraft,
    ) -> Result<Post, ClientError> {
        let resp = self
            .client
            .patch(self.endpoint(&format!("todos/{post_id}"))?)
            .bearer_auth(access_token)
            .json(draft)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        read_json::<Post>(resp).await
    }

    async fn delete_post(
        &self,
        post_id: &str,
        access_token: &str,
    ) -> Result<String, ClientError> {
        let resp = self
            .client
            .delete(self.endpoint(&format!("todos/{post_id}"))?)
            .bearer_auth(access_token)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.text().await?)
    }
}
