use crate::api::{PhotosRepository, check_status, read_json};
use crate::error::ClientError;
use crate::types::{Photo, PhotoPage};
use async_trait::async_trait;
use url::Url;

/// Photo-search API client. The key rides in the query string; an optional
/// free-text `q` parameter narrows the listing.
#[derive(Clone)]
pub struct PhotosClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl PhotosClient {
    pub fn new(client: reqwest::Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    async fn fetch_page(&self, query: Option<&str>) -> Result<PhotoPage, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            if let Some(q) = query {
                pairs.append_pair("q", q);
            }
        }
        let resp = self.client.get(url).send().await?;
        let resp = check_status(resp).await?;
        read_json::<PhotoPage>(resp).await
    }
}

#[async_trait]
impl PhotosRepository for PhotosClient {
    async fn fetch_photos(&self) -> Result<Vec<Photo>, ClientError> {
        Ok(self.fetch_page(None).await?.hits)
    }

    async fn fetch_photos_by_keyword(&self, query: &str) -> Result<Vec<Photo>, ClientError> {
        Ok(self.fetch_page(Some(query)).await?.hits)
    }
}
