use serde::{Deserialize, Serialize};

/// One photo-search hit. Field names follow the remote API's JSON; the
/// server omits fields freely, so everything defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Photo {
    pub id: i64,
    #[serde(rename = "pageURL")]
    pub page_url: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: String,
    pub views: i64,
    pub downloads: i64,
    pub collections: i64,
    pub likes: i64,
    pub comments: i64,
    pub user_id: i64,
    pub user: String,
    #[serde(rename = "userImageURL")]
    pub user_image_url: String,
    #[serde(rename = "webformatURL")]
    pub img_src_url: String,
}

/// Listing envelope returned by the photo-search API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PhotoPage {
    pub total: i64,
    pub total_hits: i64,
    pub hits: Vec<Photo>,
}
