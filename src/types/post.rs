use serde::{Deserialize, Serialize};

/// A post owned by a remote user. Held only transiently in view states;
/// never persisted locally.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub create_date: String,
    pub update_date: Option<String>,
    pub user_id: String,
}

/// Body of `POST todos` and `PATCH todos/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
}
