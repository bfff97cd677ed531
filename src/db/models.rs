use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One remembered search term. `id` 0 means "not yet stored"; the store
/// auto-assigns the primary key on insert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Keyword {
    pub id: i64,
    pub key_name: String,
}

impl Keyword {
    pub fn new(key_name: impl Into<String>) -> Self {
        Self {
            id: 0,
            key_name: key_name.into(),
        }
    }
}

/// Auth token as returned by `auth/login` and persisted locally.
/// Serde names are camelCase to match the remote API's JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    #[serde(default)]
    pub id: i64,
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_deserializes_from_login_response_json() {
        let body = r#"{
            "accessToken": "at-1",
            "refreshToken": "rt-1",
            "userId": "u-1"
        }"#;
        let token: Token = serde_json::from_str(body).expect("valid token json");
        assert_eq!(token.id, 0);
        assert_eq!(token.access_token, "at-1");
        assert_eq!(token.refresh_token, "rt-1");
        assert_eq!(token.user_id, "u-1");
    }
}
