use crate::db::{Keyword, KeywordStorage};
use crate::error::ClientError;
use tokio::sync::watch;

/// Search box content, validated before touching the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordInput {
    pub key_name: String,
}

impl KeywordInput {
    pub fn is_valid(&self) -> bool {
        !self.key_name.trim().is_empty()
    }
}

/// Search history over the keyword store.
///
/// Deduplication is two-layered: a case-insensitive containment pre-check
/// here, and ignore-on-conflict by primary key inside the store. History
/// is unbounded.
#[derive(Clone)]
pub struct SearchHistory {
    keywords: KeywordStorage,
}

impl SearchHistory {
    pub fn new(keywords: KeywordStorage) -> Self {
        Self { keywords }
    }

    /// Persist a submitted search term. Returns whether a row was inserted;
    /// blank input and already-matching history both skip the insert.
    pub async fn save(&self, input: &KeywordInput) -> Result<bool, ClientError> {
        if !input.is_valid() {
            return Ok(false);
        }
        if self.matching_count(&input.key_name).await? > 0 {
            return Ok(false);
        }
        self.keywords.insert(&Keyword::new(&input.key_name)).await?;
        Ok(true)
    }

    /// How many stored keywords contain `text`, case-insensitively.
    pub async fn matching_count(&self, text: &str) -> Result<usize, ClientError> {
        let needle = text.to_lowercase();
        let count = self
            .keywords
            .all()
            .await?
            .iter()
            .filter(|k| k.key_name.to_lowercase().contains(&needle))
            .count();
        Ok(count)
    }

    pub async fn remove(&self, keyword: &Keyword) -> Result<(), ClientError> {
        self.keywords.delete(keyword).await
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Keyword>> {
        self.keywords.subscribe()
    }
}
