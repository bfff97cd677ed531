//! View-state reducers.
//!
//! Every user-facing action follows one fixed pattern: publish `Loading`,
//! invoke the repository, publish `Success(payload)` or `Error(text)`.
//! State is published over `tokio::sync::watch` channels, so any observer
//! sees the latest value without polling the reducer; last write wins.

pub mod photos;
pub mod posts;
pub mod search;
pub mod session;

pub use photos::PhotoFeed;
pub use posts::{PostBoard, PostInput};
pub use search::{KeywordInput, SearchHistory};
pub use session::{LoginInput, Session, SignupInput};

/// Outcome of one logical operation, discarded and recreated on every
/// re-trigger. `Error` carries the server's raw error-body text when the
/// failure was a non-2xx response.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// No attempt has been made yet.
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ViewState::Success(_))
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            ViewState::Success(value) => Some(value),
            _ => None,
        }
    }
}
