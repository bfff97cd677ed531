use crate::api::PhotosRepository;
use crate::state::ViewState;
use crate::types::Photo;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

/// Reducer for the photo listing: the full feed or a keyword search.
#[derive(Clone)]
pub struct PhotoFeed {
    repo: Arc<dyn PhotosRepository>,
    state: watch::Sender<ViewState<Vec<Photo>>>,
}

impl PhotoFeed {
    pub fn new(repo: Arc<dyn PhotosRepository>) -> Self {
        let (state, _) = watch::channel(ViewState::Idle);
        Self { repo, state }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<Vec<Photo>>> {
        self.state.subscribe()
    }

    /// Fetch the unfiltered listing.
    pub async fn load(&self) {
        self.state.send_replace(ViewState::Loading);
        let next = match self.repo.fetch_photos().await {
            Ok(hits) => ViewState::Success(hits),
            Err(e) => {
                warn!(error = %e, "photo listing fetch failed");
                ViewState::Error(e.display_text())
            }
        };
        self.state.send_replace(next);
    }

    /// Fetch the listing narrowed by a search keyword.
    pub async fn search(&self, keyword: &str) {
        self.state.send_replace(ViewState::Loading);
        let next = match self.repo.fetch_photos_by_keyword(keyword).await {
            Ok(hits) => ViewState::Success(hits),
            Err(e) => {
                warn!(keyword, error = %e, "photo search failed");
                ViewState::Error(e.display_text())
            }
        };
        self.state.send_replace(next);
    }
}
