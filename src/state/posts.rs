use crate::api::PostsRepository;
use crate::db::TokenStorage;
use crate::state::ViewState;
use crate::types::{Post, PostDraft};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::warn;

/// Post editor fields, validated before any network call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub content: String,
}

impl PostInput {
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }

    fn to_draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// Reducer for the posts board. Three independent states, as the screens
/// observe them separately: the list, a single post, and the raw response
/// text of a delete. A successful write reloads the list.
#[derive(Clone)]
pub struct PostBoard {
    repo: Arc<dyn PostsRepository>,
    tokens: TokenStorage,
    list_state: watch::Sender<ViewState<Vec<Post>>>,
    detail_state: watch::Sender<ViewState<Post>>,
    response_state: watch::Sender<ViewState<String>>,
}

impl PostBoard {
    pub fn new(repo: Arc<dyn PostsRepository>, tokens: TokenStorage) -> Self {
        let (list_state, _) = watch::channel(ViewState::Idle);
        let (detail_state, _) = watch::channel(ViewState::Idle);
        let (response_state, _) = watch::channel(ViewState::Idle);
        Self {
            repo,
            tokens,
            list_state,
            detail_state,
            response_state,
        }
    }

    pub fn subscribe_list(&self) -> watch::Receiver<ViewState<Vec<Post>>> {
        self.list_state.subscribe()
    }

    pub fn subscribe_detail(&self) -> watch::Receiver<ViewState<Post>> {
        self.detail_state.subscribe()
    }

    pub fn subscribe_response(&self) -> watch::Receiver<ViewState<String>> {
        self.response_state.subscribe()
    }

    pub async fn load(&self) {
        self.list_state.send_replace(ViewState::Loading);
        let next = match self.repo.posts().await {
            Ok(posts) => ViewState::Success(posts),
            Err(e) => {
                warn!(error = %e, "post list fetch failed");
                ViewState::Error(e.display_text())
            }
        };
        self.list_state.send_replace(next);
    }

    pub async fn load_one(&self, post_id: &str) {
        self.detail_state.send_replace(ViewState::Loading);
        let next = match self.repo.post(post_id).await {
            Ok(post) => ViewState::Success(post),
            Err(e) => {
                warn!(post_id, error = %e, "post fetch failed");
                ViewState::Error(e.display_text())
            }
        };
        self.detail_state.send_replace(next);
    }

    pub async fn search(&self, title: &str) {
        self.list_state.send_replace(ViewState::Loading);
        let next = match self.repo.search_posts(title).await {
            Ok(posts) => ViewState::Success(posts),
            Err(e) => {
                warn!(title, error = %e, "post search failed");
                ViewState::Error(e.display_text())
            }
        };
        self.list_state.send_replace(next);
    }

    /// An invalid input blocks the action; the detail state is untouched.
    pub async fn add(&self, input: &PostInput) {
        if !input.is_valid() {
            return;
        }
        self.detail_state.send_replace(ViewState::Loading);
        let access_token = self.access_token().await;
        match self.repo.add_post(&access_token, &input.to_draft()).await {
            Ok(post) => {
                self.detail_state.send_replace(ViewState::Success(post));
                self.load().await;
            }
            Err(e) => {
                warn!(error = %e, "add post failed");
                self.detail_state
                    .send_replace(ViewState::Error(e.display_text()));
            }
        }
    }

    pub async fn edit(&self, post_id: &str, input: &PostInput) {
        if !input.is_valid() {
            return;
        }
        self.detail_state.send_replace(ViewState::Loading);
        let access_token = self.access_token().await;
        match self
            .repo
            .edit_post(post_id, &access_token, &input.to_draft())
            .await
        {
            Ok(post) => {
                self.detail_state.send_replace(ViewState::Success(post));
                self.load().await;
            }
            Err(e) => {
                warn!(post_id, error = %e, "edit post failed");
                self.detail_state
                    .send_replace(ViewState::Error(e.display_text()));
            }
        }
    }

    pub async fn remove(&self, post_id: &str) {
        self.response_state.send_replace(ViewState::Loading);
        let access_token = self.access_token().await;
        match self.repo.delete_post(post_id, &access_token).await {
            Ok(body) => {
                self.response_state.send_replace(ViewState::Success(body));
                self.load().await;
            }
            Err(e) => {
                warn!(post_id, error = %e, "delete post failed");
                self.response_state
                    .send_replace(ViewState::Error(e.display_text()));
            }
        }
    }

    /// Bearer token read at action time; empty when logged out, letting the
    /// server answer 401 through the normal Error state.
    async fn access_token(&self) -> String {
        match self.tokens.first().await {
            Ok(Some(token)) => token.access_token,
            Ok(None) => String::new(),
            Err(e) => {
                warn!(error = %e, "token read failed; sending empty bearer");
                String::new()
            }
        }
    }
}
