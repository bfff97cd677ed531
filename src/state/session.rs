use crate::api::PostsRepository;
use crate::db::{Token, TokenStorage};
use crate::error::ClientError;
use crate::state::ViewState;
use crate::types::{JwtAuthResponse, LoginRequest, SignupRequest};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

/// Login form fields, validated before any network call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginInput {
    pub username_or_email: String,
    pub password: String,
}

impl LoginInput {
    pub fn is_valid(&self) -> bool {
        !self.username_or_email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

/// Signup form fields, validated before any network call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupInput {
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.username.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.trim().is_empty()
    }
}

/// Reducer for signup/login/logout. A successful login persists the token;
/// "logged in" is derived from the token store being non-empty.
///
/// Network failures land in the view states; the returned `Result` carries
/// local-store failures only.
#[derive(Clone)]
pub struct Session {
    repo: Arc<dyn PostsRepository>,
    tokens: TokenStorage,
    login_state: watch::Sender<ViewState<Token>>,
    signup_state: watch::Sender<ViewState<JwtAuthResponse>>,
}

impl Session {
    pub fn new(repo: Arc<dyn PostsRepository>, tokens: TokenStorage) -> Self {
        let (login_state, _) = watch::channel(ViewState::Idle);
        let (signup_state, _) = watch::channel(ViewState::Idle);
        Self {
            repo,
            tokens,
            login_state,
            signup_state,
        }
    }

    pub fn subscribe_login(&self) -> watch::Receiver<ViewState<Token>> {
        self.login_state.subscribe()
    }

    pub fn subscribe_signup(&self) -> watch::Receiver<ViewState<JwtAuthResponse>> {
        self.signup_state.subscribe()
    }

    pub fn subscribe_tokens(&self) -> watch::Receiver<Vec<Token>> {
        self.tokens.subscribe()
    }

    pub async fn is_logged_in(&self) -> Result<bool, ClientError> {
        Ok(self.tokens.first().await?.is_some())
    }

    /// An invalid input blocks the action; the login state is untouched.
    pub async fn login(&self, input: &LoginInput) -> Result<(), ClientError> {
        if !input.is_valid() {
            return Ok(());
        }
        let request = LoginRequest {
            username_or_email: input.username_or_email.clone(),
            password: input.password.clone(),
        };
        self.login_state.send_replace(ViewState::Loading);
        match self.repo.login(&request).await {
            Ok(token) => {
                // A terminal state must be published even when the token
                // cannot be persisted, or observers hang on Loading.
                if let Err(e) = self.tokens.insert(&token).await {
                    warn!(error = %e, "login succeeded but token persist failed");
                    self.login_state
                        .send_replace(ViewState::Error(e.display_text()));
                    return Err(e);
                }
                info!(user_id = %token.user_id, "login succeeded");
                self.login_state.send_replace(ViewState::Success(token));
            }
            Err(e) => {
                warn!(error = %e, "login failed");
                self.login_state
                    .send_replace(ViewState::Error(e.display_text()));
            }
        }
        Ok(())
    }

    pub async fn signup(&self, input: &SignupInput) {
        if !input.is_valid() {
            return;
        }
        let request = SignupRequest {
            name: input.name.clone(),
            username: input.username.clone(),
            email: input.email.clone(),
            password: input.password.clone(),
        };
        self.signup_state.send_replace(ViewState::Loading);
        let next = match self.repo.signup(&request).await {
            Ok(ack) => ViewState::Success(ack),
            Err(e) => {
                warn!(error = %e, "signup failed");
                ViewState::Error(e.display_text())
            }
        };
        self.signup_state.send_replace(next);
    }

    /// Notify the server best-effort, then clear the stored token so the
    /// logged-in derivation flips to false even when the server is down.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let Some(token) = self.tokens.first().await? else {
            return Ok(());
        };
        if let Err(e) = self.repo.logout(&token).await {
            warn!(error = %e, "logout API call failed; clearing local token anyway");
        }
        self.tokens.delete(&token).await?;
        self.login_state.send_replace(ViewState::Idle);
        Ok(())
    }
}
