use mimalloc::MiMalloc;
use todonotion::state::ViewState;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &todonotion::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        photos_base_url = %cfg.photos_base_url,
        posts_base_url = %cfg.posts_base_url,
        proxy = %cfg.proxy.as_ref().map(|u| u.as_str()).unwrap_or("<none>"),
        loglevel = %cfg.loglevel,
    );

    let container = todonotion::Container::build(cfg).await?;

    match container.session.is_logged_in().await {
        Ok(logged_in) => info!(logged_in, "session restored from local store"),
        Err(e) => warn!(error = %e, "could not read local token store"),
    }

    // One-shot feed load so the binary is useful standalone; a UI layer
    // would subscribe to the same channels instead.
    container.photo_feed.load().await;
    match &*container.photo_feed.subscribe().borrow() {
        ViewState::Success(hits) => info!(count = hits.len(), "photo feed loaded"),
        ViewState::Error(text) => warn!(error = %text, "photo feed failed"),
        _ => {}
    }

    Ok(())
}
