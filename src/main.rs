use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_recommender::{
    api::{create_halted_router, create_router, AppState},
    catalog::Dataset,
    config::Config,
    error::ARTIFACTS_MISSING_MESSAGE,
    services::TmdbPosterProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_recommender=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Without both artifacts only the directive message is served
    let app = match Dataset::load(&config.movie_dict_path, &config.similarity_path) {
        Ok(dataset) => {
            let posters = Arc::new(TmdbPosterProvider::from_config(&config));
            create_router(AppState::new(dataset, posters))
        }
        Err(e) => {
            tracing::error!(error = %e, "{}", ARTIFACTS_MISSING_MESSAGE);
            create_halted_router(e.to_string())
        }
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
