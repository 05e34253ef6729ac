use axum::{extract::State, middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::{handlers, page, AppState};
use crate::{
    error::AppError,
    middleware::{request_id_middleware, RequestSpan},
};

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let app = Router::new()
        .route("/", get(page::index))
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_routes())
        .with_state(state);

    with_layers(app)
}

/// Router served when the artifacts failed to load.
///
/// `GET /` shows the directive message; every other path answers 503.
pub fn create_halted_router(reason: String) -> Router {
    let app = Router::new()
        .route("/", get(page::halted))
        .fallback(artifacts_missing)
        .with_state(reason);

    with_layers(app)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::list_movies))
        .route("/recommendations", get(handlers::recommend))
}

fn with_layers(app: Router) -> Router {
    app.layer(TraceLayer::new_for_http().make_span_with(RequestSpan))
        .layer(middleware::from_fn(request_id_middleware))
}

async fn artifacts_missing(State(reason): State<String>) -> AppError {
    AppError::ArtifactLoad(reason)
}
