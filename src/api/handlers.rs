use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::AppResult,
    middleware::RequestId,
    models::Recommendation,
    services::DEFAULT_RECOMMENDATIONS,
};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct MovieSearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub title: String,
    #[serde(default = "default_count")]
    pub n: usize,
}

fn default_count() -> usize {
    DEFAULT_RECOMMENDATIONS
}

/// One card as rendered by the page
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub title: String,
    pub poster_url: String,
    pub year: Option<i32>,
    pub rating: f64,
    pub year_display: String,
    pub rating_display: String,
}

impl From<&Recommendation> for RecommendationResponse {
    fn from(rec: &Recommendation) -> Self {
        Self {
            title: rec.title.clone(),
            poster_url: rec.poster_url.clone(),
            year: rec.year,
            rating: rec.rating,
            year_display: rec.year_display(),
            rating_display: rec.rating_display(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub title: String,
    pub recommendations: Vec<RecommendationResponse>,
}

// Handlers

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "movies": state.dataset().catalog().len() })),
    )
}

/// Titles for the dropdown, optionally filtered
pub async fn list_movies(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchQuery>,
) -> Json<Vec<String>> {
    let catalog = state.dataset().catalog();
    let titles = catalog
        .search(params.q.as_deref().unwrap_or_default())
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(titles)
}

/// Top-N similar movies for a selected title
pub async fn recommend(
    State(state): State<AppState>,
    request_id: RequestId,
    Query(params): Query<RecommendationQuery>,
) -> AppResult<Json<RecommendationsResponse>> {
    tracing::info!(
        request_id = %request_id,
        title = %params.title,
        n = params.n,
        "Processing recommendation request"
    );

    let recommendations = state
        .recommender
        .recommend(&params.title, params.n)
        .await
        .map_err(|e| {
            tracing::info!(request_id = %request_id, error = %e, "Recommendation request rejected");
            e
        })?;

    Ok(Json(RecommendationsResponse {
        title: params.title,
        recommendations: recommendations.iter().map(RecommendationResponse::from).collect(),
    }))
}
