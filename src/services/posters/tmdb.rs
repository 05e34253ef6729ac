//! TMDB poster provider
//!
//! API Flow:
//! 1. Details: /movie/{id}?api_key=...&language=en-US → `poster_path`
//! 2. Image: {image_base_url}/{poster_path}
//!
//! One request per call. No retry and no caching.

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::TmdbMovieDetails,
    services::posters::PosterProvider,
};
use reqwest::Client as HttpClient;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbPosterProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
    placeholder_url: String,
}

impl TmdbPosterProvider {
    pub fn new(
        api_key: String,
        api_url: String,
        image_base_url: String,
        placeholder_url: String,
    ) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            image_base_url,
            placeholder_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.tmdb_api_key.clone(),
            config.tmdb_api_url.clone(),
            config.tmdb_image_base_url.clone(),
            config.poster_placeholder_url.clone(),
        )
    }

    /// Fetch the raw `poster_path` for a movie, if TMDB has one
    async fn fetch_poster_path(&self, movie_id: i64) -> AppResult<Option<String>> {
        let url = format!("{}/movie/{}", self.api_url.trim_end_matches('/'), movie_id);

        let response = self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        let details: TmdbMovieDetails = serde_json::from_str(&response_text).map_err(|e| {
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })?;

        Ok(details.poster_path.filter(|path| !path.trim().is_empty()))
    }

    /// Join the CDN base (with size segment) and a poster path
    fn image_url(&self, poster_path: &str) -> String {
        format!(
            "{}/{}",
            self.image_base_url.trim_end_matches('/'),
            poster_path.trim_start_matches('/')
        )
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbPosterProvider {
    async fn poster_url(&self, movie_id: i64) -> String {
        match self.fetch_poster_path(movie_id).await {
            Ok(Some(path)) => self.image_url(&path),
            Ok(None) => {
                tracing::debug!(movie_id, provider = "tmdb", "No poster path, using placeholder");
                self.placeholder_url.clone()
            }
            Err(e) => {
                tracing::warn!(
                    movie_id,
                    error = %e,
                    provider = "tmdb",
                    "Poster fetch failed, using placeholder"
                );
                self.placeholder_url.clone()
            }
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}
