//! Poster image resolution
//!
//! A provider turns an external movie identifier into a displayable image URL.
//! Lookups are best-effort: a provider never fails, it falls back to a
//! placeholder image so one bad poster cannot sink a whole recommendation list.

pub mod tmdb;

pub use tmdb::TmdbPosterProvider;

/// Trait for poster image providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Resolve a poster URL for the given movie id.
    ///
    /// Always returns a usable URL; failures yield the provider's placeholder.
    async fn poster_url(&self, movie_id: i64) -> String;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
