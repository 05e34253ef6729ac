use std::sync::Arc;

use crate::{
    catalog::Dataset,
    error::{AppError, AppResult},
    models::Recommendation,
    services::posters::PosterProvider,
};

/// Number of suggestions returned when the caller does not ask for a count
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Nearest-neighbour lookup over the precomputed similarity matrix,
/// enriched with poster images
pub struct Recommender {
    dataset: Arc<Dataset>,
    posters: Arc<dyn PosterProvider>,
}

impl Recommender {
    pub fn new(dataset: Arc<Dataset>, posters: Arc<dyn PosterProvider>) -> Self {
        Self { dataset, posters }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns up to `n` movies most similar to `title`, most similar first.
    ///
    /// Fails with [`AppError::NotFound`] when `title` is not in the catalog.
    /// Posters are fetched one at a time in rank order; a failed fetch only
    /// swaps that card's image for the placeholder.
    pub async fn recommend(&self, title: &str, n: usize) -> AppResult<Vec<Recommendation>> {
        if n == 0 {
            return Err(AppError::InvalidInput(
                "Number of recommendations must be positive".to_string(),
            ));
        }

        let catalog = self.dataset.catalog();
        let index = catalog.find_index_by_title(title)?;
        let neighbours = self.dataset.similarity().nearest(index, n);

        let mut recommendations = Vec::with_capacity(neighbours.len());
        for (other, score) in neighbours {
            let movie = catalog.get(other).ok_or_else(|| {
                AppError::Internal(format!("similarity index {} outside catalog", other))
            })?;

            let poster_url = self.posters.poster_url(movie.id).await;

            tracing::debug!(
                title = %movie.title,
                movie_id = movie.id,
                score,
                provider = self.posters.name(),
                "Recommendation resolved"
            );

            recommendations.push(Recommendation::from_movie(movie, poster_url));
        }

        tracing::info!(
            title = %title,
            count = recommendations.len(),
            "Recommendations generated"
        );

        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::{CatalogStore, SimilarityMatrix},
        models::Movie,
        services::posters::MockPosterProvider,
    };
    use mockall::predicate::eq;
    use mockall::Sequence;

    const PLACEHOLDER: &str = "https://placehold.co/500x750/333/FFFFFF?text=No+Poster";

    fn create_abcd_dataset() -> Arc<Dataset> {
        let catalog = CatalogStore::new(vec![
            Movie::new(1, "A", Some(2001), 7.0),
            Movie::new(2, "B", Some(2002), 6.5),
            Movie::new(3, "C", None, 8.34),
            Movie::new(4, "D", Some(2004), 5.0),
        ]);
        let similarity = SimilarityMatrix::new(vec![
            vec![1.0, 0.9, 0.9, 0.5],
            vec![0.9, 1.0, 0.4, 0.3],
            vec![0.9, 0.4, 1.0, 0.2],
            vec![0.5, 0.3, 0.2, 1.0],
        ])
        .unwrap();
        Arc::new(Dataset::new(catalog, similarity).unwrap())
    }

    fn create_large_dataset(size: usize) -> Arc<Dataset> {
        let movies: Vec<Movie> = (0..size)
            .map(|i| Movie::new(i as i64, format!("Movie {}", i), Some(2000), 6.0))
            .collect();
        let rows: Vec<Vec<f64>> = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { 1.0 } else { 1.0 / (1.0 + i.abs_diff(j) as f64) })
                    .collect()
            })
            .collect();
        Arc::new(
            Dataset::new(CatalogStore::new(movies), SimilarityMatrix::new(rows).unwrap()).unwrap(),
        )
    }

    fn placeholder_posters() -> MockPosterProvider {
        let mut posters = MockPosterProvider::new();
        posters
            .expect_poster_url()
            .returning(|_| PLACEHOLDER.to_string());
        posters.expect_name().return_const("mock");
        posters
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_recommend_orders_by_score_with_stable_ties() {
        let recommender = Recommender::new(create_abcd_dataset(), Arc::new(placeholder_posters()));

        let recs = recommender.recommend("A", 5).await.unwrap();
        assert_eq!(titles(&recs), vec!["B", "C", "D"]);
    }

    #[tokio::test]
    async fn test_recommend_copies_display_fields() {
        let recommender = Recommender::new(create_abcd_dataset(), Arc::new(placeholder_posters()));

        let recs = recommender.recommend("A", 2).await.unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[1].title, "C");
        assert_eq!(recs[1].year, None);
        assert_eq!(recs[1].year_display(), "Year: N/A");
        assert_eq!(recs[1].rating_display(), "Rating: 8.3");
    }

    #[tokio::test]
    async fn test_recommend_unknown_title_is_not_found() {
        let mut posters = MockPosterProvider::new();
        posters.expect_poster_url().never();
        posters.expect_name().return_const("mock");
        let recommender = Recommender::new(create_abcd_dataset(), Arc::new(posters));

        let result = recommender.recommend("Z", 5).await;
        assert!(matches!(result, Err(AppError::NotFound(t)) if t == "Z"));
    }

    #[tokio::test]
    async fn test_recommend_zero_is_invalid() {
        let recommender = Recommender::new(create_abcd_dataset(), Arc::new(placeholder_posters()));

        let result = recommender.recommend("A", 0).await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_recommend_returns_min_of_five_and_catalog_minus_one() {
        let large = Recommender::new(create_large_dataset(12), Arc::new(placeholder_posters()));
        for i in 0..12 {
            let title = format!("Movie {}", i);
            let recs = large.recommend(&title, DEFAULT_RECOMMENDATIONS).await.unwrap();
            assert_eq!(recs.len(), 5);
            assert!(recs.iter().all(|r| r.title != title));
        }

        let small = Recommender::new(create_abcd_dataset(), Arc::new(placeholder_posters()));
        for title in ["A", "B", "C", "D"] {
            let recs = small.recommend(title, DEFAULT_RECOMMENDATIONS).await.unwrap();
            assert_eq!(recs.len(), 3);
            assert!(recs.iter().all(|r| r.title != title));
        }
    }

    #[tokio::test]
    async fn test_posters_fetched_once_each_in_rank_order() {
        let mut seq = Sequence::new();
        let mut posters = MockPosterProvider::new();
        posters.expect_name().return_const("mock");
        for id in [2_i64, 3, 4] {
            posters
                .expect_poster_url()
                .with(eq(id))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|id| format!("https://image.tmdb.org/t/p/w500/{}.jpg", id));
        }

        let recommender = Recommender::new(create_abcd_dataset(), Arc::new(posters));
        let recs = recommender.recommend("A", 5).await.unwrap();

        assert_eq!(recs[0].poster_url, "https://image.tmdb.org/t/p/w500/2.jpg");
        assert_eq!(recs[2].poster_url, "https://image.tmdb.org/t/p/w500/4.jpg");
    }

    #[tokio::test]
    async fn test_placeholder_poster_does_not_abort_batch() {
        let mut posters = MockPosterProvider::new();
        posters.expect_name().return_const("mock");
        posters.expect_poster_url().returning(|id| {
            if id == 3 {
                PLACEHOLDER.to_string()
            } else {
                format!("https://image.tmdb.org/t/p/w500/{}.jpg", id)
            }
        });

        let recommender = Recommender::new(create_abcd_dataset(), Arc::new(posters));
        let recs = recommender.recommend("A", 5).await.unwrap();

        assert_eq!(recs.len(), 3);
        assert_eq!(recs[1].poster_url, PLACEHOLDER);
        assert_eq!(recs[2].poster_url, "https://image.tmdb.org/t/p/w500/4.jpg");
    }
}
