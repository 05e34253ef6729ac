//! Read-only model data loaded once at startup
//!
//! The catalog and the similarity matrix are aligned by row order: row `i` of
//! the matrix scores movie `i` against every other movie. [`Dataset`] owns both
//! and is the single context object handed to the recommender.

use std::path::Path;

use crate::error::{AppError, AppResult};

pub mod loader;
pub mod similarity;
pub mod store;

pub use similarity::SimilarityMatrix;
pub use store::CatalogStore;

/// Catalog plus its aligned similarity matrix
#[derive(Debug, Clone)]
pub struct Dataset {
    catalog: CatalogStore,
    similarity: SimilarityMatrix,
}

impl Dataset {
    /// Pairs a catalog with its similarity matrix, rejecting mismatched sizes
    pub fn new(catalog: CatalogStore, similarity: SimilarityMatrix) -> AppResult<Self> {
        if catalog.len() != similarity.len() {
            return Err(AppError::ArtifactLoad(format!(
                "similarity matrix has {} rows but catalog has {} movies",
                similarity.len(),
                catalog.len()
            )));
        }

        Ok(Self {
            catalog,
            similarity,
        })
    }

    /// Loads both artifacts from disk
    pub fn load(movie_dict_path: &Path, similarity_path: &Path) -> AppResult<Self> {
        let catalog = loader::load_catalog(movie_dict_path)?;
        let similarity = loader::load_similarity(similarity_path)?;
        let dataset = Self::new(catalog, similarity)?;

        tracing::info!(
            movies = dataset.catalog.len(),
            movie_dict = %movie_dict_path.display(),
            similarity = %similarity_path.display(),
            "Loaded recommendation artifacts"
        );

        Ok(dataset)
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }
}
