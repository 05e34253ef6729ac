use std::sync::Arc;

use crate::{
    catalog::Dataset,
    services::{PosterProvider, Recommender},
};

/// Shared application state
///
/// Everything behind it is immutable after startup, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(dataset: Dataset, posters: Arc<dyn PosterProvider>) -> Self {
        Self {
            recommender: Arc::new(Recommender::new(Arc::new(dataset), posters)),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.recommender.dataset()
    }
}
