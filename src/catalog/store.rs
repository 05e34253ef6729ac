use crate::{
    error::{AppError, AppResult},
    models::Movie,
};

/// Ordered, immutable movie table
#[derive(Debug, Clone)]
pub struct CatalogStore {
    movies: Vec<Movie>,
}

impl CatalogStore {
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Returns the first row whose title matches exactly
    pub fn find_index_by_title(&self, title: &str) -> AppResult<usize> {
        self.movies
            .iter()
            .position(|movie| movie.title == title)
            .ok_or_else(|| AppError::NotFound(title.to_string()))
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// All titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|movie| movie.title.as_str())
    }

    /// Case-insensitive substring match over titles, in catalog order.
    /// A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.titles().collect();
        }

        self.titles()
            .filter(|title| title.to_lowercase().contains(&needle))
            .collect()
    }
}
