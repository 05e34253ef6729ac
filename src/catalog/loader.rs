//! JSON artifact decoding
//!
//! The movie table is accepted in two shapes:
//! - row-oriented: `[{"movie_id": 19995, "title": "Avatar", "year": 2009.0, "vote_average": 7.2}, ...]`
//! - column-oriented, as written by `DataFrame.to_dict()`:
//!   `{"movie_id": {"0": 19995, ...}, "title": {"0": "Avatar", ...}, ...}`
//!
//! Column-oriented rows are ordered by their integer index label.

use std::{collections::HashMap, fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize};

use super::{CatalogStore, SimilarityMatrix};
use crate::{
    error::{AppError, AppResult},
    models::{year_from_float, Movie},
};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MovieTable {
    Rows(Vec<Movie>),
    Columns(MovieColumns),
}

#[derive(Debug, Deserialize)]
struct MovieColumns {
    #[serde(alias = "id")]
    movie_id: HashMap<String, i64>,
    title: HashMap<String, String>,
    #[serde(default)]
    year: HashMap<String, Option<f64>>,
    #[serde(alias = "rating")]
    vote_average: HashMap<String, f64>,
}

impl MovieColumns {
    fn into_rows(mut self) -> AppResult<Vec<Movie>> {
        let mut labels = self
            .title
            .keys()
            .map(|label| {
                label
                    .parse::<usize>()
                    .map(|position| (position, label.clone()))
                    .map_err(|_| {
                        AppError::ArtifactLoad(format!("invalid row label '{}'", label))
                    })
            })
            .collect::<AppResult<Vec<_>>>()?;
        labels.sort_unstable_by_key(|(position, _)| *position);

        labels
            .into_iter()
            .map(|(_, label)| {
                let missing =
                    |column: &str| AppError::ArtifactLoad(format!("row '{}' has no {}", label, column));

                let id = *self.movie_id.get(&label).ok_or_else(|| missing("movie_id"))?;
                let rating = *self
                    .vote_average
                    .get(&label)
                    .ok_or_else(|| missing("vote_average"))?;
                let year = self
                    .year
                    .get(&label)
                    .copied()
                    .flatten()
                    .and_then(year_from_float);
                let title = self.title.remove(&label).ok_or_else(|| missing("title"))?;

                Ok(Movie {
                    id,
                    title,
                    year,
                    rating,
                })
            })
            .collect()
    }
}

impl MovieTable {
    fn into_rows(self) -> AppResult<Vec<Movie>> {
        match self {
            MovieTable::Rows(rows) => Ok(rows),
            MovieTable::Columns(columns) => columns.into_rows(),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::ArtifactLoad(format!("cannot read {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&contents).map_err(|e| {
        AppError::ArtifactLoad(format!("cannot parse {}: {}", path.display(), e))
    })
}

/// Loads the movie table artifact
pub fn load_catalog(path: &Path) -> AppResult<CatalogStore> {
    let table: MovieTable = read_json(path)?;
    Ok(CatalogStore::new(table.into_rows()?))
}

/// Loads the similarity matrix artifact
pub fn load_similarity(path: &Path) -> AppResult<SimilarityMatrix> {
    let rows: Vec<Vec<f64>> = read_json(path)?;
    SimilarityMatrix::new(rows)
}
