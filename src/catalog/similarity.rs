use std::cmp::Ordering;

use crate::error::{AppError, AppResult};

/// Square table of precomputed pairwise similarity scores
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    rows: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    /// Builds a matrix, rejecting ragged or non-square input
    pub fn new(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(AppError::ArtifactLoad(format!(
                "similarity matrix is not square: row {} has {} columns, expected {}",
                i,
                row.len(),
                size
            )));
        }

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Returns up to `n` `(index, score)` pairs most similar to `index`,
    /// highest score first.
    ///
    /// The queried row itself is excluded by index, so a tie at the maximum
    /// score cannot push a real neighbour out. Equal scores keep ascending
    /// index order; NaN scores rank last.
    pub fn nearest(&self, index: usize, n: usize) -> Vec<(usize, f64)> {
        let Some(row) = self.row(index) else {
            return Vec::new();
        };

        let mut ranked: Vec<(usize, f64)> = row
            .iter()
            .copied()
            .enumerate()
            .filter(|(other, _)| *other != index)
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| descending(a.1, b.1));
        ranked.truncate(n);
        ranked
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
