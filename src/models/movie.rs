use serde::{Deserialize, Deserializer, Serialize};

/// One row of the movie catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// External (TMDB) identifier, used for poster lookups
    #[serde(alias = "movie_id")]
    pub id: i64,
    /// Display title, unique within the catalog
    pub title: String,
    /// Release year, absent when the source had no date
    #[serde(default, deserialize_with = "deserialize_year")]
    pub year: Option<i32>,
    /// Average vote on a 0-10 scale
    #[serde(alias = "vote_average")]
    pub rating: f64,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>, year: Option<i32>, rating: f64) -> Self {
        Self {
            id,
            title: title.into(),
            year,
            rating,
        }
    }
}

/// Converts a float year (as exported by dataframes) into a calendar year.
///
/// NaN and infinities mean "unknown".
pub fn year_from_float(year: f64) -> Option<i32> {
    if year.is_finite() {
        Some(year.trunc() as i32)
    } else {
        None
    }
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(year_from_float))
}
