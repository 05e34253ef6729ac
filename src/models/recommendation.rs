use serde::Serialize;

use super::Movie;

/// A display-ready suggestion derived from a catalog row
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster_url: String,
    pub year: Option<i32>,
    pub rating: f64,
}

impl Recommendation {
    pub fn from_movie(movie: &Movie, poster_url: String) -> Self {
        Self {
            title: movie.title.clone(),
            poster_url,
            year: movie.year,
            rating: movie.rating,
        }
    }

    pub fn year_display(&self) -> String {
        format_year(self.year)
    }

    pub fn rating_display(&self) -> String {
        format_rating(self.rating)
    }
}

/// `"Year: 2012"`, or `"Year: N/A"` when unknown
pub fn format_year(year: Option<i32>) -> String {
    match year {
        Some(year) => format!("Year: {}", year),
        None => "Year: N/A".to_string(),
    }
}

/// Rating with exactly one decimal place
pub fn format_rating(rating: f64) -> String {
    format!("Rating: {:.1}", rating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::year_from_float;

    #[test]
    fn test_year_display() {
        assert_eq!(format_year(year_from_float(2012.0)), "Year: 2012");
        assert_eq!(format_year(year_from_float(f64::NAN)), "Year: N/A");
        assert_eq!(format_year(None), "Year: N/A");
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(format_rating(7.0), "Rating: 7.0");
        assert_eq!(format_rating(6.84), "Rating: 6.8");
        assert_eq!(format_rating(8.0), "Rating: 8.0");
    }

    #[test]
    fn test_from_movie_copies_catalog_fields() {
        let movie = Movie::new(603, "The Matrix", Some(1999), 7.9);
        let rec = Recommendation::from_movie(&movie, "https://img/matrix.jpg".to_string());

        assert_eq!(rec.title, "The Matrix");
        assert_eq!(rec.poster_url, "https://img/matrix.jpg");
        assert_eq!(rec.year_display(), "Year: 1999");
        assert_eq!(rec.rating_display(), "Rating: 7.9");
    }
}
