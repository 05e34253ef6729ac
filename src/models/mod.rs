pub mod movie;
pub mod recommendation;
pub mod tmdb;

pub use movie::{year_from_float, Movie};
pub use recommendation::{format_rating, format_year, Recommendation};
pub use tmdb::TmdbMovieDetails;
