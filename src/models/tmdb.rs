use serde::Deserialize;

/// Subset of TMDB's `GET /movie/{id}` response
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmdb_details_deserialization() {
        let json = r#"{
            "id": 19995,
            "title": "Avatar",
            "poster_path": "/kyeqWdyUXW608qlYkRqosgbbJyK.jpg",
            "vote_average": 7.2
        }"#;

        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path,
            Some("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg".to_string())
        );
    }

    #[test]
    fn test_tmdb_details_without_poster() {
        let details: TmdbMovieDetails = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(details.poster_path, None);

        let details: TmdbMovieDetails =
            serde_json::from_str(r#"{"id": 1, "poster_path": null}"#).unwrap();
        assert_eq!(details.poster_path, None);
    }
}
