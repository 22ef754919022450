//! The movie record shared by search results and favorites.

use serde::{Deserialize, Serialize};

/// Poster value OMDb uses when no image is available.
pub const NO_POSTER: &str = "N/A";

/// One title as returned by the search endpoint or stored as a favorite.
///
/// Field names follow the OMDb wire format so that the persisted favorites
/// and the API payload share one representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Title", default)]
    pub title: String,

    #[serde(rename = "Year", default)]
    pub year: String,

    /// External identifier; the dedup and removal key.
    #[serde(rename = "imdbID")]
    pub imdb_id: String,

    #[serde(rename = "Type", default)]
    pub kind: String,

    #[serde(rename = "Poster", default)]
    pub poster: String,
}

impl Movie {
    /// Whether this record carries the identifier `imdb_id`.
    ///
    /// Records are the same title exactly when their identifiers match.
    pub fn has_id(&self, imdb_id: &str) -> bool {
        self.imdb_id == imdb_id
    }

    /// Poster URL, or `None` for the placeholder sentinel.
    pub fn poster_url(&self) -> Option<&str> {
        let poster = self.poster.trim();
        if poster.is_empty() || poster == NO_POSTER {
            None
        } else {
            Some(poster)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_fields() {
        let json = r#"{
            "Title": "Star Wars: Episode IV - A New Hope",
            "Year": "1977",
            "imdbID": "tt0076759",
            "Type": "movie",
            "Poster": "https://m.media-amazon.com/images/M/sw.jpg"
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title, "Star Wars: Episode IV - A New Hope");
        assert_eq!(movie.year, "1977");
        assert_eq!(movie.imdb_id, "tt0076759");
        assert_eq!(movie.kind, "movie");
        assert_eq!(
            movie.poster_url(),
            Some("https://m.media-amazon.com/images/M/sw.jpg")
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let movie = Movie {
            title: "Alien".to_string(),
            year: "1979".to_string(),
            imdb_id: "tt0078748".to_string(),
            kind: "movie".to_string(),
            poster: NO_POSTER.to_string(),
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(value["imdbID"], "tt0078748");
        assert_eq!(value["Title"], "Alien");
        assert_eq!(value["Poster"], "N/A");
    }

    #[test]
    fn placeholder_poster_has_no_url() {
        let movie: Movie =
            serde_json::from_str(r#"{"imdbID": "tt1", "Poster": "N/A"}"#).unwrap();
        assert_eq!(movie.poster_url(), None);
        assert_eq!(movie.title, "");
    }

    #[test]
    fn identity_is_the_external_id() {
        let a: Movie = serde_json::from_str(r#"{"imdbID": "tt1", "Title": "A"}"#).unwrap();
        let b: Movie = serde_json::from_str(r#"{"imdbID": "tt1", "Title": "B"}"#).unwrap();
        let c: Movie = serde_json::from_str(r#"{"imdbID": "tt2", "Title": "A"}"#).unwrap();

        assert!(a.has_id(&b.imdb_id));
        assert!(!a.has_id(&c.imdb_id));
    }
}
