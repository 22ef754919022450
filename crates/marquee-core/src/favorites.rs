//! The favorites collection and its persistence.

use crate::movie::Movie;
use crate::store::KvStore;
use serde::{Deserialize, Serialize};

/// Key the full favorites collection is stored under.
pub const FAVORITES_KEY: &str = "favorites";

/// Ordered favorites with at most one entry per external identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    movies: Vec<Movie>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection, keeping the first entry for each identifier.
    pub fn from_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        let mut favorites = Self::new();
        for movie in movies {
            favorites.add(movie);
        }
        favorites
    }

    pub fn as_slice(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Movie> {
        self.movies.get(index)
    }

    pub fn contains(&self, imdb_id: &str) -> bool {
        self.movies.iter().any(|m| m.has_id(imdb_id))
    }

    /// Append `movie` unless an entry with the same identifier exists.
    ///
    /// Returns whether the collection changed.
    pub fn add(&mut self, movie: Movie) -> bool {
        if self.contains(&movie.imdb_id) {
            return false;
        }
        self.movies.push(movie);
        true
    }

    /// Remove every entry with identifier `imdb_id`.
    ///
    /// Returns the number of entries removed.
    pub fn remove(&mut self, imdb_id: &str) -> usize {
        let before = self.movies.len();
        self.movies.retain(|m| !m.has_id(imdb_id));
        before - self.movies.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }
}

impl<'a> IntoIterator for &'a Favorites {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

/// Loads and saves [`Favorites`] through a [`KvStore`].
pub struct FavoritesStore {
    store: Box<dyn KvStore>,
}

impl FavoritesStore {
    pub fn new(store: impl KvStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Read the stored collection.
    ///
    /// A missing key is an empty collection. A stored value that is not a
    /// JSON array of movies is a [`crate::Error::Serialization`].
    pub fn load(&self) -> crate::Result<Favorites> {
        let Some(raw) = self.store.get(FAVORITES_KEY)? else {
            return Ok(Favorites::new());
        };

        let movies: Vec<Movie> = serde_json::from_str(&raw)?;
        Ok(Favorites::from_movies(movies))
    }

    /// Replace the stored collection with `favorites`.
    pub fn save(&self, favorites: &Favorites) -> crate::Result<()> {
        let raw = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &raw)?;
        tracing::debug!(count = favorites.len(), "Saved favorites");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            title: title.to_string(),
            year: "1977".to_string(),
            imdb_id: id.to_string(),
            kind: "movie".to_string(),
            poster: "N/A".to_string(),
        }
    }

    #[test]
    fn add_distinct_titles_keeps_all_in_order() {
        let mut favorites = Favorites::new();
        for i in 0..5 {
            assert!(favorites.add(movie(&format!("tt{i}"), "x")));
        }

        assert_eq!(favorites.len(), 5);
        let ids: Vec<_> = favorites.iter().map(|m| m.imdb_id.as_str()).collect();
        assert_eq!(ids, vec!["tt0", "tt1", "tt2", "tt3", "tt4"]);
    }

    #[test]
    fn add_existing_id_is_a_no_op() {
        let mut favorites = Favorites::new();
        let star_wars = movie("tt0076759", "Star Wars");
        favorites.add(star_wars.clone());
        let snapshot = favorites.clone();

        assert!(!favorites.add(star_wars));
        // Same id from a later search, different instance and fields.
        assert!(!favorites.add(movie("tt0076759", "Star Wars (re-fetched)")));
        assert_eq!(favorites, snapshot);
    }

    #[test]
    fn remove_by_id_leaves_others() {
        let mut favorites =
            Favorites::from_movies([movie("tt0076759", "IV"), movie("tt0080684", "V")]);

        assert_eq!(favorites.remove("tt0076759"), 1);
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites.as_slice()[0].imdb_id, "tt0080684");

        assert_eq!(favorites.remove("tt9999999"), 0);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn from_movies_drops_duplicate_ids() {
        let favorites = Favorites::from_movies([
            movie("tt1", "first"),
            movie("tt2", "second"),
            movie("tt1", "dup"),
        ]);

        assert_eq!(favorites.len(), 2);
        assert_eq!(favorites.get(0).map(|m| m.title.as_str()), Some("first"));
    }

    #[test]
    fn missing_key_loads_empty() {
        let store = FavoritesStore::new(MemoryStore::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_writes_json_array_under_fixed_key() {
        let backing = Arc::new(MemoryStore::new());
        let store = FavoritesStore::new(backing.clone());

        let favorites = Favorites::from_movies([movie("tt0076759", "Star Wars")]);
        store.save(&favorites).unwrap();

        let raw = backing.get(FAVORITES_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        assert_eq!(array[0]["imdbID"], "tt0076759");
    }

    #[test]
    fn corrupt_value_is_serialization_error() {
        let backing = Arc::new(MemoryStore::new());
        backing.set(FAVORITES_KEY, "{not json").unwrap();
        let store = FavoritesStore::new(backing);

        assert!(matches!(
            store.load(),
            Err(crate::Error::Serialization(_))
        ));
    }
}
