//! marquee-core: Movie records, OMDb client, favorites storage, configuration,
//! and logging for marquee.

pub mod build_info;
pub mod config;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod movie;
pub mod omdb;
pub mod paths;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use favorites::{Favorites, FavoritesStore};
pub use movie::Movie;
pub use omdb::{MovieSearch, OmdbClient, SearchOutcome};
pub use store::{FileStore, KvStore, MemoryStore};
