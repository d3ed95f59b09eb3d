//! # Catalog Crate
//!
//! Data model and snapshot loading for the movie chat assistant.
//!
//! ## Main Components
//!
//! - **types**: Movie, Favorite, GenreMap, Catalog and its four buckets
//! - **parser**: Parse the provider's JSON files into Rust structs
//! - **loader**: Load a whole snapshot directory and validate it
//! - **error**: Error types for loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::CatalogSnapshot;
//! use std::path::Path;
//!
//! let snapshot = CatalogSnapshot::load_from_dir(Path::new("data/sample"))?;
//! println!("{} popular movies", snapshot.catalog.popular.len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod loader;

pub use error::{CatalogError, Result};
pub use loader::load_favorites;
pub use types::{
    // Type aliases
    GenreId,
    MovieId,
    // Core types
    Catalog,
    CatalogBucket,
    CatalogSnapshot,
    Favorite,
    GenreMap,
    Movie,
    // Helpers
    year_from_release_date,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.total_len(), 0);
    }

    #[test]
    fn test_bucket_access() {
        let mut catalog = Catalog::new();
        catalog
            .bucket_mut(CatalogBucket::Upcoming)
            .push(Movie::new(1, "Soon"));

        assert_eq!(catalog.bucket(CatalogBucket::Upcoming).len(), 1);
        assert!(catalog.bucket(CatalogBucket::Popular).is_empty());
        assert_eq!(catalog.total_len(), 1);
    }

    #[test]
    fn test_genre_map_drops_unknown_ids() {
        let genres: GenreMap = [(28, "Action"), (35, "Comedy")].into_iter().collect();
        assert_eq!(genres.names_for(&[35, 9999, 28]), vec!["Comedy", "Action"]);
        assert!(genres.names_for(&[]).is_empty());
    }

    #[test]
    fn test_year_from_release_date() {
        assert_eq!(year_from_release_date("1999-03-30"), Some(1999));
        assert_eq!(year_from_release_date("TBA"), None);
        assert_eq!(year_from_release_date(""), None);
    }

    #[test]
    fn test_favorite_from_movie() {
        let movie = Movie::new(603, "The Matrix")
            .with_release_date("1999-03-30")
            .with_genres(vec![28, 878]);
        let favorite = Favorite::from(&movie);
        assert_eq!(favorite.id, 603);
        assert_eq!(favorite.year(), Some(1999));
        assert_eq!(favorite.genre_ids, vec![28, 878]);
    }
}
