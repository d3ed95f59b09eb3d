//! Snapshot loading and boundary validation.
//!
//! The catalog provider is an external collaborator; this module is the
//! boundary where its output is read from disk and checked. Once a
//! [`CatalogSnapshot`] exists, the context builder trusts it completely.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::{debug, info};

/// Name of the genre map file inside a snapshot directory
pub const GENRES_FILE: &str = "genres.json";

/// Name of the optional favorites file inside a snapshot directory
pub const FAVORITES_FILE: &str = "favorites.json";

impl Catalog {
    /// Load the four catalog lists from a snapshot directory
    ///
    /// The four files are parsed in parallel with nested `rayon::join`s.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        info!("Loading catalog snapshot from {:?}", dir);

        let path = |bucket: CatalogBucket| dir.join(bucket.file_name());

        let ((popular, now_playing), (upcoming, top_rated)) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_movie_list(&path(CatalogBucket::Popular)),
                    || parser::parse_movie_list(&path(CatalogBucket::NowPlaying)),
                )
            },
            || {
                rayon::join(
                    || parser::parse_movie_list(&path(CatalogBucket::Upcoming)),
                    || parser::parse_movie_list(&path(CatalogBucket::TopRated)),
                )
            },
        );

        let catalog = Catalog {
            popular: popular?,
            now_playing: now_playing?,
            upcoming: upcoming?,
            top_rated: top_rated?,
        };

        info!(
            "Loaded {} popular, {} now playing, {} upcoming, {} top rated",
            catalog.popular.len(),
            catalog.now_playing.len(),
            catalog.upcoming.len(),
            catalog.top_rated.len()
        );

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate data integrity
    ///
    /// Checks that every title is non-blank and every rating that is present
    /// lies within 0.0 - 10.0.
    pub fn validate(&self) -> Result<()> {
        for bucket in CatalogBucket::ALL {
            for movie in self.bucket(bucket) {
                if movie.title.trim().is_empty() {
                    return Err(CatalogError::ValidationError(format!(
                        "movie {} in {:?} has a blank title",
                        movie.id, bucket
                    )));
                }
                if let Some(rating) = movie.vote_average {
                    if !(0.0..=10.0).contains(&rating) {
                        return Err(CatalogError::InvalidValue {
                            field: format!("vote_average of movie {}", movie.id),
                            value: rating.to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl GenreMap {
    /// Load the genre map from a genres.json file
    pub fn load(path: &Path) -> Result<Self> {
        parser::parse_genre_map(path)
    }
}

/// Load a favorites list from a favorites.json file
pub fn load_favorites(path: &Path) -> Result<Vec<Favorite>> {
    parser::parse_favorites(path)
}

impl CatalogSnapshot {
    /// Load catalog, genre map and (optional) favorites from one directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let catalog = Catalog::load_from_dir(dir)?;
        let genres = GenreMap::load(&dir.join(GENRES_FILE))?;

        let favorites_path = dir.join(FAVORITES_FILE);
        let favorites = if favorites_path.exists() {
            load_favorites(&favorites_path)?
        } else {
            debug!("No {} in {:?}, starting with no favorites", FAVORITES_FILE, dir);
            Vec::new()
        };

        info!(
            "Snapshot ready: {} catalog entries, {} genres, {} favorites",
            catalog.total_len(),
            genres.len(),
            favorites.len()
        );

        Ok(Self {
            catalog,
            genres,
            favorites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_zero_rating() {
        let mut catalog = Catalog::new();
        catalog.popular.push(Movie::new(1, "Zero").with_rating(0.0));
        catalog.top_rated.push(Movie::new(2, "Unrated"));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_rating() {
        let mut catalog = Catalog::new();
        catalog.upcoming.push(Movie::new(1, "Broken").with_rating(11.5));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let mut catalog = Catalog::new();
        catalog.now_playing.push(Movie::new(7, "   "));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::ValidationError(_))
        ));
    }

    #[test]
    fn test_load_sample_snapshot() {
        // The sample snapshot ships with the repository under data/sample
        let data_dir = Path::new("../../data/sample");

        if data_dir.exists() {
            let snapshot = CatalogSnapshot::load_from_dir(data_dir).unwrap();
            assert!(!snapshot.catalog.popular.is_empty());
            assert!(!snapshot.genres.is_empty());
        }
    }
}
