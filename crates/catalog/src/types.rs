//! Core domain types for the movie catalog.
//!
//! Movies arrive in the shape the catalog provider serves them (TMDB-style
//! `genre_ids`, `release_date`, `vote_average`). They are read-only inputs:
//! nothing downstream mutates a [`Movie`] once it has been loaded.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a movie, stable across the four catalog lists
pub type MovieId = u64;

/// Identifier of a genre in the genre map
pub type GenreId = u32;

// =============================================================================
// Movie-related Types
// =============================================================================

/// A movie record as served by the catalog provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Genre ids, resolved to names through a [`GenreMap`]. May be empty.
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
    /// `YYYY-MM-DD`, or absent when the provider does not know it yet
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub release_date: Option<String>,
    /// Average score on a 0.0 - 10.0 scale
    #[serde(default)]
    pub vote_average: Option<f32>,
}

impl Movie {
    /// Create a movie with no genres, release date or rating
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            genre_ids: Vec::new(),
            release_date: None,
            vote_average: None,
        }
    }

    pub fn with_genres(mut self, genre_ids: impl Into<Vec<GenreId>>) -> Self {
        self.genre_ids = genre_ids.into();
        self
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.vote_average = Some(rating);
        self
    }

    /// Rating used for sorting: an absent rating sorts as 0.0
    pub fn sort_rating(&self) -> f32 {
        self.vote_average.unwrap_or(0.0)
    }
}

/// One of the user's favorite movies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: MovieId,
    pub title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<GenreId>,
}

impl Favorite {
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            release_date: None,
            genre_ids: Vec::new(),
        }
    }

    pub fn with_release_date(mut self, date: impl Into<String>) -> Self {
        self.release_date = Some(date.into());
        self
    }

    pub fn with_genres(mut self, genre_ids: impl Into<Vec<GenreId>>) -> Self {
        self.genre_ids = genre_ids.into();
        self
    }

    /// Release year taken from the `YYYY` prefix of the release date
    pub fn year(&self) -> Option<u16> {
        year_from_release_date(self.release_date.as_deref()?)
    }
}

impl From<&Movie> for Favorite {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            release_date: movie.release_date.clone(),
            genre_ids: movie.genre_ids.clone(),
        }
    }
}

/// Extract the year from a release date
///
/// Example: "2025-12-25" -> Some(2025)
///          "TBA" -> None
pub fn year_from_release_date(date: &str) -> Option<u16> {
    let year = date.get(..4)?;
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    year.parse().ok()
}

// =============================================================================
// Genre Map
// =============================================================================

/// Mapping from genre id to genre name for the current catalog snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenreMap {
    names: HashMap<GenreId, String>,
}

impl GenreMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: GenreId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn name(&self, id: GenreId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    /// Resolve genre ids to names, silently dropping ids the map doesn't know
    pub fn names_for(&self, ids: &[GenreId]) -> Vec<&str> {
        ids.iter().filter_map(|&id| self.name(id)).collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(GenreId, S)> for GenreMap {
    fn from_iter<I: IntoIterator<Item = (GenreId, S)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(|(id, name)| (id, name.into())).collect(),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The four named lists the catalog provider serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CatalogBucket {
    Popular,
    NowPlaying,
    Upcoming,
    TopRated,
}

impl CatalogBucket {
    pub const ALL: [CatalogBucket; 4] = [
        CatalogBucket::Popular,
        CatalogBucket::NowPlaying,
        CatalogBucket::Upcoming,
        CatalogBucket::TopRated,
    ];

    /// File name of this bucket inside a snapshot directory
    pub fn file_name(self) -> &'static str {
        match self {
            CatalogBucket::Popular => "popular.json",
            CatalogBucket::NowPlaying => "now_playing.json",
            CatalogBucket::Upcoming => "upcoming.json",
            CatalogBucket::TopRated => "top_rated.json",
        }
    }
}

/// A catalog snapshot: four movie lists, each in provider order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub popular: Vec<Movie>,
    #[serde(default)]
    pub now_playing: Vec<Movie>,
    #[serde(default)]
    pub upcoming: Vec<Movie>,
    #[serde(default)]
    pub top_rated: Vec<Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bucket(&self, bucket: CatalogBucket) -> &[Movie] {
        match bucket {
            CatalogBucket::Popular => &self.popular,
            CatalogBucket::NowPlaying => &self.now_playing,
            CatalogBucket::Upcoming => &self.upcoming,
            CatalogBucket::TopRated => &self.top_rated,
        }
    }

    pub fn bucket_mut(&mut self, bucket: CatalogBucket) -> &mut Vec<Movie> {
        match bucket {
            CatalogBucket::Popular => &mut self.popular,
            CatalogBucket::NowPlaying => &mut self.now_playing,
            CatalogBucket::Upcoming => &mut self.upcoming,
            CatalogBucket::TopRated => &mut self.top_rated,
        }
    }

    /// Total number of entries across all buckets (duplicates included)
    pub fn total_len(&self) -> usize {
        CatalogBucket::ALL
            .iter()
            .map(|&b| self.bucket(b).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

/// Everything the context builder needs from the outside world, loaded once
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub catalog: Catalog,
    pub genres: GenreMap,
    pub favorites: Vec<Favorite>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
