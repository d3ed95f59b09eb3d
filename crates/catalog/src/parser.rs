//! Parsers for catalog snapshot files.
//!
//! Movie lists are accepted either as the provider's paged envelope
//! (`{"page": 1, "results": [...]}`) or as a bare JSON array. The genre
//! file is either `{"genres": [{"id": .., "name": ..}]}` or a bare array.

use crate::error::{CatalogError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum MovieListFile {
    Paged { results: Vec<Movie> },
    Bare(Vec<Movie>),
}

#[derive(Deserialize)]
struct GenreEntry {
    id: GenreId,
    name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GenreFile {
    Wrapped { genres: Vec<GenreEntry> },
    Bare(Vec<GenreEntry>),
}

/// Read a whole file, mapping a missing file to [`CatalogError::FileNotFound`]
fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse one movie list from a JSON string
pub fn parse_movie_list_str(file: &str, json: &str) -> Result<Vec<Movie>> {
    let parsed: MovieListFile =
        serde_json::from_str(json).map_err(|source| CatalogError::JsonError {
            file: file.to_string(),
            source,
        })?;
    Ok(match parsed {
        MovieListFile::Paged { results } => results,
        MovieListFile::Bare(movies) => movies,
    })
}

/// Parse one movie list file (popular.json, upcoming.json, ...)
pub fn parse_movie_list(path: &Path) -> Result<Vec<Movie>> {
    let json = read_file(path)?;
    parse_movie_list_str(&file_label(path), &json)
}

/// Parse a genre map from a JSON string
///
/// Duplicate ids are rejected: the map must have unique keys.
pub fn parse_genre_map_str(file: &str, json: &str) -> Result<GenreMap> {
    let parsed: GenreFile =
        serde_json::from_str(json).map_err(|source| CatalogError::JsonError {
            file: file.to_string(),
            source,
        })?;
    let entries = match parsed {
        GenreFile::Wrapped { genres } => genres,
        GenreFile::Bare(genres) => genres,
    };

    let mut map = GenreMap::new();
    for entry in entries {
        if map.name(entry.id).is_some() {
            return Err(CatalogError::InvalidValue {
                field: "genre id".to_string(),
                value: format!("{} (duplicate)", entry.id),
            });
        }
        map.insert(entry.id, entry.name);
    }
    Ok(map)
}

/// Parse the genres.json file
pub fn parse_genre_map(path: &Path) -> Result<GenreMap> {
    let json = read_file(path)?;
    parse_genre_map_str(&file_label(path), &json)
}

/// Parse a favorites list from a JSON string (a bare array of favorites)
pub fn parse_favorites_str(file: &str, json: &str) -> Result<Vec<Favorite>> {
    serde_json::from_str(json).map_err(|source| CatalogError::JsonError {
        file: file.to_string(),
        source,
    })
}

/// Parse the favorites.json file
pub fn parse_favorites(path: &Path) -> Result<Vec<Favorite>> {
    let json = read_file(path)?;
    parse_favorites_str(&file_label(path), &json)
}
