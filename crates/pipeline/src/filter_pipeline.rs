//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::Filter;
use catalog::{GenreMap, Movie};
use tracing::debug;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(FavoritesFilter::new(&favorites, FavoriteVisibility::Hide))
///     .add_filter(GenreMatchFilter::new(GenreFilter::single("Horror")));
///
/// let kept = pipeline.apply(candidates, &genres);
/// ```
pub struct FilterPipeline<'f> {
    filters: Vec<Box<dyn Filter + 'f>>,
}

impl<'f> FilterPipeline<'f> {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'f) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// Order is preserved: each filter only removes entries.
    pub fn apply<'m>(&self, movies: Vec<&'m Movie>, genres: &GenreMap) -> Vec<&'m Movie> {
        let mut current = movies;
        for filter in &self.filters {
            let input_count = current.len();
            current = filter.apply(current, genres);
            debug!(
                "Filter applied: {} ({} -> {})",
                filter.name(),
                input_count,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}
