//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate movies.

use catalog::{GenreMap, Movie};

/// Core trait for filtering candidate movies.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be shared across concurrent requests
/// - Candidates are borrowed from the catalog; filters only drop entries,
///   they never clone or modify a movie
/// - Filtering cannot fail: unknown genre ids and missing fields are
///   handled by the filter itself
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `movies` - The candidates to filter (takes ownership of the Vec)
    /// * `genres` - Genre map used to resolve genre ids to names
    fn apply<'m>(&self, movies: Vec<&'m Movie>, genres: &GenreMap) -> Vec<&'m Movie>;
}

impl<F: Filter + ?Sized> Filter for &F {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply<'m>(&self, movies: Vec<&'m Movie>, genres: &GenreMap) -> Vec<&'m Movie> {
        (**self).apply(movies, genres)
    }
}
