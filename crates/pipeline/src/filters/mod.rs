//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod favorites;
pub mod genre_match;

// Re-export for convenience
pub use favorites::{filter_out_favorites, is_asking_about_favorite, FavoriteVisibility, FavoritesFilter};
pub use genre_match::GenreMatchFilter;
