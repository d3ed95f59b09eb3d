//! Pipeline for merging, filtering, ranking and formatting catalog movies.
//!
//! This crate provides:
//! - Filter trait and implementations (favorites, genre match)
//! - FilterPipeline for composing filters
//! - `merge_lists` for deduplicating the catalog buckets
//! - MovieFormatter, which turns a candidate list into prompt-ready text
//!
//! ## Architecture
//! Candidates flow through the stages in a fixed order:
//! 1. Buckets are merged and deduplicated (genre requests only)
//! 2. Filters remove unwanted candidates (favorites, wrong genre)
//! 3. Combined-genre requests are re-ranked
//! 4. The list is truncated and rendered as movie fragments
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{merge_lists, MovieFormatter};
//! use pipeline::filters::FavoriteVisibility;
//!
//! let pool = merge_lists(&[catalog.top_rated.as_slice(), catalog.popular.as_slice()]);
//! let visibility = FavoriteVisibility::decide(&question, &favorites);
//! let formatter = MovieFormatter::new(&genres, &favorites, visibility);
//! let text = formatter.format(pool, 25, Some(&filter));
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod merge;
pub mod ranking;
pub mod format;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use filters::{FavoriteVisibility, FavoritesFilter, GenreMatchFilter};
pub use format::{
    count_fragments, format_genres, format_rating, format_release_date, render_fragment,
    MovieFormatter, FRAGMENT_SEPARATOR,
};
pub use merge::merge_lists;
pub use ranking::rank_preferring_both;
