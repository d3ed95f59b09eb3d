//! Movie formatting for prompt context.
//!
//! Each surviving movie is rendered as one compact fragment:
//!
//! ```text
//! *Inception* (Release: Jul 15, 2010) ⭐8.4 [Action, Science Fiction]
//! ```
//!
//! Titles are wrapped in asterisks without escaping; a title that itself
//! contains `*` will break the delimiter convention downstream.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{FavoriteVisibility, FavoritesFilter, GenreMatchFilter};
use crate::ranking::rank_preferring_both;
use catalog::{Favorite, GenreMap, Movie};
use intent::GenreFilter;
use tracing::debug;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Separator between fragments in a formatted list
pub const FRAGMENT_SEPARATOR: &str = ", ";

/// `YYYY-MM-DD` -> `"Dec 25, 2025"`; anything else -> `"TBA"`
pub fn format_release_date(date: Option<&str>) -> String {
    date.and_then(parse_release_date)
        .map(|(year, month, day)| format!("{} {}, {}", MONTHS[month as usize - 1], day, year))
        .unwrap_or_else(|| "TBA".to_string())
}

fn parse_release_date(date: &str) -> Option<(u16, u8, u8)> {
    let mut parts = date.trim().splitn(3, '-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;

    if year.len() != 4 {
        return None;
    }
    let year: u16 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    let day: u8 = day.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((year, month, day))
}

/// One decimal place; `"N/A"` only when the rating is absent
///
/// A real score of 0.0 renders as `"0.0"`.
pub fn format_rating(rating: Option<f32>) -> String {
    match rating {
        Some(value) if value.is_finite() => format!("{:.1}", value),
        _ => "N/A".to_string(),
    }
}

/// Comma-joined genre names, or `"Unknown"` when there are none
pub fn format_genres(names: &[&str]) -> String {
    if names.is_empty() {
        "Unknown".to_string()
    } else {
        names.join(", ")
    }
}

/// Render one movie as a context fragment
pub fn render_fragment(movie: &Movie, genres: &GenreMap) -> String {
    format!(
        "*{}* (Release: {}) ⭐{} [{}]",
        movie.title,
        format_release_date(movie.release_date.as_deref()),
        format_rating(movie.vote_average),
        format_genres(&genres.names_for(&movie.genre_ids))
    )
}

/// Filters, ranks, truncates and renders candidate lists for one question.
///
/// ## Algorithm
/// 1. Drop favorites (unless the question asks about one, see [`FavoriteVisibility`])
/// 2. Apply the genre filter, if any
/// 3. With `prefer_both`, rank movies carrying both genres first, then by rating
/// 4. Otherwise keep incoming order
/// 5. Truncate to `limit`
/// 6. Render fragments joined with `", "`
pub struct MovieFormatter<'a> {
    genres: &'a GenreMap,
    favorites: FavoritesFilter,
}

impl<'a> MovieFormatter<'a> {
    pub fn new(genres: &'a GenreMap, favorites: &[Favorite], visibility: FavoriteVisibility) -> Self {
        Self {
            genres,
            favorites: FavoritesFilter::new(favorites, visibility),
        }
    }

    /// Formatter that never hides anything
    pub fn without_favorites(genres: &'a GenreMap) -> Self {
        Self::new(genres, &[], FavoriteVisibility::Hide)
    }

    pub fn visibility(&self) -> FavoriteVisibility {
        self.favorites.visibility()
    }

    /// Steps 1-5: the movies that would be rendered, in render order
    pub fn select<'m, I>(&self, movies: I, limit: usize, genre_filter: Option<&GenreFilter>) -> Vec<&'m Movie>
    where
        I: IntoIterator<Item = &'m Movie>,
    {
        let mut pipeline = FilterPipeline::new().add_filter(&self.favorites);
        if let Some(filter) = genre_filter {
            pipeline = pipeline.add_filter(GenreMatchFilter::new(filter.clone()));
        }

        let mut selected = pipeline.apply(movies.into_iter().collect(), self.genres);

        if let Some(pair) = genre_filter.and_then(GenreFilter::preferred_pair) {
            rank_preferring_both(&mut selected, pair, self.genres);
        }

        selected.truncate(limit);
        selected
    }

    /// Format at most `limit` movies; empty string when nothing survives
    pub fn format<'m, I>(&self, movies: I, limit: usize, genre_filter: Option<&GenreFilter>) -> String
    where
        I: IntoIterator<Item = &'m Movie>,
    {
        let selected = self.select(movies, limit, genre_filter);
        debug!("Formatting {} movies (limit {})", selected.len(), limit);

        selected
            .into_iter()
            .map(|movie| render_fragment(movie, self.genres))
            .collect::<Vec<_>>()
            .join(FRAGMENT_SEPARATOR)
    }
}

/// Count the fragments in a formatted list
pub fn count_fragments(formatted: &str) -> usize {
    formatted.matches("(Release: ").count()
}
