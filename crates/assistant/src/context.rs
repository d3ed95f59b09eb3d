//! # Context Assembler
//!
//! Turns one chat question into the movie context handed to the model.
//!
//! ## Response shapes
//!
//! | Shape         | Source                                          | Limit        |
//! |---------------|-------------------------------------------------|--------------|
//! | Genre         | top rated, popular, now playing, upcoming merged | 25          |
//! | GenreFallback | popular, no genre filter                        | 8            |
//! | Upcoming etc. | the one requested bucket                        | 15           |
//! | General       | popular + top rated, two sections               | 8 + 6        |
//!
//! Branch selection and limits decide what the model is told exists; the
//! header wording is presentation only.

use std::fmt;

use catalog::{Catalog, CatalogBucket, Favorite, GenreMap};
use intent::{GenreFilter, Intent};
use pipeline::{merge_lists, FavoriteVisibility, MovieFormatter};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::ContextLimits;

/// Which template produced a context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResponseShape {
    Genre,
    /// Genre request with no matching movie
    GenreFallback,
    Upcoming,
    NowPlaying,
    Popular,
    TopRated,
    General,
}

impl fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResponseShape::Genre => "genre",
            ResponseShape::GenreFallback => "genre-fallback",
            ResponseShape::Upcoming => "upcoming",
            ResponseShape::NowPlaying => "now-playing",
            ResponseShape::Popular => "popular",
            ResponseShape::TopRated => "top-rated",
            ResponseShape::General => "general",
        };
        f.write_str(name)
    }
}

/// A built context plus how it was built
#[derive(Debug, Clone)]
pub struct MovieContext {
    pub shape: ResponseShape,
    pub intent: Intent,
    pub visibility: FavoriteVisibility,
    pub text: String,
}

/// Merge order for genre requests: earlier buckets win on duplicates
pub const GENRE_MERGE_ORDER: [CatalogBucket; 4] = [
    CatalogBucket::TopRated,
    CatalogBucket::Popular,
    CatalogBucket::NowPlaying,
    CatalogBucket::Upcoming,
];

/// Builds movie contexts with a fixed set of limits
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextBuilder {
    limits: ContextLimits,
}

impl ContextBuilder {
    pub fn new(limits: ContextLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ContextLimits {
        &self.limits
    }

    /// Build the context string for one question
    pub fn build(
        &self,
        catalog: &Catalog,
        genres: &GenreMap,
        question: &str,
        favorites: &[Favorite],
    ) -> String {
        self.build_detailed(catalog, genres, question, favorites).text
    }

    /// Build the context and report which shape was chosen
    #[instrument(skip_all, fields(question_len = question.len()))]
    pub fn build_detailed(
        &self,
        catalog: &Catalog,
        genres: &GenreMap,
        question: &str,
        favorites: &[Favorite],
    ) -> MovieContext {
        let question = question.to_lowercase();
        let intent = Intent::classify_lowercased(&question);
        let visibility = FavoriteVisibility::decide(&question, favorites);
        let formatter = MovieFormatter::new(genres, favorites, visibility);

        let (shape, text) = match &intent {
            Intent::Genre(filter) => self.genre_context(catalog, &formatter, filter),
            Intent::Category(bucket) => self.category_context(catalog, &formatter, *bucket),
            Intent::General => self.general_context(catalog, &formatter),
        };

        debug!(
            "Built {} context ({} chars, favorites {:?})",
            shape,
            text.len(),
            visibility
        );

        MovieContext {
            shape,
            intent,
            visibility,
            text,
        }
    }

    fn genre_context(
        &self,
        catalog: &Catalog,
        formatter: &MovieFormatter<'_>,
        filter: &GenreFilter,
    ) -> (ResponseShape, String) {
        let lists = GENRE_MERGE_ORDER.map(|bucket| catalog.bucket(bucket));
        let pool = merge_lists(&lists);
        let label = filter.label();

        let movies = formatter.format(pool, self.limits.genre, Some(filter));
        if movies.is_empty() {
            let popular = formatter.format(&catalog.popular, self.limits.genre_fallback, None);
            let text = format!(
                "⚠️ No {label} movies found in the current catalog.\n\
                 🔥 POPULAR MOVIES YOU COULD SUGGEST INSTEAD:\n\
                 {popular}\n\n\
                 Tell the user there are no {label} movies available right now and offer a few of these instead."
            );
            return (ResponseShape::GenreFallback, text);
        }

        let text = format!(
            "🎬 {} MOVIES AVAILABLE (use these exact titles):\n\
             {movies}\n\n\
             Suggest 4-6 movies from this list that best match the request.",
            label.to_uppercase()
        );
        (ResponseShape::Genre, text)
    }

    fn category_context(
        &self,
        catalog: &Catalog,
        formatter: &MovieFormatter<'_>,
        bucket: CatalogBucket,
    ) -> (ResponseShape, String) {
        let (shape, header) = match bucket {
            CatalogBucket::Upcoming => (ResponseShape::Upcoming, "📅 UPCOMING MOVIES"),
            CatalogBucket::NowPlaying => (ResponseShape::NowPlaying, "🎟️ NOW PLAYING IN THEATERS"),
            CatalogBucket::Popular => (ResponseShape::Popular, "🔥 POPULAR MOVIES"),
            CatalogBucket::TopRated => (ResponseShape::TopRated, "⭐ TOP RATED MOVIES"),
        };

        let movies = formatter.format(catalog.bucket(bucket), self.limits.category, None);
        let text = format!(
            "{header} (use these exact titles):\n\
             {movies}\n\n\
             Only mention movies from this list and copy their titles verbatim."
        );
        (shape, text)
    }

    fn general_context(
        &self,
        catalog: &Catalog,
        formatter: &MovieFormatter<'_>,
    ) -> (ResponseShape, String) {
        let popular = formatter.format(&catalog.popular, self.limits.general_popular, None);
        let top_rated = formatter.format(&catalog.top_rated, self.limits.general_top_rated, None);
        let text = format!(
            "🔥 POPULAR MOVIES (use these exact titles):\n\
             {popular}\n\n\
             ⭐ TOP RATED MOVIES (use these exact titles):\n\
             {top_rated}\n\n\
             Recommend from either list and copy the titles verbatim."
        );
        (ResponseShape::General, text)
    }
}

/// Build a context with the default limits
pub fn build_context(
    catalog: &Catalog,
    genres: &GenreMap,
    question: &str,
    favorites: &[Favorite],
) -> String {
    ContextBuilder::default().build(catalog, genres, question, favorites)
}
