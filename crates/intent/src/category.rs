//! Category intent classifier.
//!
//! Only consulted when no genre filter was found: genre requests search
//! every catalog bucket and always take priority.

use catalog::CatalogBucket;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Category-only request detected in a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryIntent {
    Upcoming,
    NowPlaying,
    Popular,
    TopRated,
    None,
}

impl CategoryIntent {
    /// The catalog bucket this intent reads from, if any
    pub fn bucket(self) -> Option<CatalogBucket> {
        match self {
            CategoryIntent::Upcoming => Some(CatalogBucket::Upcoming),
            CategoryIntent::NowPlaying => Some(CatalogBucket::NowPlaying),
            CategoryIntent::Popular => Some(CatalogBucket::Popular),
            CategoryIntent::TopRated => Some(CatalogBucket::TopRated),
            CategoryIntent::None => None,
        }
    }
}

/// Keyword sets, tested in this order; first match wins
const CATEGORY_RULES: &[(&[&str], CategoryIntent)] = &[
    (&["upcoming", "soon", "coming out"], CategoryIntent::Upcoming),
    (&["now playing", "in theaters", "cinema"], CategoryIntent::NowPlaying),
    (&["popular", "trending"], CategoryIntent::Popular),
    (&["top rated", "highest rated"], CategoryIntent::TopRated),
];

/// Classify a lowercased question into a category intent
///
/// Returns [`CategoryIntent::None`] without looking at the text when a genre
/// filter has already been detected.
pub fn classify_category(question_lowercased: &str, has_genre_filter: bool) -> CategoryIntent {
    if has_genre_filter {
        return CategoryIntent::None;
    }

    CATEGORY_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| question_lowercased.contains(k)))
        .map(|&(_, intent)| {
            debug!("Category intent detected: {:?}", intent);
            intent
        })
        .unwrap_or(CategoryIntent::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keywords() {
        let cases = [
            ("what's coming out next month", CategoryIntent::Upcoming),
            ("anything upcoming?", CategoryIntent::Upcoming),
            ("what's now playing", CategoryIntent::NowPlaying),
            ("what's in theaters", CategoryIntent::NowPlaying),
            ("going to the cinema", CategoryIntent::NowPlaying),
            ("what's trending", CategoryIntent::Popular),
            ("most popular right now", CategoryIntent::Popular),
            ("top rated films", CategoryIntent::TopRated),
            ("highest rated of all time", CategoryIntent::TopRated),
        ];
        for (question, expected) in cases {
            assert_eq!(classify_category(question, false), expected, "{question}");
        }
    }

    #[test]
    fn test_upcoming_wins_over_later_categories() {
        assert_eq!(
            classify_category("popular movies coming out soon", false),
            CategoryIntent::Upcoming
        );
        assert_eq!(
            classify_category("top rated and trending", false),
            CategoryIntent::Popular
        );
    }

    #[test]
    fn test_genre_filter_short_circuits() {
        assert_eq!(
            classify_category("upcoming horror", true),
            CategoryIntent::None
        );
    }

    #[test]
    fn test_no_category() {
        assert_eq!(classify_category("what should i watch tonight", false), CategoryIntent::None);
        assert_eq!(classify_category("", false), CategoryIntent::None);
    }

    #[test]
    fn test_bucket_mapping() {
        assert_eq!(CategoryIntent::NowPlaying.bucket(), Some(CatalogBucket::NowPlaying));
        assert_eq!(CategoryIntent::None.bucket(), None);
    }
}
