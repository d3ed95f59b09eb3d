//! # Intent Crate
//!
//! Keyword-driven intent classification for chat questions.
//!
//! ## Components
//!
//! - **genre**: question -> optional [`GenreFilter`] (rom-com combo, then single genres)
//! - **category**: question -> [`CategoryIntent`] (upcoming, now playing, popular, top rated)
//!
//! [`Intent::classify`] combines the two and is the one place that enforces
//! the priority rule: a detected genre always wins and the category
//! classifier is never consulted for it.
//!
//! ## Example Usage
//!
//! ```ignore
//! use intent::Intent;
//!
//! match Intent::classify("Any good rom-coms?") {
//!     Intent::Genre(filter) => println!("genre request: {}", filter.label()),
//!     Intent::Category(bucket) => println!("category request: {:?}", bucket),
//!     Intent::General => println!("general recommendation"),
//! }
//! ```

pub mod genre;
pub mod category;

pub use category::{classify_category, CategoryIntent};
pub use genre::{classify_genre, GenreFilter};

use catalog::CatalogBucket;
use serde::{Deserialize, Serialize};

/// What a question is asking for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// A genre request, searched across every catalog bucket
    Genre(GenreFilter),
    /// A category-only request answered from a single bucket
    Category(CatalogBucket),
    /// Nothing specific: general recommendations
    General,
}

impl Intent {
    /// Classify a raw (not yet lowercased) question
    pub fn classify(question: &str) -> Self {
        Self::classify_lowercased(&question.to_lowercase())
    }

    /// Classify a question that is already lowercased
    pub fn classify_lowercased(question_lowercased: &str) -> Self {
        if let Some(filter) = classify_genre(question_lowercased) {
            return Intent::Genre(filter);
        }
        match classify_category(question_lowercased, false).bucket() {
            Some(bucket) => Intent::Category(bucket),
            None => Intent::General,
        }
    }

    pub fn genre_filter(&self) -> Option<&GenreFilter> {
        match self {
            Intent::Genre(filter) => Some(filter),
            _ => None,
        }
    }
}
