//! Genre classifier.
//!
//! Maps a lowercased question to a [`GenreFilter`]. Rules live in an ordered
//! table and the first matching rule wins, so the rom-com rule must stay
//! ahead of the plain romance and comedy rules.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Genre names as they appear in the provider's genre map
pub mod names {
    pub const ROMANCE: &str = "Romance";
    pub const COMEDY: &str = "Comedy";
    pub const ACTION: &str = "Action";
    pub const HORROR: &str = "Horror";
    pub const THRILLER: &str = "Thriller";
    pub const SCIENCE_FICTION: &str = "Science Fiction";
    pub const FANTASY: &str = "Fantasy";
    pub const DRAMA: &str = "Drama";
    pub const ANIMATION: &str = "Animation";
    pub const FAMILY: &str = "Family";
}

/// Which genres a movie must carry to be shown.
///
/// `all_of` takes precedence over `any_of` when both are set. An empty
/// `any_of` and `all_of` keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreFilter {
    /// Keep a movie when at least one of these genre names is present
    pub any_of: Vec<String>,
    /// Keep a movie only when every one of these genre names is present
    pub all_of: Vec<String>,
    /// Rank movies carrying both of the first two `any_of` genres first
    pub prefer_both: bool,
}

impl GenreFilter {
    pub fn any_of<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            any_of: genres.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn all_of<I, S>(genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            all_of: genres.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Single-genre filter
    pub fn single(genre: &str) -> Self {
        Self::any_of([genre])
    }

    /// Romance + Comedy, preferring movies that are both
    pub fn rom_com() -> Self {
        Self {
            prefer_both: true,
            ..Self::any_of([names::ROMANCE, names::COMEDY])
        }
    }

    /// Does a movie with these genre names pass the filter?
    pub fn matches(&self, genre_names: &[&str]) -> bool {
        if !self.all_of.is_empty() {
            return self
                .all_of
                .iter()
                .all(|wanted| genre_names.contains(&wanted.as_str()));
        }
        if !self.any_of.is_empty() {
            return self
                .any_of
                .iter()
                .any(|wanted| genre_names.contains(&wanted.as_str()));
        }
        true
    }

    /// The two genres a movie must both carry to rank first, if this filter
    /// asks for that ordering
    pub fn preferred_pair(&self) -> Option<(&str, &str)> {
        if !self.prefer_both {
            return None;
        }
        match self.any_of.as_slice() {
            [first, second, ..] => Some((first.as_str(), second.as_str())),
            _ => None,
        }
    }

    /// Human readable label, e.g. "Romance/Comedy"
    pub fn label(&self) -> String {
        if self.all_of.is_empty() {
            self.any_of.join("/")
        } else {
            self.all_of.join(" + ")
        }
    }
}

type Predicate = fn(&str) -> bool;

/// Ordered `(keywords, genre)` rules, evaluated top to bottom
const SINGLE_GENRE_RULES: &[(&[&str], &str)] = &[
    (&["romance", "romantic"], names::ROMANCE),
    (&["comedy", "funny", "laugh"], names::COMEDY),
    (&["action"], names::ACTION),
    (&["horror", "scary"], names::HORROR),
    (&["thriller"], names::THRILLER),
    (&["sci-fi", "science fiction"], names::SCIENCE_FICTION),
    (&["fantasy"], names::FANTASY),
    (&["drama"], names::DRAMA),
    (&["animation", "animated"], names::ANIMATION),
    (&["family", "kids"], names::FAMILY),
];

const COMBO_RULES: &[(Predicate, fn() -> GenreFilter)] = &[(mentions_rom_com, GenreFilter::rom_com)];

/// Classify a lowercased question into a genre filter
///
/// Total over any input: an empty or unrelated question yields `None`.
pub fn classify_genre(question_lowercased: &str) -> Option<GenreFilter> {
    for (predicate, build) in COMBO_RULES {
        if predicate(question_lowercased) {
            let filter = build();
            debug!("Genre filter detected: {}", filter.label());
            return Some(filter);
        }
    }

    for (keywords, genre) in SINGLE_GENRE_RULES {
        if keywords.iter().any(|k| question_lowercased.contains(k)) {
            debug!("Genre filter detected: {}", genre);
            return Some(GenreFilter::single(genre));
        }
    }

    None
}

/// "romcom", "rom com", "rom-com", "rom - com" or "romantic comedy"
fn mentions_rom_com(text: &str) -> bool {
    if text.contains("romantic comedy") {
        return true;
    }
    text.match_indices("rom").any(|(idx, _)| {
        let rest = text[idx + "rom".len()..].trim_start_matches([' ', '-']);
        rest.starts_with("com")
    })
}
