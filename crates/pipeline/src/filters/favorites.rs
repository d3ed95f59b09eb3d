//! Filter to hide movies the user has already favorited.
//!
//! Favorites are hidden unless the question is about one of them. The
//! decision is made once per question ([`FavoriteVisibility::decide`]) and
//! threaded through every formatting call.

use crate::traits::Filter;
use catalog::{Favorite, GenreMap, Movie, MovieId};
use std::collections::HashSet;

/// Whether favorites are hidden from the candidates of one question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteVisibility {
    /// Remove favorites from every candidate list
    Hide,
    /// The question names a favorite, so nothing is hidden
    ShowBecauseAskedDirectly,
}

impl FavoriteVisibility {
    pub fn decide(question_lowercased: &str, favorites: &[Favorite]) -> Self {
        if is_asking_about_favorite(question_lowercased, favorites) {
            FavoriteVisibility::ShowBecauseAskedDirectly
        } else {
            FavoriteVisibility::Hide
        }
    }
}

/// Does the question mention one of the favorites by title?
///
/// Matches the full lowercased title, or the part before a colon so that
/// "Dune: Part Two" is matched by a question about "dune".
pub fn is_asking_about_favorite(question_lowercased: &str, favorites: &[Favorite]) -> bool {
    favorites.iter().any(|favorite| {
        let title = favorite.title.trim().to_lowercase();
        if title.is_empty() {
            return false;
        }
        if question_lowercased.contains(&title) {
            return true;
        }
        match title.split_once(':') {
            Some((main, _)) => {
                let main = main.trim();
                !main.is_empty() && question_lowercased.contains(main)
            }
            None => false,
        }
    })
}

/// Removes favorites from the candidates.
///
/// ## Algorithm
/// A movie is a favorite when its id is a favorite id, or when its
/// lowercased title equals a favorite's lowercased title. The title check
/// catches the same film arriving with a different id from another call.
#[derive(Debug, Clone)]
pub struct FavoritesFilter {
    ids: HashSet<MovieId>,
    titles: HashSet<String>,
    visibility: FavoriteVisibility,
}

impl FavoritesFilter {
    pub fn new(favorites: &[Favorite], visibility: FavoriteVisibility) -> Self {
        Self {
            ids: favorites.iter().map(|f| f.id).collect(),
            titles: favorites.iter().map(|f| f.title.to_lowercase()).collect(),
            visibility,
        }
    }

    pub fn visibility(&self) -> FavoriteVisibility {
        self.visibility
    }

    fn is_favorite(&self, movie: &Movie) -> bool {
        self.ids.contains(&movie.id) || self.titles.contains(&movie.title.to_lowercase())
    }
}

impl Filter for FavoritesFilter {
    fn name(&self) -> &str {
        "FavoritesFilter"
    }

    fn apply<'m>(&self, movies: Vec<&'m Movie>, _genres: &GenreMap) -> Vec<&'m Movie> {
        if self.visibility == FavoriteVisibility::ShowBecauseAskedDirectly {
            return movies;
        }
        movies
            .into_iter()
            .filter(|movie| !self.is_favorite(movie))
            .collect()
    }
}

/// Free-function form of [`FavoritesFilter`]
pub fn filter_out_favorites<'m>(
    movies: Vec<&'m Movie>,
    favorites: &[Favorite],
    visibility: FavoriteVisibility,
) -> Vec<&'m Movie> {
    FavoritesFilter::new(favorites, visibility).apply(movies, &GenreMap::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn favorites() -> Vec<Favorite> {
        vec![
            Favorite::new(100, "Dune: Part Two"),
            Favorite::new(200, "Heat"),
        ]
    }

    #[test]
    fn test_asking_about_favorite_full_title() {
        assert!(is_asking_about_favorite("is dune: part two worth a rewatch?", &favorites()));
        assert!(is_asking_about_favorite("movies like heat", &favorites()));
    }

    #[test]
    fn test_asking_about_favorite_pre_colon() {
        assert!(is_asking_about_favorite("tell me about dune", &favorites()));
    }

    #[test]
    fn test_not_asking_about_favorite() {
        assert!(!is_asking_about_favorite("recommend a horror movie", &favorites()));
        assert!(!is_asking_about_favorite("anything", &[]));
    }

    #[test]
    fn test_blank_favorite_title_never_matches() {
        let favorites = vec![Favorite::new(1, "  "), Favorite::new(2, ": Subtitle Only")];
        assert!(!is_asking_about_favorite("anything at all", &favorites));
    }

    #[test]
    fn test_filter_by_id_and_title() {
        let movies = vec![
            Movie::new(100, "Dune: Part Two"), // same id
            Movie::new(999, "HEAT"),           // same title, other id
            Movie::new(300, "Alien"),
        ];

        let kept = filter_out_favorites(movies.iter().collect(), &favorites(), FavoriteVisibility::Hide);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 300);
    }

    #[test]
    fn test_favorites_kept_when_asked_directly() {
        let movies = vec![Movie::new(100, "Dune: Part Two"), Movie::new(300, "Alien")];
        let visibility = FavoriteVisibility::decide("what about dune?", &favorites());
        assert_eq!(visibility, FavoriteVisibility::ShowBecauseAskedDirectly);

        let kept = filter_out_favorites(movies.iter().collect(), &favorites(), visibility);
        assert_eq!(kept.len(), 2);
    }
}
