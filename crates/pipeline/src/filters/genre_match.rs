//! Filter to keep only movies matching a requested genre filter.

use crate::traits::Filter;
use catalog::{GenreMap, Movie};
use intent::GenreFilter;

/// Keeps candidates whose resolved genre names satisfy a [`GenreFilter`].
///
/// ## Algorithm
/// 1. Resolve the movie's genre ids through the genre map (unknown ids dropped)
/// 2. `all_of` set: every required genre must be present
/// 3. otherwise `any_of` set: at least one target genre must be present
/// 4. neither set: keep everything
pub struct GenreMatchFilter {
    filter: GenreFilter,
}

impl GenreMatchFilter {
    pub fn new(filter: GenreFilter) -> Self {
        Self { filter }
    }
}

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply<'m>(&self, movies: Vec<&'m Movie>, genres: &GenreMap) -> Vec<&'m Movie> {
        movies
            .into_iter()
            .filter(|movie| self.filter.matches(&genres.names_for(&movie.genre_ids)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres() -> GenreMap {
        [(10749, "Romance"), (35, "Comedy"), (27, "Horror")]
            .into_iter()
            .collect()
    }

    fn movies() -> Vec<Movie> {
        vec![
            Movie::new(1, "Rom Com").with_genres(vec![10749, 35]),
            Movie::new(2, "Romance Only").with_genres(vec![10749]),
            Movie::new(3, "Horror").with_genres(vec![27]),
            Movie::new(4, "Unknown Genre").with_genres(vec![424242]),
        ]
    }

    #[test]
    fn test_any_of() {
        let movies = movies();
        let filter = GenreMatchFilter::new(GenreFilter::rom_com());
        let kept = filter.apply(movies.iter().collect(), &genres());

        let ids: Vec<_> = kept.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_all_of() {
        let movies = movies();
        let filter = GenreMatchFilter::new(GenreFilter::all_of(["Romance", "Comedy"]));
        let kept = filter.apply(movies.iter().collect(), &genres());

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn test_unknown_ids_never_match() {
        let movies = movies();
        let filter = GenreMatchFilter::new(GenreFilter::single("Horror"));
        let kept = filter.apply(movies.iter().collect(), &genres());

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 3);
    }
}
