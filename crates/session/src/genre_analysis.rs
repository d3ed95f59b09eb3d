//! Genre preference analysis over a user's favorites.
//!
//! Produces the `genre name -> count` mapping the system prompt ranks into
//! a top-3 preference summary.

use catalog::{Favorite, GenreMap};
use std::collections::HashMap;

/// Count how many favorites carry each genre
///
/// Genre ids missing from the genre map are ignored. A favorite listing
/// the same genre twice counts once.
pub fn genre_analysis(favorites: &[Favorite], genres: &GenreMap) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for favorite in favorites {
        let mut names = genres.names_for(&favorite.genre_ids);
        names.sort_unstable();
        names.dedup();
        for name in names {
            *counts.entry(name.to_string()).or_insert(0) += 1;
        }
    }
    counts
}

/// Genres ordered by count descending, ties broken by name
pub fn top_genres(analysis: &HashMap<String, u32>, n: usize) -> Vec<(&str, u32)> {
    let mut ranked: Vec<(&str, u32)> = analysis
        .iter()
        .map(|(name, &count)| (name.as_str(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn genres() -> GenreMap {
        [(28, "Action"), (878, "Science Fiction"), (18, "Drama")]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_genre_analysis_counts() {
        let favorites = vec![
            Favorite::new(1, "The Matrix").with_genres(vec![28, 878]),
            Favorite::new(2, "Heat").with_genres(vec![28, 18, 28]),
            Favorite::new(3, "Unknown").with_genres(vec![12345]),
        ];

        let analysis = genre_analysis(&favorites, &genres());
        assert_eq!(analysis.get("Action"), Some(&2));
        assert_eq!(analysis.get("Science Fiction"), Some(&1));
        assert_eq!(analysis.get("Drama"), Some(&1));
        assert_eq!(analysis.len(), 3);
    }

    #[test]
    fn test_top_genres_ordering() {
        let analysis: HashMap<String, u32> = [
            ("Drama".to_string(), 1),
            ("Action".to_string(), 4),
            ("Comedy".to_string(), 2),
            ("Animation".to_string(), 2),
        ]
        .into_iter()
        .collect();

        let top = top_genres(&analysis, 3);
        assert_eq!(top, vec![("Action", 4), ("Animation", 2), ("Comedy", 2)]);
    }

    #[test]
    fn test_empty_analysis() {
        assert!(genre_analysis(&[], &genres()).is_empty());
        assert!(top_genres(&HashMap::new(), 3).is_empty());
    }
}
