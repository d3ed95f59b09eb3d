//! Merge several catalog lists into one deduplicated candidate pool.

use catalog::{Movie, MovieId};
use std::collections::HashSet;
use tracing::debug;

/// Merge lists in the given order, keeping the first occurrence of each id.
///
/// Earlier lists win on duplicate ids, and order within the result follows
/// list order then position. O(total movies).
pub fn merge_lists<'m>(lists: &[&'m [Movie]]) -> Vec<&'m Movie> {
    let total: usize = lists.iter().map(|list| list.len()).sum();
    let mut seen: HashSet<MovieId> = HashSet::with_capacity(total);
    let mut merged = Vec::with_capacity(total);

    for list in lists {
        for movie in list.iter() {
            if seen.insert(movie.id) {
                merged.push(movie);
            }
        }
    }

    debug!("Merged {} entries into {} unique movies", total, merged.len());
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_deduplicates_by_id() {
        let top_rated = vec![Movie::new(1, "A").with_rating(9.0), Movie::new(2, "B")];
        let popular = vec![
            Movie::new(1, "A (popular copy)").with_rating(5.0),
            Movie::new(3, "C"),
        ];

        let merged = merge_lists(&[top_rated.as_slice(), popular.as_slice()]);

        let ids: Vec<_> = merged.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // The instance from the earliest list is kept
        assert_eq!(merged[0].title, "A");
        assert_eq!(merged[0].vote_average, Some(9.0));
    }

    #[test]
    fn test_merge_handles_empty_inputs() {
        assert!(merge_lists(&[]).is_empty());

        let empty: Vec<Movie> = Vec::new();
        let only = vec![Movie::new(5, "E")];
        let merged = merge_lists(&[empty.as_slice(), only.as_slice(), empty.as_slice()]);
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_merge_dedups_within_one_list() {
        let list = vec![Movie::new(1, "A"), Movie::new(1, "A again"), Movie::new(2, "B")];
        let merged = merge_lists(&[list.as_slice()]);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].title, "A");
    }
}
