//! Ranking for combined-genre requests.

use catalog::{GenreMap, Movie};
use std::cmp::Ordering;

/// Sort candidates so movies carrying both genres come first, then by
/// rating descending inside each group.
///
/// The sort is stable: equal ratings keep their incoming relative order.
/// An absent rating sorts as 0.0.
pub fn rank_preferring_both(movies: &mut [&Movie], pair: (&str, &str), genres: &GenreMap) {
    let has_both = |movie: &Movie| {
        let names = genres.names_for(&movie.genre_ids);
        names.contains(&pair.0) && names.contains(&pair.1)
    };

    movies.sort_by(|a, b| {
        has_both(*b)
            .cmp(&has_both(*a))
            .then_with(|| compare_rating_desc(a, b))
    });
}

/// Rating descending; NaN compares equal so it never panics
fn compare_rating_desc(a: &Movie, b: &Movie) -> Ordering {
    b.sort_rating()
        .partial_cmp(&a.sort_rating())
        .unwrap_or(Ordering::Equal)
}
