//! Top-N queries over a loaded [`RatingTable`].
//!
//! Both orderings compare ratings through a fixed-precision key rather than
//! raw floating point, so ties and ordering are reproducible across runs
//! and implementations. There is no third-level tie-break: entries with
//! identical (rating, votes) pairs sort in unspecified relative order,
//! which is accepted behavior.

use std::cmp::Ordering;

use crate::types::{Rating, RatingTable};

/// The rating scaled by 1000 and truncated to an integer.
///
/// IMDb ratings carry at most a few decimals, so this keeps every
/// distinction the data can express while making comparisons exact.
pub fn rating_sort_key(average_rating: f64) -> i64 {
    (average_rating * 1000.0) as i64
}

/// Ratings ordered by rating descending, then vote count descending.
///
/// A `limit` of `0` returns the full ordered sequence; a positive `limit`
/// truncates to the first `limit` entries after sorting.
pub fn top_rated(ratings: &RatingTable, limit: usize) -> Vec<Rating> {
    sorted(ratings, limit, |a, b| {
        rating_sort_key(b.average_rating)
            .cmp(&rating_sort_key(a.average_rating))
            .then_with(|| b.num_votes.cmp(&a.num_votes))
    })
}

/// Ratings ordered by vote count descending, then rating descending.
///
/// Same `limit` handling as [`top_rated`]; the rating tie-break uses the
/// same fixed-precision key.
pub fn top_voted(ratings: &RatingTable, limit: usize) -> Vec<Rating> {
    sorted(ratings, limit, |a, b| {
        b.num_votes.cmp(&a.num_votes).then_with(|| {
            rating_sort_key(b.average_rating).cmp(&rating_sort_key(a.average_rating))
        })
    })
}

fn sorted(
    ratings: &RatingTable,
    limit: usize,
    compare: impl Fn(&Rating, &Rating) -> Ordering,
) -> Vec<Rating> {
    let mut items: Vec<Rating> = ratings.values().cloned().collect();
    items.sort_unstable_by(compare);
    if limit > 0 && limit < items.len() {
        items.truncate(limit);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::{rating_sort_key, top_rated, top_voted};
    use crate::types::{Rating, RatingTable};

    fn table(entries: &[(&str, f64, u64)]) -> RatingTable {
        entries
            .iter()
            .map(|&(id, average_rating, num_votes)| {
                (
                    id.to_string(),
                    Rating {
                        id: id.to_string(),
                        average_rating,
                        num_votes,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn key_scales_and_truncates() {
        assert_eq!(rating_sort_key(8.7500), 8750);
        assert_eq!(rating_sort_key(8.752), 8752);
        assert_eq!(rating_sort_key(0.0), 0);
        assert_eq!(rating_sort_key(10.0), 10000);
    }

    #[test]
    fn top_rated_separates_near_equal_ratings() {
        // Displayed to one decimal these look tied; the fixed-precision
        // keys (8750 vs 8752) must still rank B first.
        let ratings = table(&[("tt0000001", 8.7500, 1000), ("tt0000002", 8.752, 999)]);

        let out = top_rated(&ratings, 0);
        assert_eq!(out[0].id, "tt0000002");
        assert_eq!(out[1].id, "tt0000001");
    }

    #[test]
    fn top_voted_ranks_on_votes_alone() {
        let ratings = table(&[("tt0000001", 8.7500, 1000), ("tt0000002", 8.752, 999)]);

        let out = top_voted(&ratings, 0);
        assert_eq!(out[0].id, "tt0000001");
        assert_eq!(out[1].id, "tt0000002");
    }

    #[test]
    fn top_rated_breaks_rating_ties_on_votes() {
        let ratings = table(&[
            ("tt0000001", 9.0, 10),
            ("tt0000002", 9.0, 500),
            ("tt0000003", 8.9, 100_000),
        ]);

        let out = top_rated(&ratings, 0);
        assert_eq!(out[0].id, "tt0000002");
        assert_eq!(out[1].id, "tt0000001");
        assert_eq!(out[2].id, "tt0000003");
    }

    #[test]
    fn top_voted_breaks_vote_ties_on_rating_key() {
        let ratings = table(&[("tt0000001", 7.1, 500), ("tt0000002", 7.3, 500)]);

        let out = top_voted(&ratings, 0);
        assert_eq!(out[0].id, "tt0000002");
        assert_eq!(out[1].id, "tt0000001");
    }

    #[test]
    fn limit_truncates_a_prefix_of_the_full_sort() {
        let ratings = table(&[
            ("tt0000001", 6.0, 10),
            ("tt0000002", 7.0, 20),
            ("tt0000003", 8.0, 30),
            ("tt0000004", 9.0, 40),
        ]);

        let full = top_rated(&ratings, 0);
        assert_eq!(full.len(), 4);

        let two = top_rated(&ratings, 2);
        assert_eq!(two.len(), 2);
        assert_eq!(two[0], full[0]);
        assert_eq!(two[1], full[1]);

        // Larger than the collection: everything, unmodified.
        assert_eq!(top_rated(&ratings, 100), full);
    }

    #[test]
    fn adjacent_pairs_respect_the_two_key_order() {
        let ratings = table(&[
            ("tt0000001", 8.7, 100),
            ("tt0000002", 8.7, 100),
            ("tt0000003", 8.7, 99),
            ("tt0000004", 9.9, 1),
            ("tt0000005", 1.2, 1_000_000),
        ]);

        let rated = top_rated(&ratings, 0);
        for pair in rated.windows(2) {
            let a = (rating_sort_key(pair[0].average_rating), pair[0].num_votes);
            let b = (rating_sort_key(pair[1].average_rating), pair[1].num_votes);
            assert!(a >= b, "top_rated out of order: {a:?} < {b:?}");
        }

        let voted = top_voted(&ratings, 0);
        for pair in voted.windows(2) {
            let a = (pair[0].num_votes, rating_sort_key(pair[0].average_rating));
            let b = (pair[1].num_votes, rating_sort_key(pair[1].average_rating));
            assert!(a >= b, "top_voted out of order: {a:?} < {b:?}");
        }
    }

    #[test]
    fn empty_table_yields_empty_sequence() {
        let ratings = RatingTable::new();
        assert!(top_rated(&ratings, 0).is_empty());
        assert!(top_voted(&ratings, 5).is_empty());
    }
}
