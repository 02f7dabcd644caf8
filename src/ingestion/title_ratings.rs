//! Loader for the `title.ratings` table.

use std::path::Path;

use crate::error::LoadResult;
use crate::types::{Rating, RatingTable};

use super::observability::TableKind;
use super::table::{self, TsvRecord};
use super::LoadOptions;

/// Header columns of `title.ratings`, in required order.
pub const TITLE_RATINGS_COLUMNS: &[&str] = &["tconst", "averageRating", "numVotes"];

impl TsvRecord for Rating {
    const TABLE: TableKind = TableKind::TitleRatings;
    const COLUMNS: &'static [&'static str] = TITLE_RATINGS_COLUMNS;

    fn parse(fields: &[&str]) -> LoadResult<Self> {
        Ok(Rating {
            id: fields[0].to_owned(),
            // No sentinel handling here: both fields are required.
            average_rating: table::parse_required("averageRating", fields[1])?,
            num_votes: table::parse_required("numVotes", fields[2])?,
        })
    }
}

/// Load `title.ratings` from a gzip-compressed TSV file into a
/// [`RatingTable`].
///
/// Structurally identical to
/// [`super::title_basics::load_title_basics`], against the three-column
/// schema of [`TITLE_RATINGS_COLUMNS`]: same short-row skipping, same fatal
/// duplicate-identifier policy. `averageRating` must parse as a decimal
/// number and `numVotes` as a non-negative integer.
pub fn load_title_ratings(
    path: impl AsRef<Path>,
    mut options: LoadOptions<'_, Rating>,
) -> LoadResult<RatingTable> {
    table::load_table(path.as_ref(), &mut options)
}
