//! Loader for the `title.basics` table.

use std::path::Path;

use crate::error::LoadResult;
use crate::types::{Title, TitleTable};

use super::observability::TableKind;
use super::table::{self, TsvRecord, NULL_SENTINEL};
use super::LoadOptions;

/// Header columns of `title.basics`, in required order.
pub const TITLE_BASICS_COLUMNS: &[&str] = &[
    "tconst",
    "titleType",
    "primaryTitle",
    "originalTitle",
    "isAdult",
    "startYear",
    "endYear",
    "runtimeMinutes",
    "genres",
];

impl TsvRecord for Title {
    const TABLE: TableKind = TableKind::TitleBasics;
    const COLUMNS: &'static [&'static str] = TITLE_BASICS_COLUMNS;

    fn parse(fields: &[&str]) -> LoadResult<Self> {
        Ok(Title {
            id: fields[0].to_owned(),
            title_type: fields[1].to_owned(),
            primary_title: fields[2].to_owned(),
            original_title: fields[3].to_owned(),
            // The dump encodes this as 0/1; anything else counts as false.
            is_adult: fields[4] == "1",
            start_year: table::parse_optional_i32("startYear", fields[5])?,
            end_year: table::parse_optional_i32("endYear", fields[6])?,
            runtime_minutes: table::parse_optional_i32("runtimeMinutes", fields[7])?,
            genres: parse_genres(fields[8]),
        })
    }
}

fn parse_genres(raw: &str) -> Vec<String> {
    if raw == NULL_SENTINEL {
        return Vec::new();
    }
    raw.split(',').map(str::to_owned).collect()
}

/// Load `title.basics` from a gzip-compressed TSV file into a [`TitleTable`].
///
/// Rules:
///
/// - The header must match [`TITLE_BASICS_COLUMNS`] exactly, in order.
/// - Rows with fewer than nine tab-separated fields are skipped.
/// - `startYear`/`endYear`/`runtimeMinutes` treat `\N` as absent; any other
///   non-numeric value is a fatal parse error.
/// - A duplicate `tconst` among retained rows aborts the load.
/// - The year range and title-type/genre enumerations are *not* validated
///   here; callers enforce those through the load predicate.
pub fn load_title_basics(
    path: impl AsRef<Path>,
    mut options: LoadOptions<'_, Title>,
) -> LoadResult<TitleTable> {
    table::load_table(path.as_ref(), &mut options)
}
