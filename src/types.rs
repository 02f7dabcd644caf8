//! Core record types produced by ingestion.
//!
//! Both tables load into a `HashMap` keyed by the IMDb identifier
//! (`tconst`). Keys are unique by load invariant, insertion order carries
//! no meaning, and a table is never mutated after a successful load, so
//! downstream consumers may share it freely.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Titles keyed by identifier, as returned by
/// [`crate::ingestion::load_title_basics`].
pub type TitleTable = HashMap<String, Title>;

/// Ratings keyed by identifier, as returned by
/// [`crate::ingestion::load_title_ratings`].
pub type RatingTable = HashMap<String, Rating>;

/// One cataloged media work from the `title.basics` table.
///
/// Optional fields use the `\N` sentinel in the input and are represented
/// as `None` here; the loader never substitutes a sentinel number.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Title {
    /// Unique identifier (`tconst`), non-empty.
    pub id: String,
    /// Kind of work (`movie`, `tvSeries`, ...). The loader does not check
    /// membership in the known-type list; that is a caller concern.
    pub title_type: String,
    /// Title used for display.
    pub primary_title: String,
    /// Title in the original language.
    pub original_title: String,
    /// True only when the source field is the literal `1`.
    pub is_adult: bool,
    /// Release year, when known.
    pub start_year: Option<i32>,
    /// Final year for series, when known.
    pub end_year: Option<i32>,
    /// Runtime in minutes, when known.
    pub runtime_minutes: Option<i32>,
    /// Genres in input order; empty when the source field is `\N`.
    pub genres: Vec<String>,
}

/// Aggregate audience feedback for one title, from `title.ratings`.
///
/// `id` references a [`Title`] by identifier. The link is not enforced
/// structurally; callers that want ratings restricted to known titles do
/// so with a load predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Identifier of the rated title (`tconst`).
    pub id: String,
    /// Mean rating, 0.0 through 10.0.
    pub average_rating: f64,
    /// Number of votes received.
    pub num_votes: u64,
}
