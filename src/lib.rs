//! `imdb-tsv` ingests the gzip-compressed, tab-separated IMDb dataset dumps
//! into typed in-memory collections and answers top-N ranking queries over
//! the loaded ratings.
//!
//! The primary entrypoints are [`ingestion::load_title_basics`] and
//! [`ingestion::load_title_ratings`]. Each drives a streaming
//! gzip-over-TSV decode: the header is validated against the table's fixed
//! column order, every data line is parsed into a [`types::Title`] or
//! [`types::Rating`], optional caller-supplied predicate and projection
//! callbacks run per row, and the survivors accumulate in a map keyed by
//! identifier. A repeated identifier is a fatal error, never a silent
//! overwrite.
//!
//! ## Quick example: load and rank
//!
//! ```no_run
//! use imdb_tsv::ingestion::{load_title_basics, load_title_ratings, LoadOptions};
//! use imdb_tsv::ranking::top_rated;
//! use imdb_tsv::types::{Rating, Title};
//!
//! # fn main() -> Result<(), imdb_tsv::LoadError> {
//! let titles = load_title_basics(
//!     "data/title.basics.tsv.gz",
//!     LoadOptions::default().with_predicate(|t: &Title| t.title_type == "movie"),
//! )?;
//!
//! // Restrict ratings to titles that survived the first pass.
//! let ratings = load_title_ratings(
//!     "data/title.ratings.tsv.gz",
//!     LoadOptions::default().with_predicate(|r: &Rating| titles.contains_key(&r.id)),
//! )?;
//!
//! for rating in top_rated(&ratings, 10) {
//!     println!("{}: {:.1} ({} votes)", rating.id, rating.average_rating, rating.num_votes);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: gzip line source, table loaders, load options and
//!   observability hooks
//! - [`types`]: the [`types::Title`] / [`types::Rating`] records and their
//!   keyed collections
//! - [`ranking`]: `top_rated` / `top_voted` queries with a deterministic
//!   fixed-precision tie rule
//! - [`error`]: the [`LoadError`] taxonomy shared by all loaders
//!
//! ## Failure model
//!
//! Loads are synchronous, single-threaded and fail-fast: every error aborts
//! the pass and no partial collection is returned. Data lines with fewer
//! columns than the schema are the one tolerated defect; they are skipped
//! (and counted, if an observer is attached). Loaded collections are never
//! mutated afterwards, so they are safe to share across threads for
//! reading.

pub mod error;
pub mod ingestion;
pub mod ranking;
pub mod types;

pub use error::{LoadError, LoadResult};
