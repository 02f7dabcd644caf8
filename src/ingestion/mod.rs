//! Ingestion entry points and implementations.
//!
//! Both IMDb tables load through the same pattern: open the gzip stream,
//! validate the ordered header, then decode each line into a typed record,
//! run it through the caller's optional predicate and projection, and
//! accumulate it under its identifier.
//!
//! - [`load_title_basics`]: the nine-column `title.basics` table
//! - [`load_title_ratings`]: the three-column `title.ratings` table
//! - [`LoadOptions`]: per-load predicate/projection callbacks plus optional
//!   observability
//!
//! A load is strictly fail-fast: any error aborts it and no partial
//! collection is ever returned. The sole tolerated input defect is a data
//! line with fewer columns than the schema, which is skipped.

pub mod gzip_lines;
pub mod observability;
mod table;
pub mod title_basics;
pub mod title_ratings;

use std::fmt;
use std::sync::Arc;

pub use gzip_lines::{GzipLineSource, Line};
pub use observability::{
    CompositeObserver, FileObserver, LoadContext, LoadObserver, LoadStats, Severity,
    StdErrObserver, TableKind,
};
pub use title_basics::{load_title_basics, TITLE_BASICS_COLUMNS};
pub use title_ratings::{load_title_ratings, TITLE_RATINGS_COLUMNS};

/// Options controlling one load pass over a table.
///
/// The default runs with no filtering, no projection, and no observer.
/// The lifetime `'f` lets the callbacks borrow caller state (for example a
/// previously loaded title table used to restrict ratings).
pub struct LoadOptions<'f, R> {
    /// Rows for which this returns `false` are discarded, silently.
    pub predicate: Option<Box<dyn FnMut(&R) -> bool + 'f>>,
    /// Applied to rows that passed the predicate, immediately before
    /// insertion; its result is what gets stored.
    pub projection: Option<Box<dyn FnMut(R) -> R + 'f>>,
    /// Optional observer for success/failure reporting.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: Severity,
}

impl<R> Default for LoadOptions<'_, R> {
    fn default() -> Self {
        Self {
            predicate: None,
            projection: None,
            observer: None,
            alert_at_or_above: Severity::Critical,
        }
    }
}

impl<R> fmt::Debug for LoadOptions<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("predicate_set", &self.predicate.is_some())
            .field("projection_set", &self.projection.is_some())
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl<'f, R> LoadOptions<'f, R> {
    /// Set the row predicate.
    pub fn with_predicate(mut self, predicate: impl FnMut(&R) -> bool + 'f) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Set the row projection.
    pub fn with_projection(mut self, projection: impl FnMut(R) -> R + 'f) -> Self {
        self.projection = Some(Box::new(projection));
        self
    }

    /// Attach an observer.
    pub fn with_observer(mut self, observer: Arc<dyn LoadObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Set the severity threshold for `on_alert`.
    pub fn alert_at_or_above(mut self, severity: Severity) -> Self {
        self.alert_at_or_above = severity;
        self
    }
}
