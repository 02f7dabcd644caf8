//! Optional observer hooks for load outcomes.
//!
//! The loaders themselves never log. Attaching a [`LoadObserver`] through
//! [`super::LoadOptions`] is how callers get success/failure reporting
//! without the core taking a logging dependency.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::LoadError;

/// Which table a load touched; part of every observer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// The nine-column `title.basics` table.
    TitleBasics,
    /// The three-column `title.ratings` table.
    TitleRatings,
}

impl TableKind {
    /// Stable name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            TableKind::TitleBasics => "title.basics",
            TableKind::TitleRatings => "title.ratings",
        }
    }
}

/// Severity classification for failed loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Informational event.
    Info,
    /// Non-fatal oddity.
    Warning,
    /// The load failed on malformed input (schema, parse, duplicate key).
    Error,
    /// The load failed on infrastructure (missing file, I/O, bad stream).
    Critical,
}

/// Context about one load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// Input path the loader was given.
    pub path: PathBuf,
    /// Table the loader was reading.
    pub table: TableKind,
}

/// Counters reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Rows retained in the result collection.
    pub rows: usize,
    /// Short rows skipped as malformed.
    pub skipped: usize,
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when a load succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when a load fails.
    fn on_failure(&self, _ctx: &LoadContext, _severity: Severity, _error: &LoadError) {}

    /// Called when a failure meets the alert threshold. Defaults to
    /// forwarding to [`Self::on_failure`].
    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &LoadError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Fans every callback out to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn LoadObserver>>,
}

impl CompositeObserver {
    /// Create a composite from a list of observers.
    pub fn new(observers: Vec<Arc<dyn LoadObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl LoadObserver for CompositeObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_failure(&self, ctx: &LoadContext, severity: Severity, error: &LoadError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &LoadError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Writes load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] table={} path={} rows={} skipped={}",
            ctx.table.name(),
            ctx.path.display(),
            stats.rows,
            stats.skipped
        );
    }

    fn on_failure(&self, ctx: &LoadContext, severity: Severity, error: &LoadError) {
        eprintln!(
            "[load][{severity:?}] table={} path={} err={error}",
            ctx.table.name(),
            ctx.path.display()
        );
    }

    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &LoadError) {
        eprintln!(
            "[ALERT][load][{severity:?}] table={} path={} err={error}",
            ctx.table.name(),
            ctx.path.display()
        );
    }
}

/// Appends load events to a local log file.
///
/// Writes are best-effort; failures to open or append the log are ignored.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer appending events to `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl LoadObserver for FileObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        self.append_line(&format!(
            "{} ok table={} path={} rows={} skipped={}",
            unix_ts(),
            ctx.table.name(),
            ctx.path.display(),
            stats.rows,
            stats.skipped
        ));
    }

    fn on_failure(&self, ctx: &LoadContext, severity: Severity, error: &LoadError) {
        self.append_line(&format!(
            "{} fail severity={severity:?} table={} path={} err={error}",
            unix_ts(),
            ctx.table.name(),
            ctx.path.display()
        ));
    }

    fn on_alert(&self, ctx: &LoadContext, severity: Severity, error: &LoadError) {
        self.append_line(&format!(
            "{} ALERT severity={severity:?} table={} path={} err={error}",
            unix_ts(),
            ctx.table.name(),
            ctx.path.display()
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
