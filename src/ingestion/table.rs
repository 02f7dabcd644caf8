//! Generic driver shared by the two table loaders.

use std::collections::HashMap;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::error::{LoadError, LoadResult};

use super::gzip_lines::{GzipLineSource, Line};
use super::observability::{LoadContext, LoadStats, Severity, TableKind};
use super::LoadOptions;

/// The literal marking an absent optional value in IMDb dumps.
pub(crate) const NULL_SENTINEL: &str = r"\N";

/// A record type that can be parsed from one row of a TSV table.
pub(crate) trait TsvRecord: Sized {
    /// Which table this record comes from (observer/error context).
    const TABLE: TableKind;

    /// Expected header column names, in order.
    const COLUMNS: &'static [&'static str];

    /// Parse one row. `fields` has at least `COLUMNS.len()` entries.
    fn parse(fields: &[&str]) -> LoadResult<Self>;
}

/// Load one table: validate the header, then decode, dedup, filter, project
/// and accumulate rows. Reports the outcome to the configured observer.
pub(crate) fn load_table<R: TsvRecord>(
    path: &Path,
    options: &mut LoadOptions<'_, R>,
) -> LoadResult<HashMap<String, R>> {
    let result = run_load(path, options);

    if let Some(observer) = options.observer.as_ref() {
        let ctx = LoadContext {
            path: path.to_path_buf(),
            table: R::TABLE,
        };
        match &result {
            Ok((table, skipped)) => observer.on_success(
                &ctx,
                LoadStats {
                    rows: table.len(),
                    skipped: *skipped,
                },
            ),
            Err(e) => {
                let severity = severity_for_error(e);
                observer.on_failure(&ctx, severity, e);
                if severity >= options.alert_at_or_above {
                    observer.on_alert(&ctx, severity, e);
                }
            }
        }
    }

    result.map(|(table, _)| table)
}

fn run_load<R: TsvRecord>(
    path: &Path,
    options: &mut LoadOptions<'_, R>,
) -> LoadResult<(HashMap<String, R>, usize)> {
    let mut lines = GzipLineSource::open(path)?;

    let header = match lines.next_line()? {
        Line::Row(header) => header,
        Line::End => {
            return Err(LoadError::Schema {
                message: format!("header line missing ({})", path.display()),
            })
        }
    };
    let columns: Vec<&str> = header.split('\t').collect();
    if columns != R::COLUMNS {
        return Err(LoadError::Schema {
            message: format!(
                "expected columns {:?}, got {:?} ({})",
                R::COLUMNS,
                columns,
                path.display()
            ),
        });
    }

    let mut table: HashMap<String, R> = HashMap::new();
    let mut skipped = 0usize;
    loop {
        let line = match lines.next_line()? {
            Line::Row(line) => line,
            Line::End => break,
        };
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < R::COLUMNS.len() {
            // Truncated trailing rows are tolerated, never an error.
            skipped += 1;
            continue;
        }

        // Uniqueness is judged on the identifier as it appears in the raw
        // row, before the projection gets a chance to rewrite it.
        let id = fields[0];
        if table.contains_key(id) {
            return Err(LoadError::DuplicateKey { id: id.to_owned() });
        }
        let id = id.to_owned();

        let record = R::parse(&fields)?;
        if let Some(predicate) = options.predicate.as_mut() {
            if !predicate(&record) {
                continue;
            }
        }
        let record = match options.projection.as_mut() {
            Some(projection) => projection(record),
            None => record,
        };
        table.insert(id, record);
    }

    Ok((table, skipped))
}

fn severity_for_error(e: &LoadError) -> Severity {
    match e {
        LoadError::NotFound { .. } | LoadError::Io(_) | LoadError::Format { .. } => {
            Severity::Critical
        }
        LoadError::Schema { .. } | LoadError::Parse { .. } | LoadError::DuplicateKey { .. } => {
            Severity::Error
        }
    }
}

/// Parse a required numeric field, naming the column on failure.
pub(crate) fn parse_required<T>(column: &'static str, raw: &str) -> LoadResult<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>().map_err(|e| LoadError::Parse {
        column,
        raw: raw.to_owned(),
        message: e.to_string(),
    })
}

/// Parse an optional integer field: the `\N` sentinel maps to `None`, any
/// other non-numeric value is a fatal parse error naming the column.
pub(crate) fn parse_optional_i32(column: &'static str, raw: &str) -> LoadResult<Option<i32>> {
    if raw == NULL_SENTINEL {
        return Ok(None);
    }
    parse_required(column, raw).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{parse_optional_i32, parse_required};
    use crate::error::LoadError;

    #[test]
    fn optional_int_maps_sentinel_to_none() {
        assert_eq!(parse_optional_i32("startYear", r"\N").unwrap(), None);
        assert_eq!(parse_optional_i32("startYear", "1994").unwrap(), Some(1994));
    }

    #[test]
    fn optional_int_rejects_garbage_naming_the_column() {
        let err = parse_optional_i32("runtimeMinutes", "ninety").unwrap_err();
        match err {
            LoadError::Parse { column, raw, .. } => {
                assert_eq!(column, "runtimeMinutes");
                assert_eq!(raw, "ninety");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn required_parse_reports_raw_value() {
        let err = parse_required::<u64>("numVotes", "-3").unwrap_err();
        assert!(err.to_string().contains("column 'numVotes'"));
        assert!(err.to_string().contains("raw='-3'"));
    }
}
