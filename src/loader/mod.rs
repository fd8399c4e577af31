//! Line-record dataset loader
//!
//! Parses the tabular authorship dataset (one row per observed line of
//! code) into typed [`LineRecord`]s. Expected columns: `commit`, `file`,
//! `line`, `type`, `depth`, `length`, `author`, `date`, `time`,
//! `timezone`, `datetime`. The dataset may supply either the combined
//! `datetime` column or separate `date` + `timezone` columns.
//!
//! ## Leniency policy
//!
//! Story 1.6: A malformed row must not prevent rendering the remaining
//! dataset. Integer fields that fail coercion default to zero and an unparsable
//! timestamp becomes `datetime: None`; both keep the row in the flat
//! dataset so LOC, file and depth counters stay accurate. Only an
//! unreadable file, a missing structural column or a dataset with no
//! data rows is a hard error.

mod error;

pub use error::ParseError;

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use crate::models::LineRecord;

/// Column indices resolved from the dataset header row
#[derive(Debug, Clone, Copy)]
struct Columns {
    commit: usize,
    file: usize,
    line: Option<usize>,
    kind: Option<usize>,
    depth: Option<usize>,
    length: Option<usize>,
    author: Option<usize>,
    date: Option<usize>,
    time: Option<usize>,
    timezone: Option<usize>,
    datetime: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, ParseError> {
        let find = |name: &str| headers.iter().position(|h| h.trim() == name);
        Ok(Self {
            commit: find("commit").ok_or_else(|| ParseError::missing_column("commit"))?,
            file: find("file").ok_or_else(|| ParseError::missing_column("file"))?,
            line: find("line"),
            kind: find("type"),
            depth: find("depth"),
            length: find("length"),
            author: find("author"),
            date: find("date"),
            time: find("time"),
            timezone: find("timezone"),
            datetime: find("datetime"),
        })
    }
}

/// Parser for the per-line authorship CSV dataset
#[derive(Debug, Default)]
pub struct LocParser;

impl LocParser {
    /// Create a new LocParser instance
    pub fn new() -> Self {
        Self
    }

    /// Parse a dataset file from the given path
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Vec<LineRecord>, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_string(&content)
    }

    /// Parse dataset content from a string
    pub fn parse_string(&self, content: &str) -> Result<Vec<LineRecord>, ParseError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let columns = Columns::resolve(reader.headers()?)?;

        let mut records = Vec::new();
        let mut invalid_timestamps = 0usize;

        for (index, row) in reader.records().enumerate() {
            let row = row?;
            let record = parse_row(&row, &columns);
            if record.datetime.is_none() {
                invalid_timestamps += 1;
                warn!(
                    row = index + 1,
                    commit = %record.commit_id,
                    "row has no parsable timestamp, kept without datetime"
                );
            }
            records.push(record);
        }

        if records.is_empty() {
            return Err(ParseError::EmptyDataset);
        }

        debug!(
            rows = records.len(),
            invalid_timestamps, "dataset loaded"
        );
        Ok(records)
    }
}

fn parse_row(row: &StringRecord, columns: &Columns) -> LineRecord {
    let field = |index: Option<usize>| index.and_then(|i| row.get(i)).unwrap_or("").trim();
    let int_field = |index: Option<usize>| field(index).parse::<u32>().unwrap_or(0);

    LineRecord {
        file: field(Some(columns.file)).to_string(),
        kind: field(columns.kind).to_string(),
        line: int_field(columns.line),
        depth: int_field(columns.depth),
        length: int_field(columns.length),
        commit_id: field(Some(columns.commit)).to_string(),
        author: field(columns.author).to_string(),
        datetime: parse_row_datetime(
            field(columns.datetime),
            field(columns.date),
            field(columns.time),
            field(columns.timezone),
        ),
    }
}

/// Resolve a row timestamp: the combined `datetime` column wins, the
/// `date` (+ optional `time` and `timezone`) columns are the fallback.
fn parse_row_datetime(
    datetime: &str,
    date: &str,
    time: &str,
    timezone: &str,
) -> Option<DateTime<FixedOffset>> {
    if !datetime.is_empty() {
        if let Some(parsed) = parse_flexible_datetime(datetime) {
            return Some(parsed);
        }
    }
    if date.is_empty() {
        return None;
    }
    let time = if time.is_empty() { "00:00" } else { time };
    parse_flexible_datetime(&format!("{date}T{time}{timezone}"))
}

/// Try the timestamp shapes seen in the wild, most specific first.
/// Naive timestamps are taken as UTC.
fn parse_flexible_datetime(raw: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed);
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M%z") {
        return Some(parsed);
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.and_utc().fixed_offset())
}
