//! Reading and validating the input file

use crate::config::ItemKind;
use crate::dataset::Dataset;
use crate::error::{SortContext, SortError, SortResult};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Non-fatal conditions noticed while reading. Each is reported at most once
/// per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadWarning {
    /// At least one line was blank and has been skipped
    EmptyLinesRemoved,
    /// At least one line contained whitespace and has been trimmed
    TrimmedWhitespace,
}

impl fmt::Display for ReadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadWarning::EmptyLinesRemoved => write!(f, "Warning: empty lines will be removed."),
            ReadWarning::TrimmedWhitespace => write!(
                f,
                "Warning: line contains spaces and data may be sorted incorrectly."
            ),
        }
    }
}

/// Read every item of `path`.
///
/// Warnings are handed to `on_warning` once the whole file has been read and
/// before the empty-dataset check, so they are reported even when that check
/// fails.
pub fn read_file<F>(path: &Path, kind: ItemKind, on_warning: F) -> SortResult<Dataset>
where
    F: FnMut(ReadWarning),
{
    let source = path.display().to_string();
    let file = File::open(path).on_open(&source)?;

    if file.metadata().on_open(&source)?.is_dir() {
        log::debug!("{source} is a directory");
        return Err(SortError::FileNotFound);
    }

    read_items(BufReader::new(file), kind, &source, on_warning)
}

/// Read items from any buffered source. `source` names it in log records.
pub fn read_items<R, F>(
    reader: R,
    kind: ItemKind,
    source: &str,
    mut on_warning: F,
) -> SortResult<Dataset>
where
    R: BufRead,
    F: FnMut(ReadWarning),
{
    let mut dataset = Dataset::new(kind);
    let mut trimmed_whitespace = false;
    let mut empty_lines_removed = false;
    let mut line_count = 0usize;

    for raw in reader.split(b'\n') {
        let mut raw = raw.on_read(source)?;
        line_count += 1;

        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        // Undecodable bytes become U+FFFD instead of failing the read
        let line = String::from_utf8_lossy(&raw);

        let mut item = &*line;
        if item.contains(char::is_whitespace) {
            item = item.trim();
            trimmed_whitespace = true;
        }
        // Whitespace-only lines end up here too
        if item.is_empty() {
            empty_lines_removed = true;
            continue;
        }

        match &mut dataset {
            Dataset::Integers(items) => {
                let value = item.parse::<i64>().map_err(|err| {
                    log::debug!("{source}:{line_count}: {err}");
                    SortError::malformed_number(item)
                })?;
                items.push(value);
            }
            Dataset::Texts(items) => items.push(item.to_string()),
        }
    }

    log::debug!(
        "read {} {:?} items from {line_count} lines of {source}",
        dataset.len(),
        dataset.kind()
    );

    if empty_lines_removed {
        on_warning(ReadWarning::EmptyLinesRemoved);
    }
    if trimmed_whitespace {
        on_warning(ReadWarning::TrimmedWhitespace);
    }

    if dataset.is_empty() {
        return Err(SortError::EmptyDataset);
    }

    Ok(dataset)
}
