//! Writing the sorted dataset

use crate::dataset::Dataset;
use crate::error::{SortContext, SortResult};
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create or truncate `path` and write the dataset to it
pub fn write_file(path: &Path, dataset: &Dataset) -> SortResult<()> {
    let target = path.display().to_string();
    let file = File::create(path).on_write(&target)?;
    let mut writer = BufWriter::new(file);

    write_items(&mut writer, dataset).on_write(&target)?;
    writer.flush().on_write(&target)?;

    log::debug!("wrote {} items to {target}", dataset.len());
    Ok(())
}

/// One item per line, no terminator after the last one
pub fn write_items<W: Write>(writer: &mut W, dataset: &Dataset) -> io::Result<()> {
    let text = match dataset {
        Dataset::Integers(items) => items.iter().join("\n"),
        Dataset::Texts(items) => items.iter().join("\n"),
    };
    writer.write_all(text.as_bytes())
}
