//! Sort a file of integers or text lines
//!
//! The run is a straight pipeline: parse the command line into a
//! [`SortConfig`], read and validate the input file into a typed
//! [`Dataset`], insertion-sort it in place, then write it out one item per
//! line.

#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod insertion_sort;
pub mod output;

// Re-export commonly used types
pub use cli::parse_args;
pub use config::{ItemKind, SortConfig, SortOrder};
pub use dataset::Dataset;
pub use error::{SortError, SortResult};
pub use input::ReadWarning;

/// Read, sort and write according to `config`, returning the number of items
/// written. The output file is only opened once sorting is done.
pub fn sort_file<F>(config: &SortConfig, on_warning: F) -> SortResult<usize>
where
    F: FnMut(ReadWarning),
{
    log::info!(
        "sorting {} ({:?}, {:?}) into {}",
        config.input_file.display(),
        config.kind,
        config.order,
        config.output_file.display()
    );

    let mut dataset = input::read_file(&config.input_file, config.kind, on_warning)?;
    insertion_sort::sort_dataset(&mut dataset, config.order);
    output::write_file(&config.output_file, &dataset)?;

    Ok(dataset.len())
}
