//! Configuration for a sort run

use crate::error::{SortError, SortResult};
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure, built once from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    /// File the items are read from
    pub input_file: PathBuf,
    /// File the sorted items are written to
    pub output_file: PathBuf,
    /// Whether lines hold integers or text
    pub kind: ItemKind,
    /// Direction of the sort
    pub order: SortOrder,
    /// Diagnostic logging on stderr
    pub debug: bool,
}

/// Kind of every item in the input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Signed integers, compared numerically
    Integer,
    /// Opaque text lines, compared by code point
    Text,
}

/// Sort order enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl FromStr for ItemKind {
    type Err = SortError;

    fn from_str(flag: &str) -> SortResult<Self> {
        match flag {
            "-i" => Ok(ItemKind::Integer),
            "-s" => Ok(ItemKind::Text),
            other => Err(SortError::illegal_argument(other)),
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(flag: &str) -> SortResult<Self> {
        match flag {
            "-a" => Ok(SortOrder::Ascending),
            "-d" => Ok(SortOrder::Descending),
            other => Err(SortError::illegal_argument(other)),
        }
    }
}

impl SortConfig {
    /// Create a configuration sorting text ascending between the two paths
    pub fn new(input_file: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_file: output_file.into(),
            kind: ItemKind::Text,
            order: SortOrder::Ascending,
            debug: false,
        }
    }

    /// Set the item kind
    pub fn with_kind(mut self, kind: ItemKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the sort order
    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Enable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
