//! Error handling for the sorter

use std::io;
use thiserror::Error;

/// Every way a run can fail. `Display` is the single line shown to the user.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("{message}")]
    InvalidArguments { message: String },

    #[error("Error: file not found!")]
    FileNotFound,

    #[error("Error: read error!")]
    ReadFailure,

    #[error("Error: line contains not only numeric data or number is too large: \"{line}\"!")]
    MalformedNumber { line: String },

    #[error("Warning: file contains no sortable data.")]
    EmptyDataset,

    #[error("Error: file write error!")]
    WriteFailure,
}

impl SortError {
    /// Too few command-line tokens
    pub fn not_enough_arguments() -> Self {
        SortError::InvalidArguments {
            message: "Error: not enough arguments!".to_string(),
        }
    }

    /// A flag token that is not one of the accepted values
    pub fn illegal_argument(token: &str) -> Self {
        SortError::InvalidArguments {
            message: format!("Error: illegal argument: \"{token}\"!"),
        }
    }

    pub fn malformed_number(line: &str) -> Self {
        SortError::MalformedNumber {
            line: line.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Maps raw I/O errors onto the generic error kinds. The underlying error is
/// only logged, never surfaced in the message.
pub trait SortContext<T> {
    fn on_open(self, path: &str) -> SortResult<T>;

    fn on_read(self, path: &str) -> SortResult<T>;

    fn on_write(self, path: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn on_open(self, path: &str) -> SortResult<T> {
        self.map_err(|io_err| {
            log::debug!("cannot open {path}: {io_err}");
            SortError::FileNotFound
        })
    }

    fn on_read(self, path: &str) -> SortResult<T> {
        self.map_err(|io_err| {
            log::debug!("read from {path} failed: {io_err}");
            SortError::ReadFailure
        })
    }

    fn on_write(self, path: &str) -> SortResult<T> {
        self.map_err(|io_err| {
            log::debug!("write to {path} failed: {io_err}");
            SortError::WriteFailure
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_single_lines() {
        let errors = [
            SortError::not_enough_arguments(),
            SortError::illegal_argument("-x"),
            SortError::FileNotFound,
            SortError::ReadFailure,
            SortError::malformed_number("12x"),
            SortError::EmptyDataset,
            SortError::WriteFailure,
        ];
        for err in &errors {
            assert!(!err.to_string().contains('\n'), "{err:?}");
        }
    }

    #[test]
    fn test_illegal_argument_names_token() {
        let err = SortError::illegal_argument("-q");
        assert_eq!(err.to_string(), "Error: illegal argument: \"-q\"!");
    }

    #[test]
    fn test_io_errors_map_to_generic_kinds() {
        let denied = || io::Error::new(io::ErrorKind::PermissionDenied, "secret detail");

        let open: SortResult<()> = Err::<(), _>(denied()).on_open("in.txt");
        assert!(matches!(open, Err(SortError::FileNotFound)));

        let read: SortResult<()> = Err::<(), _>(denied()).on_read("in.txt");
        let read = read.unwrap_err();
        assert!(matches!(read, SortError::ReadFailure));
        assert!(!read.to_string().contains("secret"));

        let write: SortResult<()> = Err::<(), _>(denied()).on_write("out.txt");
        assert!(matches!(write, Err(SortError::WriteFailure)));
    }
}
