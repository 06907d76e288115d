//! Error types for searchview.
//!
//! Errors are a small `thiserror` hierarchy composing through `?` and `From`:
//!
//! - [`AppError`] - top-level error returned from `main`
//!   - [`DatasetError`] - loading or validating the record dataset
//!   - [`SearchError`] - the one condition the search core rejects
//!   - [`crate::config::ConfigError`] - config file read/parse failures
//!   - [`crate::logging::LoggingError`] - tracing subscriber setup
//!   - `std::io::Error` - terminal failures
//!
//! Filtering and sorting are total, so nothing in the search core fails once
//! a dataset has been accepted. The only recognized input error is a sort mode
//! outside the defined set, rejected at the boundary where it is chosen.

use std::path::PathBuf;
use thiserror::Error;

use super::record::RecordId;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Dataset could not be loaded. Fatal: there is nothing to search.
    #[error("Failed to load dataset: {0}")]
    Dataset(#[from] DatasetError),

    /// Invalid search argument supplied on the command line.
    #[error("Invalid argument: {0}")]
    Search(#[from] SearchError),

    /// Config file exists but is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Log file could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors raised by the search core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Sort mode outside `{relevance, rating}`. Never coerced to a default.
    #[error("invalid sort mode '{value}' (expected 'relevance' or 'rating')")]
    InvalidSortMode {
        /// The rejected value, verbatim.
        value: String,
    },
}

/// Errors encountered when loading or validating a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Dataset file could not be read.
    #[error("Failed to read dataset at {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Dataset is not a JSON array of valid records (including ratings out of range).
    #[error("Invalid dataset JSON: {message}")]
    InvalidJson {
        /// Parser message from `serde_json`.
        message: String,
    },

    /// Two records share an id.
    #[error("Duplicate record id {id}")]
    DuplicateId {
        /// The id seen more than once.
        id: RecordId,
    },

    /// A record has an empty tag list.
    #[error("Record {id} has no tags")]
    MissingTags {
        /// Id of the offending record.
        id: RecordId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn invalid_sort_mode_display_names_value() {
        let err = SearchError::InvalidSortMode {
            value: "newest".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("'newest'"));
        assert!(msg.contains("relevance"));
    }

    #[test]
    fn dataset_read_error_display_includes_path() {
        let err = DatasetError::Read {
            path: PathBuf::from("/tmp/records.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/records.json"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn duplicate_id_display() {
        let err = DatasetError::DuplicateId {
            id: RecordId::new(3),
        };
        assert_eq!(err.to_string(), "Duplicate record id #3");
    }

    #[test]
    fn app_error_from_dataset_error() {
        let app_err: AppError = DatasetError::MissingTags {
            id: RecordId::new(1),
        }
        .into();
        let msg = app_err.to_string();
        assert!(msg.contains("Failed to load dataset"));
        assert!(msg.contains("no tags"));
    }

    #[test]
    fn app_error_from_search_error() {
        let app_err: AppError = SearchError::InvalidSortMode {
            value: "x".to_string(),
        }
        .into();
        assert!(app_err.to_string().starts_with("Invalid argument"));
    }

    #[test]
    fn app_error_from_io_error() {
        let app_err: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken").into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }
}
