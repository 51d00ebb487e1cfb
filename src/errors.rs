//! Defines library error types.
//!
//! Classification itself never fails: every verdict is a total function of the
//! blob. The only fallible step is building a `Classifier`, where vendored
//! path patterns are compiled and optional pattern files are read.

use thiserror::Error;

/// Errors returned by `blobkind`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring while reading a file (pattern file, or a blob read by the CLI).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration, detected while building a `Classifier`.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Configuration errors. These only occur at build time, never per blob.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A vendored path pattern is not a valid regular expression.
    #[error("Invalid vendored path pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern, as configured.
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Two options that cannot be combined were both set.
    #[error("Cannot use {option1} and {option2} simultaneously")]
    Conflict { option1: String, option2: String },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("config/vendor.patterns");
        let source_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = io_error_with_path(source_error, &path);

        match error {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("config/vendor.patterns"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_config_error_display() {
        let source = regex::Regex::new("(").unwrap_err();
        let error: Error = ConfigError::InvalidPattern {
            pattern: "(".to_string(),
            source: Box::new(source),
        }
        .into();
        assert!(error
            .to_string()
            .starts_with("Invalid vendored path pattern '('"));

        let conflict: Error = ConfigError::Conflict {
            option1: "vendored_patterns".to_string(),
            option2: "vendored_patterns_file".to_string(),
        }
        .into();
        assert_eq!(
            conflict.to_string(),
            "Cannot use vendored_patterns and vendored_patterns_file simultaneously"
        );
    }
}
