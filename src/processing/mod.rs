//! Reads files from disk into `Blob`s and classifies them.
//!
//! Classification itself never touches the file system; this is the thin
//! layer the command line uses to supply the bytes. Files are read and
//! classified in parallel using Rayon, and results keep the input order.

use crate::classifier::Classifier;
use crate::core_types::{Blob, Classification};
use crate::errors::{io_error_with_path, Result};
use log::debug;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// The blob name for a path: as given, with `/` separators.
pub fn blob_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Reads one file into a `Blob`.
///
/// With `load_content` unset only the size is read from the file's
/// metadata, and content-dependent checks treat the blob as uninspectable.
///
/// # Errors
/// Returns `Error::Io` naming the path if the file cannot be read.
pub fn read_blob(path: &Path, load_content: bool) -> Result<Blob> {
    let name = blob_name(path);
    if load_content {
        let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
        debug!("Read {} bytes from '{}'", bytes.len(), name);
        Ok(Blob::new(name, bytes))
    } else {
        let metadata = fs::metadata(path).map_err(|e| io_error_with_path(e, path))?;
        if metadata.is_dir() {
            return Err(io_error_with_path(
                std::io::Error::new(std::io::ErrorKind::Other, "is a directory"),
                path,
            ));
        }
        Ok(Blob::unloaded(name, metadata.len()))
    }
}

/// Reads and classifies every path in parallel.
///
/// The reports are returned in the same order as `paths`. The first read
/// failure aborts the batch.
pub fn classify_paths(
    paths: &[PathBuf],
    classifier: &Classifier,
    load_content: bool,
) -> Result<Vec<Classification>> {
    debug!("Classifying {} paths (content: {})", paths.len(), load_content);
    paths
        .par_iter()
        .map(|path| -> Result<Classification> {
            let blob = read_blob(path, load_content)?;
            Ok(classifier.classify(&blob))
        })
        .collect()
}
