// src/config/parsing.rs

use crate::errors::{io_error_with_path, Result};
use std::path::Path;

/// Parses the contents of a pattern file into a list of patterns.
///
/// One pattern per line. Surrounding whitespace is trimmed; blank lines and
/// lines starting with `#` are skipped.
///
/// # Examples
/// ```
/// use blobkind::config::parse_pattern_lines;
///
/// let patterns = parse_pattern_lines("# third party\n(^|/)vendor/\n\n  \\.min\\.js$  \n");
/// assert_eq!(patterns, vec!["(^|/)vendor/", r"\.min\.js$"]);
/// ```
pub fn parse_pattern_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Reads and parses a pattern file.
pub fn read_pattern_file(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let patterns = parse_pattern_lines(&contents);
    if patterns.is_empty() {
        log::warn!(
            "Pattern file '{}' contains no patterns; nothing will be treated as vendored",
            path.display()
        );
    }
    Ok(patterns)
}
