// src/pathname.rs

//! Path helpers over blob names.
//!
//! Blob names are plain strings (they may come from a repository tree rather
//! than the local file system), so these helpers never touch the disk.

use std::path::Path;

/// Returns the final component of `name`, or `name` itself if it has none.
///
/// # Examples
/// ```
/// use blobkind::pathname::basename;
///
/// assert_eq!(basename("lib/linguist/blob.rb"), "blob.rb");
/// assert_eq!(basename("Makefile"), "Makefile");
/// ```
pub fn basename(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|os_str| os_str.to_str())
        .unwrap_or(name)
}

/// Returns the extension of `name` including the leading dot, or `""`.
///
/// Dotfiles such as `.bashrc` have no extension, and neither does a name
/// ending in a bare dot. The extension is returned as written; no case
/// folding is applied.
///
/// # Examples
/// ```
/// use blobkind::pathname::extname;
///
/// assert_eq!(extname("src/main.rs"), ".rs");
/// assert_eq!(extname("archive.tar.gz"), ".gz");
/// assert_eq!(extname("IMAGE.PNG"), ".PNG");
/// assert_eq!(extname(".bashrc"), "");
/// assert_eq!(extname("bin/script"), "");
/// ```
pub fn extname(name: &str) -> &str {
    let base = basename(name);
    match Path::new(base).extension().and_then(|ext| ext.to_str()) {
        Some(ext) if !ext.is_empty() => &base[base.len() - ext.len() - 1..],
        _ => "",
    }
}
