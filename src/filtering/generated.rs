// src/filtering/generated.rs

use crate::constants::{GENERATED_EXTENSIONS, UNINDEXABLE_EXTENSIONS};
use crate::pathname::extname;

/// Checks if a name belongs to a machine-produced file (Xcode/Interface Builder output).
#[inline]
pub fn is_generated(name: &str) -> bool {
    GENERATED_EXTENSIONS.contains(&extname(name))
}

/// Checks if a name has one of the text extensions excluded from search
/// indexing (translation catalogs and SQL dumps).
#[inline]
pub fn is_unindexable_extension(name: &str) -> bool {
    UNINDEXABLE_EXTENSIONS.contains(&extname(name))
}
