//! Building a `Classifier` from configuration.
//!
//! The lookup tables a classifier reads (vendored path patterns, the
//! language registry, the MIME lookup) are assembled here once, validated,
//! and then frozen inside the `Classifier`.

pub use builder::ClassifierBuilder;
pub use parsing::{parse_pattern_lines, read_pattern_file};

mod builder;
mod parsing;
