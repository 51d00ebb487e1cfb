// src/filtering/mod.rs

//! Content-kind and path classification.
//!
//! These are the leaf checks of the pipeline: what kind of content a blob
//! holds (text, image, binary, large, forbidden) and what kind of path it
//! lives at (vendored, generated). They are exposed publicly so they can be
//! used without a full `Classifier`.

mod content;
mod generated;
mod vendored;

pub use content::{is_binary, is_forbidden, is_image, is_large, is_text, ContentSignature};
pub use generated::{is_generated, is_unindexable_extension};
pub use vendored::PathPatternMatcher;
