//! The `blobkind` prelude for convenient library usage.
//!
//! This module re-exports the most commonly used types, traits, and functions
//! from the `blobkind` library.
//!
//! # Example
//!
//! ```
//! use blobkind::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let classifier = ClassifierBuilder::new().build()?;
//! let blob = Blob::new("script/server", b"#!/usr/bin/env ruby\n".to_vec());
//! assert_eq!(classifier.language(&blob).name(), "Ruby");
//! assert_eq!(parse_shebang("#!/usr/bin/env ruby").as_deref(), Some("ruby"));
//!
//! # Ok(())
//! # }
//! ```

pub use crate::classifier::Classifier;
pub use crate::config::ClassifierBuilder;
pub use crate::core_types::{Blob, Classification};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::filtering::{
    is_binary, is_forbidden, is_generated, is_image, is_large, is_text, ContentSignature,
    PathPatternMatcher,
};
pub use crate::language::{BuiltinRegistry, Language, LanguageRegistry};
pub use crate::mime::{GuessMime, MimeLookup};
pub use crate::resolution::{
    is_indexable, language_for_interpreter, parse_shebang, resolve_language, shebang_script,
};
