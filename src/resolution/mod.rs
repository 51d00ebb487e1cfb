// src/resolution/mod.rs

//! Language resolution and the indexing policy.
//!
//! Resolution combines the registry's extension lookup, the shebang line and
//! the registry's path fallback. Indexability deliberately trusts the
//! extension lookup alone.

mod indexable;
mod interpreter;
mod language;
mod shebang;

pub use indexable::is_indexable;
pub use interpreter::language_for_interpreter;
pub use language::{resolve_language, shebang_language};
pub use shebang::{first_line, parse_shebang, shebang_script};
