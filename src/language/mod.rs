//! Language identities and the registry the classifier resolves them from.
//!
//! The registry is an injected collaborator: the classifier only talks to it
//! through the `LanguageRegistry` trait. `BuiltinRegistry` is the default
//! implementation backed by a static table.

use crate::constants::TEXT_LANGUAGE;
use std::fmt;
use std::hash::{Hash, Hasher};

mod builtin;

pub use builtin::BuiltinRegistry;

/// A canonical language identity and the lexer used to highlight it.
///
/// Two languages are equal when their names are equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Language {
    name: String,
    lexer: String,
}

impl Language {
    pub fn new(name: impl Into<String>, lexer: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lexer: lexer.into(),
        }
    }

    /// The sentinel "Text" language: plain text, or "nothing more specific".
    pub fn text() -> Self {
        Self::new(TEXT_LANGUAGE, "text")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lexer(&self) -> &str {
        &self.lexer
    }

    /// Whether this is the "Text" sentinel.
    pub fn is_text(&self) -> bool {
        self.name == TEXT_LANGUAGE
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Language {}

impl Hash for Language {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Lookups from names, extensions and paths to languages.
///
/// Implementations are built once and only read afterwards, so they must be
/// shareable across threads.
pub trait LanguageRegistry: Send + Sync + fmt::Debug {
    /// Finds the language registered for an extension (with its leading dot).
    /// The empty extension never matches.
    fn find_by_extension(&self, extension: &str) -> Option<Language>;

    /// Finds the language whose lexer (or one of the lexer's aliases) is `name`.
    fn find_by_lexer(&self, name: &str) -> Option<Language>;

    /// Finds a language by canonical name.
    fn find_by_name(&self, name: &str) -> Option<Language>;

    /// Broad resolution from a full path. Never absent: implementations fall
    /// back to a default language ("Text") when nothing matches.
    fn find_by_path(&self, path: &str) -> Language;
}
