// src/config/builder.rs

use super::parsing::read_pattern_file;
use crate::classifier::Classifier;
use crate::cli::Cli;
use crate::errors::{ConfigError, Result};
use crate::filtering::PathPatternMatcher;
use crate::language::{BuiltinRegistry, LanguageRegistry};
use crate::mime::{GuessMime, MimeLookup};
use std::path::PathBuf;
use std::sync::Arc;

/// A builder for creating a `Classifier` programmatically.
///
/// Every option is optional; anything left unset falls back to the built-in
/// tables.
///
/// # Examples
///
/// ```
/// use blobkind::{Blob, ClassifierBuilder};
///
/// let classifier = ClassifierBuilder::new()
///     .vendored_patterns(["^external/"])
///     .build()
///     .unwrap();
///
/// assert!(classifier.is_vendored(&Blob::unloaded("external/zlib/inflate.c", 10)));
/// // The default list is replaced, not extended.
/// assert!(!classifier.is_vendored(&Blob::unloaded("vendor/rails/init.rb", 10)));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ClassifierBuilder {
    vendored_patterns: Option<Vec<String>>,
    vendored_patterns_file: Option<PathBuf>,
    registry: Option<Arc<dyn LanguageRegistry>>,
    mime_lookup: Option<Arc<dyn MimeLookup>>,
}

impl ClassifierBuilder {
    /// Creates a new `ClassifierBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from parsed command-line arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut builder = Self::new();
        if let Some(path) = &cli.vendor_patterns {
            builder = builder.vendored_patterns_file(path);
        }
        builder
    }

    /// Replaces the default vendored path patterns.
    ///
    /// An empty list means nothing is vendored.
    pub fn vendored_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vendored_patterns = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    /// Replaces the default vendored path patterns with the contents of a
    /// pattern file (one regex per line, `#` comments).
    pub fn vendored_patterns_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.vendored_patterns_file = Some(path.into());
        self
    }

    /// Sets the language registry.
    pub fn registry(mut self, registry: Arc<dyn LanguageRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Sets the MIME type lookup.
    pub fn mime_lookup(mut self, mime_lookup: Arc<dyn MimeLookup>) -> Self {
        self.mime_lookup = Some(mime_lookup);
        self
    }

    /// Validates the options, compiles the vendored matcher and builds the
    /// `Classifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if both pattern sources are set, if the pattern file
    /// cannot be read, or if any pattern is not a valid regular expression.
    pub fn build(self) -> Result<Classifier> {
        validate_builder_options(&self)?;

        let vendored = match (self.vendored_patterns, self.vendored_patterns_file) {
            (Some(patterns), _) => {
                log::debug!("Using {} configured vendored patterns", patterns.len());
                PathPatternMatcher::build(patterns)?
            }
            (None, Some(path)) => {
                log::debug!("Loading vendored patterns from '{}'", path.display());
                PathPatternMatcher::build(read_pattern_file(&path)?)?
            }
            (None, None) => PathPatternMatcher::default(),
        };

        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(BuiltinRegistry) as Arc<dyn LanguageRegistry>);
        let mime_lookup = self
            .mime_lookup
            .unwrap_or_else(|| Arc::new(GuessMime) as Arc<dyn MimeLookup>);

        Ok(Classifier::new(registry, mime_lookup, vendored))
    }
}

/// Validates combinations of options on the `ClassifierBuilder`.
fn validate_builder_options(builder: &ClassifierBuilder) -> Result<()> {
    if builder.vendored_patterns.is_some() && builder.vendored_patterns_file.is_some() {
        return Err(ConfigError::Conflict {
            option1: "vendored_patterns".to_string(),
            option2: "vendored_patterns_file".to_string(),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Blob;
    use crate::errors::Error;
    use crate::language::Language;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Debug)]
    struct FixedMime(&'static str);

    impl MimeLookup for FixedMime {
        fn mime_type(&self, _: &str) -> String {
            self.0.to_string()
        }
    }

    #[derive(Debug)]
    struct EverythingIsLua;

    impl LanguageRegistry for EverythingIsLua {
        fn find_by_extension(&self, _: &str) -> Option<Language> {
            Some(Language::new("Lua", "lua"))
        }
        fn find_by_lexer(&self, _: &str) -> Option<Language> {
            None
        }
        fn find_by_name(&self, _: &str) -> Option<Language> {
            None
        }
        fn find_by_path(&self, _: &str) -> Language {
            Language::text()
        }
    }

    #[test]
    fn test_default_build_uses_builtin_tables() -> Result<()> {
        let classifier = ClassifierBuilder::new().build()?;
        let b = Blob::new("vendor/jquery.js", b"".to_vec());
        assert!(classifier.is_vendored(&b));
        assert_eq!(classifier.language(&b).name(), "JavaScript");
        Ok(())
    }

    #[test]
    fn test_empty_pattern_list_matches_nothing() -> Result<()> {
        let classifier = ClassifierBuilder::new()
            .vendored_patterns(Vec::<String>::new())
            .build()?;
        assert!(classifier.vendored_matcher().is_empty());
        assert!(!classifier.is_vendored(&Blob::unloaded("vendor/a.rb", 1)));
        Ok(())
    }

    #[test]
    fn test_invalid_pattern_fails_at_build() {
        let result = ClassifierBuilder::new()
            .vendored_patterns(["ok/", "bad("])
            .build();
        match result {
            Err(Error::Config(ConfigError::InvalidPattern { pattern, .. })) => {
                assert_eq!(pattern, "bad(");
            }
            other => panic!("Expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_pattern_file() -> Result<()> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vendor.patterns");
        fs::write(&path, "# Go modules\n^third_party/\n").unwrap();

        let classifier = ClassifierBuilder::new().vendored_patterns_file(&path).build()?;
        assert!(classifier.is_vendored(&Blob::unloaded("third_party/x.go", 1)));
        assert!(!classifier.is_vendored(&Blob::unloaded("node_modules/x.js", 1)));
        Ok(())
    }

    #[test]
    fn test_from_cli() -> Result<()> {
        use clap::Parser;
        let temp = tempdir().unwrap();
        let path = temp.path().join("patterns");
        fs::write(&path, "^lib/\n").unwrap();

        let cli = Cli::parse_from(["blobkind", "x.rb", "--vendor-patterns", path.to_str().unwrap()]);
        let classifier = ClassifierBuilder::from_cli(&cli).build()?;
        assert_eq!(classifier.vendored_matcher().patterns(), ["^lib/"]);

        let cli = Cli::parse_from(["blobkind", "x.rb"]);
        let classifier = ClassifierBuilder::from_cli(&cli).build()?;
        assert!(classifier.is_vendored(&Blob::unloaded("vendor/x.rb", 1)));
        Ok(())
    }

    #[test]
    fn test_both_pattern_sources_conflict() {
        let result = ClassifierBuilder::new()
            .vendored_patterns(["a"])
            .vendored_patterns_file("vendor.patterns")
            .build();
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::Conflict { .. }))
        ));
    }

    #[test]
    fn test_missing_pattern_file_is_io_error() {
        let result = ClassifierBuilder::new()
            .vendored_patterns_file("/nonexistent/blobkind/vendor.patterns")
            .build();
        assert!(matches!(result, Err(Error::Io { .. })));
    }

    #[test]
    fn test_custom_collaborators_are_used() -> Result<()> {
        let classifier = ClassifierBuilder::new()
            .registry(Arc::new(EverythingIsLua))
            .mime_lookup(Arc::new(FixedMime("application/octet-stream")))
            .build()?;

        let b = Blob::new("notes.txt", b"hello\n".to_vec());
        assert_eq!(classifier.mime_type(&b), "application/octet-stream");
        assert!(classifier.is_binary(&b));
        // Binary content never reaches the registry.
        assert!(classifier.language(&b).is_text());
        Ok(())
    }

    #[test]
    fn test_custom_registry_resolves_text() -> Result<()> {
        let classifier = ClassifierBuilder::new()
            .registry(Arc::new(EverythingIsLua))
            .build()?;
        let b = Blob::new("notes.txt", b"hello\n".to_vec());
        assert_eq!(classifier.language(&b).name(), "Lua");
        assert!(classifier.is_indexable(&b));
        Ok(())
    }
}
