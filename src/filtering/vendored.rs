// src/filtering/vendored.rs

use crate::errors::{ConfigError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Paths of third-party code, excluded from language statistics.
// Each entry is an unanchored regex matched anywhere in the blob name.
const DEFAULT_VENDORED_PATTERNS: &[&str] = &[
    // --- Caches and dependency directories ---
    "cache/",
    "^[Dd]ependencies/",
    "^deps/",
    "^tools/",
    r"(^|/)vendor/",
    r"(^|/)node_modules/",
    r"(^|/)bower_components/",
    r"(^|/)[Pp]ods/",
    r"(^|/)[Cc]arthage/Build/",
    r"(^|/)Godeps/_workspace/",
    r"(^|/)third[-_]?party/",
    r"(^|/)extern(al)?/",
    r"(^|/)debian/",
    r"(^|/)\.git/",

    // --- Autotools ---
    r"(^|/)configure$",
    r"(^|/)configure\.ac$",

    // --- Minified assets ---
    r"\.min\.(js|css)$",
    r"-vsdoc\.js$",

    // --- JavaScript libraries ---
    r"(^|/)jquery([^.]*)(\.min)?\.js$",
    r"(^|/)jquery\-\d\.\d+(\.\d+)?(\.min)?\.js$",
    r"(^|/)prototype(.*)\.js$",
    r"(^|/)effects\.js$",
    r"(^|/)controls\.js$",
    r"(^|/)dragdrop\.js$",
    r"(^|/)mootools([^.]*)\d+\.\d+\.\d+([^.]*)\.js$",
    r"(^|/)dojo\.js$",
    r"(^|/)MochiKit\.js$",
    r"(^|/)yahoo-([^.]*)\.js$",
    r"(^|/)yui([^.]*)\.js$",
    r"(^|/)underscore\.js$",
    r"(^|/)backbone\.js$",
    r"(^|/)ember(-\d\.\d\.\d)?(\.min)?\.js$",
    r"(^|/)raphael([^.]*)(\.min)?\.js$",
    r"(^|/)modernizr\.js$",
    r"(^|/)modernizr\.custom\.\d+\.js$",
    r"(^|/)less([^.]*)(\.min)?\.js$",
    r"(^|/)d3(\.v\d+)?([^.]*)(\.min)?\.js$",
    r"(^|/)[Bb]ootstrap(\.min)?\.(js|css)$",
    r"(^|/)shBrush([^.]*)\.js$",
    r"(^|/)shCore\.js$",
    r"(^|/)shLegacy\.js$",
    r"(^|/)tiny_mce([^.]*)\.js$",
    r"(^|/)tiny_mce/(langs|plugins|themes|utils)",
    r"(^|/)ace-builds/",
    r"(^|/)fontello(.*?)\.css$",
];

static DEFAULT_MATCHER: Lazy<PathPatternMatcher> = Lazy::new(|| {
    PathPatternMatcher::build(DEFAULT_VENDORED_PATTERNS)
        .expect("built-in vendored patterns must compile")
});

/// A set of path patterns compiled into one alternation.
///
/// Built once from configuration and never changed afterwards. Cloning is
/// cheap and the matcher can be shared between threads without locking.
///
/// # Examples
///
/// ```
/// use blobkind::filtering::PathPatternMatcher;
///
/// let matcher = PathPatternMatcher::build(["(^|/)vendor/", r"\.min\.js$"]).unwrap();
/// assert!(matcher.matches("vendor/rails/init.rb"));
/// assert!(matcher.matches("public/app.min.js"));
/// assert!(!matcher.matches("app/models/user.rb"));
///
/// assert!(PathPatternMatcher::build(["("]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PathPatternMatcher {
    regex: Option<Regex>,
    patterns: Vec<String>,
}

impl PathPatternMatcher {
    /// Compiles `patterns` into a single matcher (logical OR of all patterns).
    ///
    /// Each pattern is validated on its own first so a configuration error
    /// names the offending entry. An empty list yields a matcher that
    /// matches nothing.
    pub fn build<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns: Vec<String> = patterns
            .into_iter()
            .map(|p| p.as_ref().to_string())
            .collect();

        for pattern in &patterns {
            Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source: Box::new(source),
            })?;
        }

        if patterns.is_empty() {
            tracing::debug!("No vendored path patterns configured");
            return Ok(Self {
                regex: None,
                patterns,
            });
        }

        // Group each pattern so inline flags and alternations stay local to it.
        let combined = patterns
            .iter()
            .map(|p| format!("(?:{})", p))
            .collect::<Vec<_>>()
            .join("|");
        let regex = Regex::new(&combined).map_err(|source| ConfigError::InvalidPattern {
            pattern: combined.clone(),
            source: Box::new(source),
        })?;
        tracing::debug!(count = patterns.len(), "Compiled vendored path patterns");

        Ok(Self {
            regex: Some(regex),
            patterns,
        })
    }

    /// The matcher built from the crate's default vendored pattern list.
    pub fn default_vendored() -> &'static PathPatternMatcher {
        &DEFAULT_MATCHER
    }

    /// Returns true if any pattern matches anywhere within `path`.
    ///
    /// Matching is a substring search: patterns must carry their own `^`,
    /// `$` or `(^|/)` anchors when they need them.
    #[inline]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(path))
    }

    /// The patterns this matcher was built from, in configured order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PathPatternMatcher {
    fn default() -> Self {
        Self::default_vendored().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_default_vendored_matches() {
        let matcher = PathPatternMatcher::default_vendored();
        assert!(matcher.matches("vendor/plugins/foo.rb"));
        assert!(matcher.matches("app/vendor/lib.js"));
        assert!(matcher.matches("node_modules/left-pad/index.js"));
        assert!(matcher.matches("public/javascripts/jquery-1.4.2.min.js"));
        assert!(matcher.matches("public/javascripts/jquery.js"));
        assert!(matcher.matches("assets/app.min.css"));
        assert!(matcher.matches("deps/http_parser/http_parser.c"));
        assert!(matcher.matches("third_party/zlib/inflate.c"));
        assert!(matcher.matches("configure"));
    }

    #[test]
    fn test_default_vendored_no_match() {
        let matcher = PathPatternMatcher::default_vendored();
        assert!(!matcher.matches("app/models/user.rb"));
        assert!(!matcher.matches("lib/vendored.rb"));
        assert!(!matcher.matches("src/deps/graph.rs")); // `^deps/` is anchored
        assert!(!matcher.matches("public/javascripts/application.js"));
        assert!(!matcher.matches("configure.in"));
    }

    #[test]
    fn test_substring_semantics() {
        // "cache/" is unanchored, so it also fires inside longer segments.
        let matcher = PathPatternMatcher::build(["cache/"]).unwrap();
        assert!(matcher.matches("cache/a"));
        assert!(matcher.matches("src/cache/a"));
        assert!(matcher.matches("src/mycache/a"));
        assert!(!matcher.matches("src/cache"));
    }

    #[test]
    fn test_inline_flags_stay_local() {
        let matcher = PathPatternMatcher::build(["(?i)^docs/", "^Build/"]).unwrap();
        assert!(matcher.matches("DOCS/index.md"));
        assert!(matcher.matches("Build/out.o"));
        assert!(!matcher.matches("build/out.o"));
    }

    #[test]
    fn test_empty_matcher_matches_nothing() {
        let matcher = PathPatternMatcher::build(Vec::<String>::new()).unwrap();
        assert!(matcher.is_empty());
        assert!(!matcher.matches(""));
        assert!(!matcher.matches("vendor/anything"));
    }

    #[test]
    fn test_invalid_pattern_fails_at_build() {
        let result = PathPatternMatcher::build(["^ok/", "[unclosed"]);
        match result {
            Err(Error::Config(ConfigError::InvalidPattern { pattern, .. })) => {
                assert_eq!(pattern, "[unclosed");
            }
            other => panic!("Expected InvalidPattern, got {:?}", other),
        }
    }

    #[test]
    fn test_patterns_preserve_order() {
        let matcher = PathPatternMatcher::build(["b/", "a/"]).unwrap();
        assert_eq!(matcher.patterns(), ["b/", "a/"]);
    }
}
