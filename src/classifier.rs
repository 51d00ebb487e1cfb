// src/classifier.rs

//! The `Classifier`: every verdict about a blob, computed from its name,
//! size and content against immutable lookup tables.

use crate::constants::{ATTACHMENT_CONTENT_TYPES, DEFAULT_MIME_TYPE};
use crate::core_types::{Blob, Classification};
use crate::filtering::{self, ContentSignature, PathPatternMatcher};
use crate::language::{BuiltinRegistry, Language, LanguageRegistry};
use crate::mime::{GuessMime, MimeLookup};
use crate::pathname::basename;
use crate::resolution;
use std::sync::Arc;

/// Classifies blobs.
///
/// Holds the collaborators the decisions depend on: a language registry, a
/// MIME lookup and the vendored path matcher. All three are built once and
/// only read afterwards, so a `Classifier` can be shared across threads
/// (cloning is cheap and shares the tables).
///
/// Every method is a total function of the blob: classification never fails
/// and never retains the blob's bytes.
///
/// Use [`ClassifierBuilder`](crate::config::ClassifierBuilder) to customize
/// the collaborators; `Classifier::default()` uses the built-in tables.
#[derive(Debug, Clone)]
pub struct Classifier {
    registry: Arc<dyn LanguageRegistry>,
    mime_lookup: Arc<dyn MimeLookup>,
    vendored: PathPatternMatcher,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(
            Arc::new(BuiltinRegistry),
            Arc::new(GuessMime),
            PathPatternMatcher::default(),
        )
    }
}

impl Classifier {
    pub fn new(
        registry: Arc<dyn LanguageRegistry>,
        mime_lookup: Arc<dyn MimeLookup>,
        vendored: PathPatternMatcher,
    ) -> Self {
        Self {
            registry,
            mime_lookup,
            vendored,
        }
    }

    pub fn registry(&self) -> &dyn LanguageRegistry {
        self.registry.as_ref()
    }

    pub fn vendored_matcher(&self) -> &PathPatternMatcher {
        &self.vendored
    }

    // --- Content kind ---

    /// The MIME type resolved for the blob's name.
    pub fn mime_type(&self, blob: &Blob) -> String {
        self.mime_lookup.mime_type(blob.name())
    }

    /// The content type to serve the raw blob with.
    ///
    /// Text is always served as `text/plain` so browsers never interpret it
    /// as markup or script.
    pub fn content_type(&self, blob: &Blob) -> String {
        let mime_type = self.mime_type(blob);
        if filtering::is_text(&mime_type) {
            DEFAULT_MIME_TYPE.to_string()
        } else {
            mime_type
        }
    }

    /// The content-kind verdicts for the blob.
    pub fn signature(&self, blob: &Blob) -> ContentSignature {
        ContentSignature::inspect(blob, &self.mime_type(blob))
    }

    pub fn is_text(&self, blob: &Blob) -> bool {
        self.signature(blob).is_text
    }

    pub fn is_image(&self, blob: &Blob) -> bool {
        filtering::is_image(blob.name())
    }

    pub fn is_binary(&self, blob: &Blob) -> bool {
        self.signature(blob).is_binary
    }

    pub fn is_large(&self, blob: &Blob) -> bool {
        filtering::is_large(blob.size())
    }

    pub fn is_viewable(&self, blob: &Blob) -> bool {
        self.signature(blob).is_viewable()
    }

    pub fn is_forbidden(&self, blob: &Blob) -> bool {
        filtering::is_forbidden(blob.data())
    }

    // --- Path kind ---

    /// Whether the blob lives at a third-party path.
    pub fn is_vendored(&self, blob: &Blob) -> bool {
        self.vendored.matches(blob.name())
    }

    pub fn is_generated(&self, blob: &Blob) -> bool {
        filtering::is_generated(blob.name())
    }

    /// The `Content-Disposition` value to serve the raw blob with.
    ///
    /// # Examples
    /// ```
    /// use blobkind::{Blob, Classifier};
    ///
    /// let classifier = Classifier::default();
    /// let jar = Blob::unloaded("dist/my app.jar", 4096);
    /// assert_eq!(classifier.disposition(&jar), "attachment; filename=my+app.jar");
    /// assert_eq!(classifier.disposition(&Blob::unloaded("README.md", 10)), "inline");
    /// ```
    pub fn disposition(&self, blob: &Blob) -> String {
        let content_type = self.content_type(blob);
        if ATTACHMENT_CONTENT_TYPES.contains(&content_type.as_str()) {
            let filename: String =
                url::form_urlencoded::byte_serialize(basename(blob.name()).as_bytes()).collect();
            format!("attachment; filename={}", filename)
        } else {
            "inline".to_string()
        }
    }

    // --- Language ---

    /// The interpreter named by the blob's shebang line, if any.
    pub fn shebang_script(&self, blob: &Blob) -> Option<String> {
        resolution::shebang_script(blob, &self.signature(blob))
    }

    /// The language named by the blob's shebang line, if any.
    pub fn shebang_language(&self, blob: &Blob) -> Option<Language> {
        resolution::shebang_language(blob, &self.signature(blob), self.registry())
    }

    /// The blob's language. Never absent: "Text" for anything non-text or
    /// unrecognized.
    pub fn language(&self, blob: &Blob) -> Language {
        resolution::resolve_language(blob, &self.signature(blob), self.registry())
    }

    /// The lexer identity of the blob's language.
    pub fn lexer(&self, blob: &Blob) -> String {
        self.language(blob).lexer().to_string()
    }

    /// Whether the blob should be included in search indexing.
    pub fn is_indexable(&self, blob: &Blob) -> bool {
        resolution::is_indexable(blob, &self.signature(blob), self.registry())
    }

    /// Computes every verdict for the blob at once.
    ///
    /// The MIME lookup and content inspection run once and are shared by
    /// all the derived verdicts.
    pub fn classify(&self, blob: &Blob) -> Classification {
        let mime_type = self.mime_type(blob);
        let signature = ContentSignature::inspect(blob, &mime_type);
        let registry = self.registry();
        let language = resolution::resolve_language(blob, &signature, registry);

        let classification = Classification {
            name: blob.name().to_string(),
            disposition: self.disposition(blob),
            mime_type,
            is_text: signature.is_text,
            is_image: signature.is_image,
            is_binary: signature.is_binary,
            is_large: signature.is_large,
            is_viewable: signature.is_viewable(),
            is_forbidden: signature.is_forbidden,
            is_vendored: self.is_vendored(blob),
            is_generated: self.is_generated(blob),
            is_indexable: resolution::is_indexable(blob, &signature, registry),
            language: language.name().to_string(),
            lexer: language.lexer().to_string(),
            shebang_script: resolution::shebang_script(blob, &signature),
            loc: blob.loc(),
            sloc: blob.sloc(),
        };
        log::debug!(
            "Classified '{}' as {} ({})",
            classification.name,
            classification.language,
            classification.mime_type
        );
        classification
    }
}
