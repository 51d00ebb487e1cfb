// src/resolution/language.rs

use super::interpreter::language_for_interpreter;
use super::shebang::shebang_script;
use crate::core_types::Blob;
use crate::filtering::ContentSignature;
use crate::language::{Language, LanguageRegistry};
use crate::pathname::extname;

/// Resolves the language of a blob. Never absent.
///
/// The tiers are tried in a fixed order:
///
/// 1.  **Non-text:** anything that is not text is "Text".
/// 2.  **Extension:** a registered extension wins outright; the shebang is
///     not consulted.
/// 3.  **Shebang:** the interpreter named on the first line.
/// 4.  **Path:** the registry's broad path resolver (filenames, then its own
///     default).
pub fn resolve_language(
    blob: &Blob,
    signature: &ContentSignature,
    registry: &dyn LanguageRegistry,
) -> Language {
    if !signature.is_text {
        return Language::text();
    }

    if let Some(language) = registry.find_by_extension(extname(blob.name())) {
        log::debug!("'{}' resolved by extension to {}", blob.name(), language);
        return language;
    }

    if let Some(language) = shebang_language(blob, signature, registry) {
        log::debug!("'{}' resolved by shebang to {}", blob.name(), language);
        return language;
    }

    registry.find_by_path(blob.name())
}

/// The language named by the blob's shebang line, if any.
pub fn shebang_language(
    blob: &Blob,
    signature: &ContentSignature,
    registry: &dyn LanguageRegistry,
) -> Option<Language> {
    let script = shebang_script(blob, signature)?;
    language_for_interpreter(&script, registry)
}
