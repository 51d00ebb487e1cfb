// src/resolution/indexable.rs

use crate::core_types::Blob;
use crate::filtering::{is_generated, is_unindexable_extension, ContentSignature};
use crate::language::LanguageRegistry;
use crate::pathname::extname;

/// Decides whether a blob should be included in search indexing.
///
/// The rules are evaluated in order, first match wins:
///
/// 1.  Not text: `false`.
/// 2.  Generated (`.xib`, `.nib`, `.pbxproj`): `false`.
/// 3.  `.po` or `.sql`: `false`.
/// 4.  The extension is registered to a language: `true`.
/// 5.  Otherwise: `false`.
///
/// Unlike language resolution, only the extension lookup counts here. A
/// script recognized by its shebang but carrying an unknown extension is
/// not indexed.
pub fn is_indexable(
    blob: &Blob,
    signature: &ContentSignature,
    registry: &dyn LanguageRegistry,
) -> bool {
    if !signature.is_text {
        false
    } else if is_generated(blob.name()) {
        false
    } else if is_unindexable_extension(blob.name()) {
        false
    } else {
        registry.find_by_extension(extname(blob.name())).is_some()
    }
}
