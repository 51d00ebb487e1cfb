// src/mime.rs

//! MIME type lookup by name.
//!
//! The classifier only needs a MIME string per blob name; where it comes
//! from is pluggable through `MimeLookup`. `GuessMime` is the default,
//! backed by `mime_guess` with a small override table for source files that
//! the generic table would report as non-text.

use crate::constants::DEFAULT_MIME_TYPE;
use crate::pathname::extname;
use std::fmt;

/// Resolves a MIME type string for a blob name.
pub trait MimeLookup: Send + Sync + fmt::Debug {
    fn mime_type(&self, name: &str) -> String;
}

// Extensions (lowercase, without the dot) whose generic MIME type would
// classify source code as binary or as something other than text.
const TEXT_OVERRIDES: &[(&str, &str)] = &[
    // --- Shell ---
    ("sh", "text/x-shellscript"),
    ("bash", "text/x-shellscript"),
    ("zsh", "text/x-shellscript"),
    ("ksh", "text/x-shellscript"),
    ("csh", "text/x-shellscript"),
    // --- Scripting languages ---
    ("rb", "text/x-ruby"),
    ("rake", "text/x-ruby"),
    ("gemspec", "text/x-ruby"),
    ("py", "text/x-python"),
    ("pl", "text/x-perl"),
    ("pm", "text/x-perl"),
    // `.t` is troff in the generic table; Perl test files are far more common.
    ("t", "text/x-perl"),
    ("php", "text/x-php"),
    ("phtml", "text/x-php"),
    ("lua", "text/x-lua"),
    ("tcl", "text/x-tcl"),
    ("js", "text/javascript"),
    ("mjs", "text/javascript"),
    ("cjs", "text/javascript"),
    // `.ts` is an MPEG transport stream in the generic table.
    ("ts", "text/x-typescript"),
    ("tsx", "text/x-typescript"),
    // --- Compiled languages ---
    ("rs", "text/x-rust"),
    ("go", "text/x-go"),
    ("swift", "text/x-swift"),
    ("m", "text/x-objcsrc"),
    ("java", "text/x-java"),
    // --- Data and build files ---
    ("sql", "text/x-sql"),
    ("po", "text/x-gettext-translation"),
    ("pot", "text/x-gettext-translation-template"),
    ("xib", "text/xml"),
    ("xsd", "text/xml"),
    ("plist", "text/xml"),
    ("xhtml", "text/html"),
    ("bat", "text/x-bat"),
    ("cmd", "text/x-bat"),
    ("pbxproj", "text/plain"),
    ("gradle", "text/x-groovy"),
];

/// `mime_guess`-backed lookup with source-code overrides.
///
/// Names with no extension, or an extension neither table knows, resolve to
/// `text/plain` so that extensionless scripts reach shebang detection.
///
/// # Examples
///
/// ```
/// use blobkind::mime::{GuessMime, MimeLookup};
///
/// assert_eq!(GuessMime.mime_type("logo.png"), "image/png");
/// assert_eq!(GuessMime.mime_type("script/server"), "text/plain");
/// assert_eq!(GuessMime.mime_type("run.sh"), "text/x-shellscript");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct GuessMime;

impl MimeLookup for GuessMime {
    fn mime_type(&self, name: &str) -> String {
        let ext = extname(name).trim_start_matches('.').to_lowercase();
        if ext.is_empty() {
            return DEFAULT_MIME_TYPE.to_string();
        }
        if let Some((_, mime)) = TEXT_OVERRIDES.iter().find(|(e, _)| *e == ext) {
            return (*mime).to_string();
        }
        mime_guess::from_ext(&ext)
            .first()
            .map(|mime| mime.essence_str().to_string())
            .unwrap_or_else(|| DEFAULT_MIME_TYPE.to_string())
    }
}
