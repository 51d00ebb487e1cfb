// src/filtering/content.rs

use crate::constants::{FLASH_SIGNATURES, IMAGE_EXTENSIONS, MEGABYTE, MIN_FLASH_SIZE};
use crate::core_types::Blob;
use crate::pathname::extname;

/// Checks if the name's extension is one of the known image extensions.
///
/// The comparison is case-sensitive: `logo.PNG` is not an image.
#[inline]
pub fn is_image(name: &str) -> bool {
    IMAGE_EXTENSIONS.contains(&extname(name))
}

/// Checks if a MIME type describes text (`text/*`, or anything JSON).
#[inline]
pub fn is_text(mime_type: &str) -> bool {
    mime_type.contains("text") || mime_type.contains("json")
}

/// Binary is whatever is left once text and images are ruled out, unless
/// the MIME type already declares an octet stream.
#[inline]
pub fn is_binary(mime_type: &str, is_text: bool, is_image: bool) -> bool {
    mime_type.contains("octet") || !(is_text || is_image)
}

/// Checks if a size is over the one megabyte limit. Exactly one megabyte is not large.
#[inline]
pub fn is_large(size: u64) -> bool {
    size > MEGABYTE
}

/// Checks if content could be used for cross site attacks when served.
///
/// This is limited to Flash movies: the Flash plugin ignores the response
/// content type and treats any URL as Flash when the `<object>` tag asks for
/// it, regardless of extension. No other content is sniffed, and only the
/// first three bytes are read. Absent content is never forbidden.
///
/// # Examples
/// ```
/// use blobkind::filtering::is_forbidden;
///
/// assert!(is_forbidden(Some(&b"CWS\x0a\x00\x00\x00\x00"[..])));
/// assert!(!is_forbidden(Some(&b"CWSx"[..])));
/// assert!(!is_forbidden(Some(&b"XWSxxxxx"[..])));
/// assert!(!is_forbidden(None));
/// ```
pub fn is_forbidden(data: Option<&[u8]>) -> bool {
    match data {
        Some(bytes) if bytes.len() >= MIN_FLASH_SIZE => {
            FLASH_SIGNATURES.iter().any(|sig| bytes.starts_with(sig))
        }
        _ => false,
    }
}

/// The content-kind verdicts for one blob.
///
/// Derived on demand from the name, the resolved MIME type, the size and the
/// leading bytes; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentSignature {
    pub is_text: bool,
    pub is_image: bool,
    pub is_binary: bool,
    pub is_large: bool,
    pub is_forbidden: bool,
}

impl ContentSignature {
    /// Inspects a blob given the MIME type resolved for its name.
    pub fn inspect(blob: &Blob, mime_type: &str) -> Self {
        let is_text = is_text(mime_type);
        let is_image = is_image(blob.name());
        Self {
            is_text,
            is_image,
            is_binary: is_binary(mime_type, is_text, is_image),
            is_large: is_large(blob.size()),
            is_forbidden: is_forbidden(blob.data()),
        }
    }

    /// Whether the blob can be displayed as text in a browser.
    pub fn is_viewable(&self) -> bool {
        !self.is_image && !self.is_binary && !self.is_large
    }
}
