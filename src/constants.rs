// src/constants.rs

/// Blobs strictly larger than this many bytes are "large".
pub const MEGABYTE: u64 = 1024 * 1024;

/// Extensions treated as images (case-sensitive, as returned by `extname`).
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif"];

/// Extensions of machine-produced files (Interface Builder, Xcode projects).
pub const GENERATED_EXTENSIONS: &[&str] = &[".xib", ".nib", ".pbxproj"];

/// Text formats that are never indexed, even with a registered language.
pub const UNINDEXABLE_EXTENSIONS: &[&str] = &[".po", ".sql"];

/// File type signatures of Flash movies (compressed and uncompressed).
pub const FLASH_SIGNATURES: &[&[u8]] = &[b"CWS", b"FWS"];

/// Shortest content that can be a Flash movie (signature, version and length).
pub const MIN_FLASH_SIZE: usize = 8;

/// Content types served as attachments instead of inline.
pub const ATTACHMENT_CONTENT_TYPES: &[&str] =
    &["application/octet-stream", "application/java-archive"];

/// MIME type assumed for names the lookup has nothing for.
pub const DEFAULT_MIME_TYPE: &str = "text/plain";

/// Name of the sentinel language used for plain text and non-text blobs.
pub const TEXT_LANGUAGE: &str = "Text";
