//! Defines the core data structures: the `Blob` being classified and the
//! `Classification` report produced for it.

use once_cell::sync::OnceCell;

/// A single file as presented to the classifier: a name, optionally its
/// bytes, and its size.
///
/// The content may be absent when only the size is known (for example, a
/// tree listing that has not loaded file bodies yet). Checks that need the
/// content treat an absent body as "cannot inspect".
///
/// Per-blob derived values (the line split) are memoized on first use and
/// live exactly as long as the blob does.
///
/// # Examples
///
/// ```
/// use blobkind::Blob;
///
/// let blob = Blob::new("script/bootstrap", b"#!/bin/sh\nset -e\n\n".to_vec());
/// assert_eq!(blob.size(), 18);
/// assert_eq!(blob.loc(), 4);
/// assert_eq!(blob.sloc(), 2);
///
/// let unloaded = Blob::unloaded("assets/logo.png", 2048);
/// assert!(unloaded.data().is_none());
/// assert_eq!(unloaded.loc(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Blob {
    name: String,
    data: Option<Vec<u8>>,
    size: u64,
    lines: OnceCell<Vec<String>>,
}

impl Blob {
    /// Creates a blob with loaded content. The size is the content length.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        Self {
            name: name.into(),
            data: Some(data),
            size,
            lines: OnceCell::new(),
        }
    }

    /// Creates a blob whose content has not been loaded.
    pub fn unloaded(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            data: None,
            size,
            lines: OnceCell::new(),
        }
    }

    /// Creates a blob with an explicit size, which may differ from the length
    /// of `data` (e.g. when only a prefix of a file was read).
    pub fn with_size(name: impl Into<String>, data: Option<Vec<u8>>, size: u64) -> Self {
        Self {
            name: name.into(),
            data,
            size,
            lines: OnceCell::new(),
        }
    }

    /// The blob's path.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The blob's bytes, if loaded.
    pub fn data(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    /// The blob's size in bytes.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// The content split on `\n`, keeping a trailing empty segment.
    ///
    /// Invalid UTF-8 is replaced lossily. Empty or absent content has no
    /// lines.
    pub fn lines(&self) -> &[String] {
        self.lines.get_or_init(|| match self.data() {
            Some(bytes) if !bytes.is_empty() => String::from_utf8_lossy(bytes)
                .split('\n')
                .map(str::to_owned)
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Number of lines.
    pub fn loc(&self) -> usize {
        self.lines().len()
    }

    /// Number of lines containing at least one non-whitespace character.
    pub fn sloc(&self) -> usize {
        self.lines()
            .iter()
            .filter(|line| line.chars().any(|c| !c.is_whitespace()))
            .count()
    }
}

/// Every verdict the classifier produces for one blob.
///
/// # Examples
///
/// ```
/// use blobkind::{Blob, Classifier};
///
/// let classifier = Classifier::default();
/// let report = classifier.classify(&Blob::new("app/main.py", b"print('hi')\n".to_vec()));
/// assert_eq!(report.language, "Python");
/// assert!(report.is_text);
/// assert!(report.is_indexable);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Classification {
    /// The blob's path.
    pub name: String,
    /// The MIME type resolved for the name.
    pub mime_type: String,
    /// How the blob should be served (`inline` or an attachment header value).
    pub disposition: String,
    pub is_text: bool,
    pub is_image: bool,
    pub is_binary: bool,
    pub is_large: bool,
    pub is_viewable: bool,
    pub is_forbidden: bool,
    pub is_vendored: bool,
    pub is_generated: bool,
    pub is_indexable: bool,
    /// Canonical name of the resolved language ("Text" for non-text blobs).
    pub language: String,
    /// Lexer identity of the resolved language.
    pub lexer: String,
    /// Interpreter named by the shebang line, if any.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub shebang_script: Option<String>,
    pub loc: usize,
    pub sloc: usize,
}
