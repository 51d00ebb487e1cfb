//! `blobkind` is a library and command-line tool for classifying file blobs.
//!
//! Given a file's name, size and (optionally) its bytes, it decides how
//! downstream tooling should treat it:
//! 1.  **Content kind**: text, image, binary, oversized, or unsafe to serve
//!     (Flash content).
//! 2.  **Language**: resolved from the extension, then the shebang line, then
//!     the full path. Never absent; "Text" is the fallback.
//! 3.  **Policy**: vendored or generated paths, and whether the blob belongs
//!     in a search index.
//!
//! Classification is pure: a `Classifier` is built once from immutable lookup
//! tables and can be shared across threads. The language registry and MIME
//! lookup are pluggable through the `LanguageRegistry` and `MimeLookup`
//! traits.
//!
//! # Example: Library Usage
//!
//! ```
//! use blobkind::{Blob, ClassifierBuilder};
//!
//! let classifier = ClassifierBuilder::new().build().unwrap();
//!
//! // The extension wins over a conflicting shebang.
//! let script = Blob::new("run.sh", b"#!/usr/bin/env python\necho hi\n".to_vec());
//! assert_eq!(classifier.language(&script).name(), "Shell");
//!
//! // Without an extension, the shebang decides.
//! let tool = Blob::new("bin/deploy", b"#!/usr/bin/env python\nprint(1)\n".to_vec());
//! assert_eq!(classifier.language(&tool).name(), "Python");
//! // ...but shebang-only languages are not indexed.
//! assert!(!classifier.is_indexable(&tool));
//!
//! // One report with every verdict.
//! let report = classifier.classify(&Blob::new("db/schema.sql", b"CREATE TABLE t ();\n".to_vec()));
//! assert_eq!(report.language, "SQL");
//! assert!(report.is_text);
//! assert!(!report.is_indexable);
//! ```

// Make modules public if they contain public types used in the API
pub mod classifier;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod language;
pub mod mime;
pub mod output;
pub mod pathname;
pub mod prelude;
pub mod processing;
pub mod resolution;

// Re-export key public types for easier use as a library
pub use classifier::Classifier;
pub use config::ClassifierBuilder;
pub use core_types::{Blob, Classification};
pub use language::{Language, LanguageRegistry};
pub use mime::MimeLookup;

use crate::cli::Cli;
use std::io::Write;

/// Executes the command-line pipeline: read, classify, write.
///
/// Reads every path named on the command line, classifies the blobs in
/// parallel with `classifier`, and writes one report per path, in input
/// order, to `writer`.
///
/// # Errors
/// Returns an error if any path cannot be read or the output cannot be
/// written. Nothing is written when a read fails.
pub fn run(cli: &Cli, classifier: &Classifier, writer: &mut dyn Write) -> anyhow::Result<()> {
    let reports = processing::classify_paths(&cli.paths, classifier, !cli.no_content)?;
    log::debug!("Classified {} files", reports.len());
    output::write_reports(&reports, cli.output_format(), writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_basic_success() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let a = temp_dir.path().join("a.rs");
        let b = temp_dir.path().join("b.txt");
        fs::write(&a, "fn a() {}")?;
        fs::write(&b, "Content B")?;

        let cli = Cli::parse_from([
            "blobkind",
            a.to_str().unwrap(),
            b.to_str().unwrap(),
        ]);
        let mut output = Vec::new();
        run(&cli, &Classifier::default(), &mut output)?;

        let output = String::from_utf8(output)?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("a.rs\tRust\ttext/x-rust\ttext,viewable,indexable"));
        assert!(lines[1].ends_with("b.txt\tText\ttext/plain\ttext,viewable,indexable"));
        Ok(())
    }

    #[test]
    fn test_run_without_content() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let flash = temp_dir.path().join("movie.swf");
        fs::write(&flash, b"CWS\x0a\x00\x00\x00\x00")?;

        let cli = Cli::parse_from(["blobkind", "--no-content", flash.to_str().unwrap()]);
        let mut output = Vec::new();
        run(&cli, &Classifier::default(), &mut output)?;
        assert!(!String::from_utf8(output)?.contains("forbidden"));

        let cli = Cli::parse_from(["blobkind", flash.to_str().unwrap()]);
        let mut output = Vec::new();
        run(&cli, &Classifier::default(), &mut output)?;
        assert!(String::from_utf8(output)?.contains("forbidden"));
        Ok(())
    }

    #[test]
    fn test_run_missing_file_writes_nothing() -> anyhow::Result<()> {
        let temp_dir = tempdir()?;
        let ok = temp_dir.path().join("ok.rb");
        fs::write(&ok, "")?;
        let missing = temp_dir.path().join("missing.rb");

        let cli = Cli::parse_from([
            "blobkind",
            ok.to_str().unwrap(),
            missing.to_str().unwrap(),
        ]);
        let mut output = Vec::new();
        let err = run(&cli, &Classifier::default(), &mut output).unwrap_err();
        assert!(err.to_string().contains("missing.rb"));
        assert!(output.is_empty());
        Ok(())
    }
}
