// src/cli.rs

use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

/// Classifies files: text or binary, language, vendored or generated, and
/// whether they belong in a search index.
///
/// Prints one line per file, in the order given: the path, the resolved
/// language, the MIME type, and the verdicts that hold for the file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files to classify.
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    #[cfg(feature = "json")]
    /// Print one JSON object per file instead of tab-separated lines.
    #[arg(short = 'j', long, action = clap::ArgAction::SetTrue)]
    pub json: bool,

    /// Replace the built-in vendored path patterns with the patterns in FILE
    /// (one regex per line, '#' starts a comment).
    #[arg(short = 'p', long, value_name = "FILE")]
    pub vendor_patterns: Option<PathBuf>,

    /// Classify from the name and size only, without reading file content.
    /// Shebang detection and the Flash check are skipped.
    #[arg(short = 'N', long, action = clap::ArgAction::SetTrue)]
    pub no_content: bool,
}

impl Cli {
    /// The output format selected by the flags.
    pub fn output_format(&self) -> OutputFormat {
        #[cfg(feature = "json")]
        if self.json {
            return OutputFormat::Json;
        }
        OutputFormat::Text
    }
}
