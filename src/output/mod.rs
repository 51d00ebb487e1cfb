// src/output/mod.rs

//! Renders classification reports for the command line.

use crate::core_types::Classification;
use anyhow::Result;
use log::debug;
use std::io::Write;

/// How reports are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OutputFormat {
    /// One tab-separated line per blob: name, language, MIME type, flags.
    #[default]
    Text,
    /// One JSON object per line.
    #[cfg(feature = "json")]
    Json,
}

/// The set boolean verdicts of a report, comma-separated, or `-` when none
/// are set.
///
/// # Examples
/// ```
/// use blobkind::{Blob, Classifier};
/// use blobkind::output::format_flags;
///
/// let report = Classifier::default().classify(&Blob::new("main.py", b"print(1)\n".to_vec()));
/// assert_eq!(format_flags(&report), "text,viewable,indexable");
/// ```
pub fn format_flags(report: &Classification) -> String {
    let flags: Vec<&str> = [
        (report.is_text, "text"),
        (report.is_binary, "binary"),
        (report.is_image, "image"),
        (report.is_large, "large"),
        (report.is_viewable, "viewable"),
        (report.is_forbidden, "forbidden"),
        (report.is_vendored, "vendored"),
        (report.is_generated, "generated"),
        (report.is_indexable, "indexable"),
    ]
    .into_iter()
    .filter_map(|(set, flag)| set.then_some(flag))
    .collect();

    if flags.is_empty() {
        "-".to_string()
    } else {
        flags.join(",")
    }
}

/// Formats one report as a tab-separated text line (without newline).
pub fn format_text_line(report: &Classification) -> String {
    // Tabs in names would break the columns.
    let name = report.name.replace('\t', " ");
    format!(
        "{}\t{}\t{}\t{}",
        name,
        report.language,
        report.mime_type,
        format_flags(report)
    )
}

/// Writes the reports in order, one line each.
pub fn write_reports(
    reports: &[Classification],
    format: OutputFormat,
    writer: &mut dyn Write,
) -> Result<()> {
    debug!("Writing {} reports as {:?}", reports.len(), format);
    for report in reports {
        match format {
            OutputFormat::Text => writeln!(writer, "{}", format_text_line(report))?,
            #[cfg(feature = "json")]
            OutputFormat::Json => writeln!(writer, "{}", serde_json::to_string(report)?)?,
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Blob;
    use crate::Classifier;

    fn report(name: &str, data: &[u8]) -> Classification {
        Classifier::default().classify(&Blob::new(name, data.to_vec()))
    }

    #[test]
    fn test_flags_for_binary() {
        let r = report("lib/native.bin", &[0, 159, 146, 150]);
        assert_eq!(format_flags(&r), "binary");
    }

    #[test]
    fn test_flags_for_image() {
        // Images are neither viewable nor binary.
        let r = report("logo.png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(format_flags(&r), "image");
    }

    #[test]
    fn test_flags_vendored_generated() {
        let r = report("vendor/MainMenu.xib", b"<?xml?>\n");
        assert_eq!(format_flags(&r), "text,viewable,vendored,generated");
    }

    #[test]
    fn test_text_line_columns() {
        let r = report("run.sh", b"#!/bin/sh\n");
        assert_eq!(
            format_text_line(&r),
            "run.sh\tShell\ttext/x-shellscript\ttext,viewable,indexable"
        );
    }

    #[test]
    fn test_write_reports_preserves_order() -> Result<()> {
        let reports = vec![report("b.rb", b""), report("a.py", b"")];
        let mut buffer = Vec::new();
        write_reports(&reports, OutputFormat::Text, &mut buffer)?;
        let output = String::from_utf8(buffer)?;
        let names: Vec<&str> = output
            .lines()
            .map(|l| l.split('\t').next().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["b.rb", "a.py"]);
        Ok(())
    }

    #[test]
    #[cfg(feature = "json")]
    fn test_write_reports_json_lines() -> Result<()> {
        let reports = vec![report("script/server", b"#!/usr/bin/env ruby\n")];
        let mut buffer = Vec::new();
        write_reports(&reports, OutputFormat::Json, &mut buffer)?;
        let value: serde_json::Value = serde_json::from_slice(&buffer)?;
        assert_eq!(value["name"], "script/server");
        assert_eq!(value["language"], "Ruby");
        assert_eq!(value["shebang_script"], "ruby");
        assert_eq!(value["is_indexable"], false);
        Ok(())
    }

    #[test]
    #[cfg(feature = "json")]
    fn test_json_omits_absent_shebang() -> Result<()> {
        let reports = vec![report("a.txt", b"plain\n")];
        let mut buffer = Vec::new();
        write_reports(&reports, OutputFormat::Json, &mut buffer)?;
        let value: serde_json::Value = serde_json::from_slice(&buffer)?;
        assert!(value.get("shebang_script").is_none());
        Ok(())
    }
}
