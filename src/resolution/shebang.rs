// src/resolution/shebang.rs

use crate::core_types::Blob;
use crate::filtering::ContentSignature;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// Version suffixes such as `2.4` in `python2.4`.
static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\d+\.?)+").unwrap());

/// Extracts the interpreter named by a shebang line.
///
/// The line is normalized as follows:
/// - `#! /bin/sh` is treated as `#!/bin/sh` (one space only),
/// - the first whitespace-separated token is split on `/` and the last
///   segment kept (`#!/usr/bin/ruby` gives `ruby`),
/// - `env` is replaced by its first argument (`#!/usr/bin/env python` gives `python`),
/// - the first run of version digits is removed (`python2.4` gives `python`).
///
/// Only the first version match is removed and separators around it are
/// left in place, so `python3.x` becomes `pythonx`.
///
/// Returns `None` when the line does not start with `#!`, or when `env` has
/// no argument.
///
/// # Examples
/// ```
/// use blobkind::resolution::parse_shebang;
///
/// assert_eq!(parse_shebang("#!/usr/bin/env python2.4").as_deref(), Some("python"));
/// assert_eq!(parse_shebang("#! /bin/bash").as_deref(), Some("bash"));
/// assert_eq!(parse_shebang("#!/usr/bin/ruby -w").as_deref(), Some("ruby"));
/// assert_eq!(parse_shebang("no shebang here"), None);
/// assert_eq!(parse_shebang("#!/usr/bin/env"), None);
/// ```
pub fn parse_shebang(line: &str) -> Option<String> {
    if !line.starts_with("#!") {
        return None;
    }
    let bang: Cow<'_, str> = match line.strip_prefix("#! ") {
        Some(rest) => Cow::Owned(format!("#!{}", rest)),
        None => Cow::Borrowed(line),
    };

    let mut tokens = bang.split_whitespace();
    let first_token = tokens.next()?;

    let mut pieces: Vec<&str> = first_token.split('/').collect();
    // Trailing separators do not produce a segment (`#!/usr/bin/` ends in `bin`).
    while pieces.len() > 1 && pieces.last().is_some_and(|p| p.is_empty()) {
        pieces.pop();
    }
    let script = match pieces.as_slice() {
        [.., last] if pieces.len() > 1 => *last,
        [only] => only.strip_prefix("#!").unwrap_or(*only),
        _ => return None,
    };

    let script = if script == "env" {
        tokens.next()?
    } else {
        script
    };

    Some(VERSION_RE.replace(script, "").into_owned())
}

/// Returns the first line of `data`, without its newline.
pub fn first_line(data: &[u8]) -> Cow<'_, str> {
    let end = data.iter().position(|&b| b == b'\n').unwrap_or(data.len());
    String::from_utf8_lossy(&data[..end])
}

/// Extracts the shebang interpreter of a blob.
///
/// Shebang inspection is skipped entirely for content that is absent,
/// non-text or large.
pub fn shebang_script(blob: &Blob, signature: &ContentSignature) -> Option<String> {
    if !signature.is_text || signature.is_large {
        return None;
    }
    let data = blob.data()?;
    parse_shebang(&first_line(data))
}
