// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // Used by the CLI tests, not the library tests.
pub fn blobkind_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("blobkind"))
}

/// Writes `content` to `relative_path` under `dir`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(relative_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
