//! Filesystem helpers.

use eyre::{Result, WrapErr};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Characters refused in file names, mostly for Windows' sake.
/// See https://docs.microsoft.com/en-us/windows/win32/fileio/naming-a-file
static ILLEGAL_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[/\?<>\\:\*\|"]"#).expect("invalid chars regexp")
});
/// Trailing dots and spaces are also refused on Windows.
static ILLEGAL_TRAILING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\. ]+$"#).expect("invalid trailing regexp"));

/// Clean a name to safely use it as a file name.
pub fn sanitize_name(name: &str) -> PathBuf {
    let name = ILLEGAL_TRAILING.replace(name, "");

    ILLEGAL_CHARS.replace_all(&name, "_").into_owned().into()
}

/// Recursively create a directory and all of its parent if necessary.
pub fn mkdir_p(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("mkdir_p {}", path.display()))
}

/// Write a file atomically (using a tempfile + atomic rename).
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let mut tmp_path = path.to_path_buf();
    tmp_path.set_extension("part");

    fs::write(&tmp_path, data)
        .with_context(|| format!("write {}", tmp_path.display()))?;

    fs::rename(&tmp_path, path)
        .with_context(|| format!("rename to {}", path.display()))?;

    Ok(())
}
