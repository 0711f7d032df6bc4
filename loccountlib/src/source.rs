//! Line source: load a file as an ordered list of lines.
//!
//! Lines keep their terminators exactly as stored (`\n`, `\r\n`, or none for a
//! trailing unterminated line), so concatenating the result reproduces the
//! file. Bytes that are not valid UTF-8 are decoded with replacement
//! characters instead of failing.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::LocError;
use crate::Result;

/// A source file identified by its path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    path: PathBuf,
    extension: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let extension = extension_of(&path);
        Self { path, extension }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Everything from the last `.` of the path onwards, or `""`.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Read the file's lines. Every call goes back to disk.
    pub fn lines(&self) -> Result<Vec<String>> {
        load_lines(&self.path)
    }
}

/// Extension of a path: the substring starting at its last `.`, dot
/// included. Paths without a `.` have the empty extension.
///
/// ```
/// use loccountlib::source::extension_of;
///
/// assert_eq!(extension_of("src/main.cpp"), ".cpp");
/// assert_eq!(extension_of("Makefile"), "");
/// ```
pub fn extension_of(path: impl AsRef<Path>) -> String {
    let path = path.as_ref().to_string_lossy();
    match path.rfind('.') {
        Some(idx) => path[idx..].to_string(),
        None => String::new(),
    }
}

/// Load the lines of the file at `path`.
///
/// Fails with [`LocError::FileAccess`] if the file cannot be opened or read.
pub fn load_lines(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LocError::file_access(path, e))?;
    lines_from_reader(file).map_err(|e| LocError::file_access(path, e))
}

/// Split everything readable from `reader` into lines, terminators included.
pub fn lines_from_reader<R: Read>(reader: R) -> std::io::Result<Vec<String>> {
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    Ok(lines)
}
