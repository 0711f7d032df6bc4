//! High-level LOC counting API.
//!
//! Every entry point re-reads the files it is given; nothing is cached
//! between calls.

use std::path::Path;

use crate::classifier::classify_lines;
use crate::filter::{discover_files, FilterConfig};
use crate::source::SourceFile;
use crate::stats::{FileStats, LocStats};
use crate::Result;

/// Options for counting LOC.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    /// File filter configuration
    pub file_filter: FilterConfig,
    /// Whether to include per-file statistics
    pub per_file_stats: bool,
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Include per-file statistics in results.
    pub fn with_file_stats(mut self) -> Self {
        self.per_file_stats = true;
        self
    }
}

/// Result of counting LOC over a set of files.
#[derive(Debug, Clone, Default)]
pub struct CountResult {
    /// Aggregated statistics across all files
    pub total: LocStats,
    /// Per-file statistics (if requested)
    pub files: Vec<FileStats>,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    fn add_file(&mut self, file: FileStats, keep: bool) {
        self.total += file.stats;
        if keep {
            self.files.push(file);
        }
    }
}

/// Count the lines of code in a single file.
///
/// Blank lines and comment-only lines are not counted. Fails with
/// [`LocError::FileAccess`](crate::LocError::FileAccess) if the file cannot
/// be read.
///
/// # Example
///
/// ```rust,ignore
/// use loccountlib::count_loc;
///
/// let loc = count_loc("src/app.js")?;
/// println!("{loc} lines of code");
/// ```
pub fn count_loc(path: impl AsRef<Path>) -> Result<u64> {
    count_file(path).map(|stats| stats.code)
}

/// Count code, comment and blank lines in a single file.
pub fn count_file(path: impl AsRef<Path>) -> Result<LocStats> {
    let source = SourceFile::new(path.as_ref());
    let lines = source.lines()?;
    let stats = classify_lines(&lines, source.extension());

    log::debug!(
        "{}: {} lines, {} code",
        source.path().display(),
        stats.total(),
        stats.code
    );

    Ok(stats)
}

/// Count LOC in a directory, or in a single file.
///
/// Hidden directories and `target/` are skipped.
///
/// # Example
///
/// ```rust,ignore
/// use loccountlib::{count_directory, CountOptions, FilterConfig};
///
/// let filter = FilterConfig::new().extensions([".js", ".java"]);
/// let result = count_directory("src/", &CountOptions::new().filter(filter))?;
/// println!("{}", result.total.code);
/// ```
pub fn count_directory(path: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let mut result = CountResult::new();
    count_into(path.as_ref(), options, &mut result)?;
    Ok(result)
}

/// Count LOC across several files and directories.
pub fn count_paths<I, P>(paths: I, options: &CountOptions) -> Result<CountResult>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut result = CountResult::new();
    for path in paths {
        count_into(path.as_ref(), options, &mut result)?;
    }
    Ok(result)
}

fn count_into(path: &Path, options: &CountOptions, result: &mut CountResult) -> Result<()> {
    for file_path in discover_files(path, &options.file_filter)? {
        let stats = count_file(&file_path)?;
        result.add_file(FileStats::new(file_path, stats), options.per_file_stats);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LocError;
    use std::fs;
    use tempfile::tempdir;

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn create_project(root: &Path) {
        create_file(
            &root.join("src/app.js"),
            r#"/*
 * License header
 */
"use strict";

// Entry point
function main() {
  run();
}
"#,
        );
        create_file(
            &root.join("src/Main.java"),
            r#"/** Main class. */
public class Main {
    /* inline */ int x;
}
"#,
        );
        create_file(
            &root.join("native/lib.cpp"),
            r#"#include <cstdio>
# define ANSWER 42

int answer() { return ANSWER; }
"#,
        );
    }

    #[test]
    fn test_count_loc() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        assert_eq!(count_loc(temp.path().join("src/app.js")).unwrap(), 4);
        // The one-line javadoc closes itself; the class body is code.
        assert_eq!(count_loc(temp.path().join("src/Main.java")).unwrap(), 3);
        assert_eq!(count_loc(temp.path().join("native/lib.cpp")).unwrap(), 3);
    }

    #[test]
    fn test_count_file() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let stats = count_file(temp.path().join("src/app.js")).unwrap();

        assert_eq!(stats.file_count, 1);
        assert_eq!(stats.code, 4);
        assert_eq!(stats.comment, 4);
        assert_eq!(stats.blank, 1);
    }

    #[test]
    fn test_count_missing_file() {
        let temp = tempdir().unwrap();
        let err = count_loc(temp.path().join("missing.js")).unwrap_err();
        assert!(matches!(err, LocError::FileAccess { .. }));
    }

    #[test]
    fn test_hash_lines_depend_on_extension() {
        let temp = tempdir().unwrap();
        let cpp = temp.path().join("a.cpp");
        let py = temp.path().join("a.py");
        create_file(&cpp, "# comment\n");
        create_file(&py, "# comment\n");

        assert_eq!(count_loc(&cpp).unwrap(), 1);
        assert_eq!(count_loc(&py).unwrap(), 0);
    }

    #[test]
    fn test_count_directory() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let result = count_directory(temp.path(), &CountOptions::new()).unwrap();

        assert_eq!(result.total.file_count, 3);
        assert_eq!(result.total.code, 10);
        assert!(result.files.is_empty());
    }

    #[test]
    fn test_count_directory_with_file_stats() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let filter = FilterConfig::new().extensions([".js", ".java"]);
        let options = CountOptions::new().filter(filter).with_file_stats();
        let result = count_directory(temp.path(), &options).unwrap();

        assert_eq!(result.files.len(), 2);
        assert!(result.files[0].path.ends_with("src/Main.java"));
        assert_eq!(result.files[0].stats.code, 3);
        assert!(result.files[1].path.ends_with("src/app.js"));
        assert_eq!(result.total.code, 7);
    }

    #[test]
    fn test_count_paths() {
        let temp = tempdir().unwrap();
        create_project(temp.path());

        let paths = [temp.path().join("src"), temp.path().join("native/lib.cpp")];
        let result = count_paths(&paths, &CountOptions::new().with_file_stats()).unwrap();

        assert_eq!(result.files.len(), 3);
        assert_eq!(result.total.code, 10);
    }

    #[test]
    fn test_count_paths_missing_root() {
        let temp = tempdir().unwrap();
        let result = count_paths([temp.path().join("nope")], &CountOptions::new());
        assert!(matches!(result, Err(LocError::PathNotFound(_))));
    }
}
