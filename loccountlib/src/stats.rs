//! Core data structures for LOC statistics

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line counts for one or more files.
///
/// Every physical line lands in exactly one bucket, so `total()` is the
/// number of lines read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocStats {
    /// Number of files analyzed
    pub file_count: u64,
    /// Blank lines (whitespace only)
    pub blank: u64,
    /// Non-blank lines that are not counted as code
    pub comment: u64,
    /// Lines counted as code
    pub code: u64,
}

impl LocStats {
    /// Create a new LocStats with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Total lines
    pub fn total(&self) -> u64 {
        self.blank + self.comment + self.code
    }

    /// Lines with at least one non-whitespace character
    pub fn non_blank(&self) -> u64 {
        self.comment + self.code
    }
}

impl Add for LocStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            file_count: self.file_count + other.file_count,
            blank: self.blank + other.blank,
            comment: self.comment + other.comment,
            code: self.code + other.code,
        }
    }
}

impl AddAssign for LocStats {
    fn add_assign(&mut self, other: Self) {
        self.file_count += other.file_count;
        self.blank += other.blank;
        self.comment += other.comment;
        self.code += other.code;
    }
}

impl Sum for LocStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, s| acc + s)
    }
}

/// Statistics for a single file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    /// Path to the file
    pub path: PathBuf,
    /// Line counts for the file
    pub stats: LocStats,
}

impl FileStats {
    pub fn new(path: PathBuf, stats: LocStats) -> Self {
        Self { path, stats }
    }
}
