//! # loccountlib
//!
//! A lines of code counter for mixed-language source trees (JavaScript, Java,
//! C++, Python, ...) that skips blank and comment-only lines.
//!
//! ## Overview
//!
//! Counting happens in two steps:
//!
//! - **Line source** ([`source`]): a file is read into its physical lines,
//!   terminators included, so the lines concatenate back to the file.
//! - **Classifier** ([`classifier`]): a single forward pass decides for each
//!   line whether it is blank, a comment, or code. It recognises `//`, `#`
//!   (except in `.cpp` files), `"""` and `/* ... */` block comments using
//!   prefix checks only.
//!
//! On top of that, [`count_directory`] and [`count_paths`] walk directories
//! with optional glob and extension filters and sum the results.
//!
//! ## Example
//!
//! ```rust
//! use loccountlib::{count_file, count_loc};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("app.js");
//! fs::write(&path, "/* start\nstill comment\nend */ code();\n\nrun();\n").unwrap();
//!
//! assert_eq!(count_loc(&path).unwrap(), 2);
//!
//! let stats = count_file(&path).unwrap();
//! assert_eq!(stats.comment, 2);
//! assert_eq!(stats.blank, 1);
//! ```

pub mod classifier;
pub mod counter;
pub mod error;
pub mod filter;
pub mod source;
pub mod stats;

pub use classifier::{classify_lines, count_code_lines, Classifier, LineKind};
pub use counter::{count_directory, count_file, count_loc, count_paths, CountOptions, CountResult};
pub use error::LocError;
pub use filter::FilterConfig;
pub use source::{load_lines, SourceFile};
pub use stats::{FileStats, LocStats};

/// Result type for loccountlib operations
pub type Result<T> = std::result::Result<T, LocError>;
