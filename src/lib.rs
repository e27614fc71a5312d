//! tagscan - regex-driven symbol tagging with documentation extraction.
//!
//! Given the text of a source file, tagscan locates candidate symbol
//! definitions with per-language pattern rules and attaches the
//! documentation comment that immediately precedes each one. It never
//! parses a language grammar; everything is textual heuristics.
//!
//! # Architecture
//!
//! 1. **Types** (`types`) - pattern rules, match records, summaries
//! 2. **Tag engine** (`tags`) - offset resolution, comment extraction and
//!    formatting, argument guessing, rule application
//! 3. **Languages** (`language`) - rule tables and extension groups, import
//!    suggestions among open files
//! 4. **Service** (`service`) - concurrent scanning of files and directories
//!
//! # Example
//!
//! ```
//! use tagscan::tags::{find_matching_tags, summarize};
//! use tagscan::types::{PatternRule, ResultsMap};
//!
//! let contents = "# Says hello.\ndef hello(name):\n    print(name)\n";
//! let lines: Vec<&str> = contents.split('\n').collect();
//! let rule = PatternRule::new(r"(?m)^def\s+(\w+)", "function").unwrap();
//!
//! let mut results = ResultsMap::new();
//! find_matching_tags(&lines, contents, &rule, true, true, &mut results);
//!
//! let tags = summarize(&lines, &results);
//! assert_eq!(tags[0].name, "hello");
//! assert_eq!(tags[0].doc.as_deref(), Some("Says hello."));
//! assert_eq!(tags[0].fargs.as_deref(), Some("(name)"));
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod service;
pub mod tags;
pub mod types;

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
