//! Tag matching and documentation extraction.
//!
//! - `offset` - byte offset to row resolution
//! - `format` - comment sanitizing and inline markup
//! - `doc` - backward scan for the comment above a definition
//! - `fargs` - argument list guessing
//! - `matcher` - applying one pattern rule into a shared results map
//! - `summary` - flattening results for display
//! - `analyzer` - applying a whole language table to a file

pub mod analyzer;
pub mod doc;
pub mod fargs;
pub mod format;
pub mod matcher;
pub mod offset;
pub mod summary;

pub use analyzer::{split_lines, AnalyzeOptions, Analyzer};
pub use doc::extract_documentation_at_row;
pub use fargs::guess_fargs;
pub use format::filter_documentation;
pub use matcher::{find_matching_tags, MAX_DOCHEAD_LENGTH};
pub use offset::offset_row;
pub use summary::summarize;
