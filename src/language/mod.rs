//! Language configuration: pattern tables and extension groups.
//!
//! - `table` - built-in and file-loaded per-language rule tables
//! - `groups` - extension parsing and compatibility groups
//! - `open_files` - import suggestions among open editor files

pub mod groups;
pub mod open_files;
pub mod table;

pub use groups::{compatible_extensions, extension_of};
pub use open_files::{find_matching_open_files, OpenFiles};
pub use table::{Language, LanguageDef, LanguageTable};
