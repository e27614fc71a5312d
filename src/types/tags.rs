//! Tag match records and summaries.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One located definition of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// 0-based row of the defining line
    pub row: usize,
    /// Short excerpt of the defining line for display
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_head: Option<String>,
    /// Whether the argument list should be guessed when summarizing
    pub guess_fargs: bool,
    /// Formatted documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Symbol category
    pub kind: String,
}

/// Symbol name to its definitions, in first-seen order.
///
/// A results map is scoped to one analysis request and accumulates the
/// output of every rule applied during that request.
pub type ResultsMap = IndexMap<String, Vec<MatchRecord>>;

/// Flattened, display-ready view of a single match record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSummary {
    /// Symbol name
    pub name: String,
    /// Symbol category
    pub kind: String,
    /// 0-based row of the defining line
    pub row: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_head: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Guessed argument list, e.g. `(a, b)`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fargs: Option<String>,
}

/// Tags found in one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTags {
    /// Path as given to the scanner
    pub path: String,
    /// Language the file was matched against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub tags: Vec<TagSummary>,
    /// Read failure, if the file could not be scanned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
