//! Symbol pattern rules.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Serialized form of a pattern rule, as it appears in a language table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Regular expression with exactly one capture group (the symbol name)
    pub pattern: String,
    /// Symbol category (function, class, ...)
    pub kind: String,
    /// Only contributes documentation to an entry created by another rule
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub doc_only: bool,
    /// Whether the rule searches every occurrence in the text
    #[serde(default = "default_global")]
    pub global: bool,
}

fn default_global() -> bool {
    true
}

impl RuleSpec {
    /// Create a rule spec that originates entries.
    pub fn new(pattern: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            kind: kind.into(),
            doc_only: false,
            global: true,
        }
    }

    /// Create a rule spec that only supplies documentation.
    pub fn doc_only(pattern: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            doc_only: true,
            ..Self::new(pattern, kind)
        }
    }
}

/// A validated symbol-finding rule.
///
/// A `PatternRule` can only be obtained through validation, so every rule
/// handed to the matcher searches all occurrences and yields exactly one
/// capture group.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    kind: String,
    doc_only: bool,
}

impl PatternRule {
    /// Compile and validate a rule from its serialized form.
    pub fn from_spec(spec: &RuleSpec) -> Result<Self> {
        if !spec.global {
            return Err(Error::PatternNotGlobal {
                pattern: spec.pattern.clone(),
            });
        }

        let regex = Regex::new(&spec.pattern)?;
        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 1 {
            return Err(Error::capture_groups(&spec.pattern, found));
        }

        Ok(Self {
            regex,
            kind: spec.kind.clone(),
            doc_only: spec.doc_only,
        })
    }

    /// Compile a rule that originates entries.
    pub fn new(pattern: &str, kind: &str) -> Result<Self> {
        Self::from_spec(&RuleSpec::new(pattern, kind))
    }

    /// Compile a documentation-only rule.
    pub fn doc_only(pattern: &str, kind: &str) -> Result<Self> {
        Self::from_spec(&RuleSpec::doc_only(pattern, kind))
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn is_doc_only(&self) -> bool {
        self.doc_only
    }
}

impl TryFrom<&RuleSpec> for PatternRule {
    type Error = Error;

    fn try_from(spec: &RuleSpec) -> Result<Self> {
        Self::from_spec(spec)
    }
}
