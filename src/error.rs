//! Error types for tagscan.

use thiserror::Error;

/// Result type alias for tagscan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tagscan.
#[derive(Error, Debug)]
pub enum Error {
    // ===== Rule Contract Errors =====
    #[error("Pattern must search all occurrences (global): {pattern}")]
    PatternNotGlobal { pattern: String },

    #[error("Pattern must have exactly one capture group, found {found}: {pattern}")]
    CaptureGroups { pattern: String, found: usize },

    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // ===== Configuration Errors =====
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    // ===== I/O Errors =====
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ===== Internal Errors =====
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a capture group contract error.
    pub fn capture_groups(pattern: impl Into<String>, found: usize) -> Self {
        Self::CaptureGroups {
            pattern: pattern.into(),
            found,
        }
    }

    /// Check if this error is a rule contract violation.
    ///
    /// Contract violations are programming or configuration mistakes in the
    /// language table, never something a particular input file can cause.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            Self::PatternNotGlobal { .. } | Self::CaptureGroups { .. } | Self::InvalidPattern(_)
        )
    }
}
