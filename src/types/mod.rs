//! Core type definitions for tagscan.
//!
//! Pattern rules and the match records they produce, shared by the tag
//! engine, the analyzer and the scan service.

pub mod rule;
pub mod tags;

// Re-export commonly used types
pub use rule::*;
pub use tags::*;
