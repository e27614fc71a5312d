//! Service layer for tagscan.
//!
//! Wraps the synchronous tag engine with file discovery and concurrent,
//! blocking-pool tagging for whole directories.

pub mod scan;

pub use scan::{ScanReport, ScanService};
