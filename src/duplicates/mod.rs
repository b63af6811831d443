//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Progressive size / digest / byte filtering ([`index`])
//! - Collating duplicates under their original path ([`collator`])
//! - Walking root paths and driving the pipeline ([`finder`])

pub mod collator;
pub mod finder;
pub mod index;

pub use collator::{DuplicateCluster, DuplicateCollator, RunStatistics};
pub use finder::{
    DetectionSession, DuplicateFinder, FinderConfig, LogObserver, ScanObserver, ScanReport,
};
pub use index::{CandidateIndex, Outcome};
