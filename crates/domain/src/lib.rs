//! # Domain
//!
//! The scan rules and the aggregation model of `project_stats`.
//!
//! - [`language`]: the fixed extension → language table
//! - [`skip`]: directory names pruned from every traversal
//! - [`model`]: file records, per-language aggregates and the final [`ScanResult`]
//! - [`analytics`]: the [`ScanAggregator`] that folds file records into a result
//! - [`age`]: relative age descriptions ("3 days ago")
//!
//! Nothing here touches the filesystem.

#![allow(clippy::multiple_crate_versions)]

pub mod age;
pub mod analytics;
pub mod language;
pub mod model;
pub mod skip;

pub use age::RelativeAge;
pub use analytics::ScanAggregator;
pub use language::{LanguageRule, LanguageTable};
pub use model::{Anomaly, FileRecord, FileStamp, LanguageAggregate, RankedFile, ScanResult};
pub use skip::SkipSet;

/// Number of largest files reported when the caller does not choose.
pub const DEFAULT_TOP_N: usize = 5;
