pub mod file_record;
pub mod language_aggregate;
pub mod scan_result;

pub use file_record::{Anomaly, FileRecord, FileStamp, RankedFile};
pub use language_aggregate::LanguageAggregate;
pub use scan_result::ScanResult;
