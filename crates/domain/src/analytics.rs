pub mod aggregate;

pub use aggregate::ScanAggregator;
