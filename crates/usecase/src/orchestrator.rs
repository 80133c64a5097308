use project_stats_domain::{FileRecord, LanguageTable, ScanAggregator, ScanResult, SkipSet};
use project_stats_ports::{
    filesystem::{FileEnumeration, FileEnumerationPlan, FileEnumerator},
    measurement::FileMeasurer,
};
use project_stats_shared_kernel::{FileExtension, Result, ScanWarning, path::logical_absolute};
use tracing::{debug, trace, warn};

use crate::dto::ScanRequest;

/// Scans one directory tree and aggregates the result.
pub struct ScanProject<'a> {
    enumerator: &'a dyn FileEnumerator,
    measurer: &'a dyn FileMeasurer,
    languages: &'a LanguageTable,
    skip: &'a SkipSet,
}

impl<'a> ScanProject<'a> {
    /// Uses the built-in language table and skip set.
    pub fn new(enumerator: &'a dyn FileEnumerator, measurer: &'a dyn FileMeasurer) -> Self {
        Self { enumerator, measurer, languages: LanguageTable::builtin(), skip: SkipSet::builtin() }
    }

    pub fn with_rules(mut self, languages: &'a LanguageTable, skip: &'a SkipSet) -> Self {
        self.languages = languages;
        self.skip = skip;
        self
    }

    /// Runs the scan.
    ///
    /// # Errors
    ///
    /// Only root validation failures are returned. Files that cannot be read
    /// end up in [`ScanResult::warnings`] instead.
    pub fn run(&self, request: &ScanRequest) -> Result<ScanResult> {
        let root = logical_absolute(&request.root);
        let plan = FileEnumerationPlan { root: root.clone(), skip_dirs: self.skip.names() };
        let FileEnumeration { entries, mut warnings } = self.enumerator.collect(&plan)?;
        debug!(root = %root.display(), candidates = entries.len(), "enumerated files");

        let mut aggregator = ScanAggregator::new(request.top_n);
        for entry in entries {
            let Some((ext, language)) = FileExtension::from_file_name(&entry.name)
                .and_then(|ext| self.languages.language_of(&ext).map(|lang| (ext, lang)))
            else {
                trace!(path = %entry.relative.display(), "no language rule, skipping");
                continue;
            };

            match self.measurer.measure(&entry.path) {
                Ok(measured) => {
                    aggregator.record(FileRecord::new(entry.relative, ext, measured.lines, measured.modified), language);
                }
                Err(err) => {
                    warn!(path = %entry.path.display(), error = %err, "could not read file, skipping");
                    warnings.push(ScanWarning::from_error(&entry.path, &err));
                }
            }
        }

        debug!(files = %aggregator.files_seen(), warnings = warnings.len(), "scan complete");
        Ok(aggregator.finish(root, warnings))
    }
}
