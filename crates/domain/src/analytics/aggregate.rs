use std::{collections::HashMap, path::PathBuf};

use project_stats_shared_kernel::{FileCount, FileExtension, LineCount, ScanWarning};

use crate::model::{Anomaly, FileRecord, FileStamp, LanguageAggregate, RankedFile, ScanResult};

/// Folds measured files into a [`ScanResult`].
///
/// Records must be fed in traversal order: every tie-break (largest files,
/// language order, newest and oldest file) favours the record seen first.
#[derive(Debug)]
pub struct ScanAggregator {
    top_n: usize,
    total_files: FileCount,
    total_lines: LineCount,
    languages: Vec<LanguageAggregate>,
    language_index: HashMap<FileExtension, usize>,
    files: Vec<RankedFile>,
    empty_files: FileCount,
    small_files: FileCount,
    newest: Option<FileStamp>,
    oldest: Option<FileStamp>,
}

impl ScanAggregator {
    pub fn new(top_n: usize) -> Self {
        Self {
            top_n,
            total_files: FileCount::ZERO,
            total_lines: LineCount::ZERO,
            languages: Vec::new(),
            language_index: HashMap::new(),
            files: Vec::new(),
            empty_files: FileCount::ZERO,
            small_files: FileCount::ZERO,
            newest: None,
            oldest: None,
        }
    }

    pub fn record(&mut self, record: FileRecord, language: &'static str) {
        self.total_files += 1;
        self.total_lines += record.lines;

        let idx = match self.language_index.get(&record.ext) {
            Some(&idx) => idx,
            None => {
                self.languages.push(LanguageAggregate::new(record.ext.clone(), language));
                self.language_index.insert(record.ext.clone(), self.languages.len() - 1);
                self.languages.len() - 1
            }
        };
        self.languages[idx].add_file(record.lines);

        match record.anomaly() {
            Some(Anomaly::Empty) => self.empty_files += 1,
            Some(Anomaly::Small) => self.small_files += 1,
            None => {}
        }

        if self.newest.as_ref().is_none_or(|n| record.modified > n.modified) {
            self.newest = Some(FileStamp { path: record.path.clone(), modified: record.modified });
        }
        if self.oldest.as_ref().is_none_or(|o| record.modified < o.modified) {
            self.oldest = Some(FileStamp { path: record.path.clone(), modified: record.modified });
        }

        self.files.push(RankedFile { path: record.path, lines: record.lines });
    }

    pub fn files_seen(&self) -> FileCount {
        self.total_files
    }

    pub fn finish(self, root: PathBuf, warnings: Vec<ScanWarning>) -> ScanResult {
        let Self { top_n, total_files, total_lines, mut languages, mut files, empty_files, small_files, newest, oldest, .. } =
            self;

        // Both sorts are stable, so equal line counts keep insertion order.
        languages.sort_by(|a, b| b.lines.cmp(&a.lines));
        files.sort_by(|a, b| b.lines.cmp(&a.lines));
        files.truncate(top_n);

        ScanResult {
            root,
            total_files,
            total_lines,
            languages,
            largest_files: files,
            empty_files,
            small_files,
            newest_file: newest,
            oldest_file: oldest,
            warnings,
        }
    }
}
