use project_stats_shared_kernel::{FileCount, FileExtension, LineCount};

/// Running totals for one extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageAggregate {
    pub ext: FileExtension,
    pub name: &'static str,
    pub files: FileCount,
    pub lines: LineCount,
}

impl LanguageAggregate {
    pub fn new(ext: FileExtension, name: &'static str) -> Self {
        Self { ext, name, files: FileCount::ZERO, lines: LineCount::ZERO }
    }

    pub fn add_file(&mut self, lines: LineCount) {
        self.files += 1;
        self.lines += lines;
    }
}
