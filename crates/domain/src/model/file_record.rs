use project_stats_shared_kernel::{FileExtension, FilePath, LineCount, ModificationTime};

/// Upper bound (inclusive) of the "very small" anomaly bucket.
pub const SMALL_FILE_MAX_LINES: usize = 4;

/// One measured file, with its path relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: FilePath,
    pub ext: FileExtension,
    pub lines: LineCount,
    pub modified: ModificationTime,
}

impl FileRecord {
    pub fn new(
        path: impl Into<FilePath>,
        ext: FileExtension,
        lines: impl Into<LineCount>,
        modified: impl Into<ModificationTime>,
    ) -> Self {
        Self { path: path.into(), ext, lines: lines.into(), modified: modified.into() }
    }

    pub fn anomaly(&self) -> Option<Anomaly> {
        Anomaly::classify(self.lines)
    }
}

/// Files too short to be meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anomaly {
    /// Exactly zero lines.
    Empty,
    /// One to [`SMALL_FILE_MAX_LINES`] lines.
    Small,
}

impl Anomaly {
    pub fn classify(lines: LineCount) -> Option<Self> {
        match lines.value() {
            0 => Some(Self::Empty),
            1..=SMALL_FILE_MAX_LINES => Some(Self::Small),
            _ => None,
        }
    }
}

/// Entry of the largest-files list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedFile {
    pub path: FilePath,
    pub lines: LineCount,
}

/// A file singled out by its modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStamp {
    pub path: FilePath,
    pub modified: ModificationTime,
}
