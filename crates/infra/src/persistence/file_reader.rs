use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

/// Buffer size used when streaming a file for line counting.
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path`.
    pub fn open(path: &Path) -> std::io::Result<File> {
        File::open(path)
    }

    /// Wrap an already opened file with buffered reading.
    pub fn buffered(file: File) -> BufReader<File> {
        BufReader::with_capacity(READ_BUFFER_SIZE, file)
    }
}
