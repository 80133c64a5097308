// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use project_stats_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer targeting `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }

    /// Write a rendered report to `path`, replacing any previous content.
    pub fn write_report<P: AsRef<Path>>(path: P, text: &str) -> InfraResult<()> {
        let path = path.as_ref();
        let export_err = |source| InfrastructureError::ExportWrite { path: path.to_path_buf(), source };

        let mut writer = Self::create(path).map_err(export_err)?;
        writer.write_all(text.as_bytes()).map_err(export_err)?;
        writer.flush().map_err(export_err)
    }
}
