// crates/infra/src/measurement.rs
use std::{
    io::{self, BufRead},
    path::Path,
};

use project_stats_ports::measurement::{FileMeasurement, FileMeasurer};
use project_stats_shared_kernel::{InfraResult, InfrastructureError, LineCount, ModificationTime};

use crate::persistence::FileReader;

/// Counts lines by streaming the file's bytes.
#[derive(Debug, Default)]
pub struct LineMeasurer;

impl LineMeasurer {
    pub fn new() -> Self {
        Self
    }
}

impl FileMeasurer for LineMeasurer {
    fn measure(&self, path: &Path) -> InfraResult<FileMeasurement> {
        let read_err = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };

        let file = FileReader::open(path).map_err(read_err)?;
        let modified = file.metadata().and_then(|meta| meta.modified()).map_err(|source| {
            InfrastructureError::FileSystemOperation {
                operation: "read modification time".to_string(),
                path: path.to_path_buf(),
                source,
            }
        })?;
        let lines = count_lines(FileReader::buffered(file)).map_err(read_err)?;

        Ok(FileMeasurement { lines, modified: ModificationTime::from(modified) })
    }
}

/// Counts lines the way a text reader with universal newlines would.
///
/// `\n`, `\r` and `\r\n` each end a line, a trailing line without terminator
/// still counts, and an empty input has zero lines. Bytes are never decoded,
/// so invalid UTF-8 cannot fail the count.
pub fn count_lines<R: BufRead>(mut reader: R) -> io::Result<LineCount> {
    let mut terminators = 0usize;
    let mut last_byte: Option<u8> = None;

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if buf.is_empty() {
            break;
        }

        let lf = bytecount::count(buf, b'\n');
        let cr = bytecount::count(buf, b'\r');
        terminators += lf + cr;
        if cr > 0 && lf > 0 {
            terminators -= buf.windows(2).filter(|w| *w == b"\r\n").count();
        }
        // A CRLF split across two reads.
        if last_byte == Some(b'\r') && buf[0] == b'\n' {
            terminators -= 1;
        }
        last_byte = buf.last().copied();

        let len = buf.len();
        reader.consume(len);
    }

    if last_byte.is_some_and(|b| b != b'\n' && b != b'\r') {
        terminators += 1;
    }

    Ok(LineCount::new(terminators))
}
