//! Line sources for bulk loads.
//!
//! The engine never touches the filesystem; these helpers turn a path or
//! any buffered reader into the plain text lines it consumes.

use crate::error::{BreakError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read every line of a file.
///
/// A missing file is reported as [`BreakError::FileNotFound`] before any
/// line is read.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => BreakError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => BreakError::Io(e),
    })?;
    read_lines_from(BufReader::new(file))
}

/// Read every line from a buffered reader, stripping `\n` / `\r\n`.
pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Read from stdin when `path` is `-`, otherwise from the file.
pub fn read_lines_or_stdin<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if path.as_os_str() == "-" {
        let stdin = io::stdin();
        read_lines_from(stdin.lock())
    } else {
        read_lines(path)
    }
}
