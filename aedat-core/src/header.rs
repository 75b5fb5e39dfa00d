//! Skipping of the textual comment header in front of AEDAT event data.
//!
//! AEDAT 2.0 files may start with any number of ASCII lines beginning with
//! `#`. The first of them usually announces the format, e.g. `#!AER-DAT2.0`.

use std::io::{self, BufRead};

/// First byte of every header comment line.
pub const COMMENT_SENTINEL: u8 = b'#';

const VERSION_PREFIX: &str = "#!AER-DAT";

/// Description of the comment block that was skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileHeader {
    /// Format version announced by a leading `#!AER-DAT<version>` line
    pub version: Option<String>,
    /// Number of comment lines
    pub comment_lines: usize,
    /// Length of the comment block in bytes
    pub len: u64,
}

/// Consumes all leading comment lines from `reader`.
///
/// The first byte of each line is peeked through the reader's buffer, so the
/// first non-comment byte stays unread and is the first byte of the first
/// data record. A comment line without a terminator runs to end of stream.
pub fn skip_header<R: BufRead>(reader: &mut R) -> io::Result<FileHeader> {
    let mut header = FileHeader::default();
    let mut line = Vec::new();

    loop {
        if reader.fill_buf()?.first() != Some(&COMMENT_SENTINEL) {
            break;
        }

        line.clear();
        let bytes_read = reader.read_until(b'\n', &mut line)?;
        header.len += bytes_read as u64;
        header.comment_lines += 1;

        if header.comment_lines == 1 {
            header.version = parse_version_line(&line);
        }
    }

    Ok(header)
}

/// Extracts the version from a `#!AER-DAT<version>` line.
fn parse_version_line(line: &[u8]) -> Option<String> {
    let line = String::from_utf8_lossy(line);
    let version = line.strip_prefix(VERSION_PREFIX)?.trim_end();
    if version.is_empty() {
        None
    } else {
        Some(version.to_string())
    }
}
