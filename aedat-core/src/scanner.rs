//! Streaming scanner over the events of an AEDAT 2.0 recording.
//!
//! The scanner skips the comment header, derives the number of complete
//! records from the stream length and then decodes them one at a time. Only
//! the current record is held in memory.

use crate::header::{self, FileHeader};
use crate::parser::{self, RECORD_SIZE};
use crate::types::Event;
use log::{debug, warn};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while scanning a recording.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to open {}: {}", .path.display(), .source)]
    Open { path: PathBuf, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Lazy, non-restartable iterator over the events of a recording.
#[derive(Debug)]
pub struct EventScanner<R> {
    reader: R,
    header: FileHeader,
    data_offset: u64,
    record_count: u64,
    trailing_bytes: u64,
    remaining: u64,
}

impl EventScanner<BufReader<File>> {
    /// Opens a recording from disk.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ScanError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ScanError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(BufReader::new(file))
    }
}

impl<R: BufRead + Seek> EventScanner<R> {
    /// Creates a scanner over `reader`, which must be positioned at the start
    /// of the recording.
    ///
    /// Seeks once to the end of the stream to measure it and once back to the
    /// first data record.
    pub fn new(mut reader: R) -> Result<Self, ScanError> {
        let start = reader.stream_position()?;
        let header = header::skip_header(&mut reader)?;
        let data_offset = start + header.len;

        let len = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(data_offset))?;

        let data_len = len.saturating_sub(data_offset);
        let record_count = data_len / RECORD_SIZE as u64;
        let trailing_bytes = data_len % RECORD_SIZE as u64;

        debug!(
            "header: version={:?} comment_lines={} data_offset={} records={}",
            header.version, header.comment_lines, data_offset, record_count
        );
        if trailing_bytes != 0 {
            warn!(
                "ignoring {} trailing bytes after the last complete record",
                trailing_bytes
            );
        }

        Ok(Self {
            reader,
            header,
            data_offset,
            record_count,
            trailing_bytes,
            remaining: record_count,
        })
    }
}

impl<R> EventScanner<R> {
    /// Returns the skipped comment header.
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Byte offset of the first data record.
    pub fn data_offset(&self) -> u64 {
        self.data_offset
    }

    /// Number of complete records in the data section.
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Bytes after the last complete record that are ignored.
    pub fn trailing_bytes(&self) -> u64 {
        self.trailing_bytes
    }
}

impl<R: Read> Iterator for EventScanner<R> {
    type Item = Result<Event, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        match parser::read_record(&mut self.reader) {
            Ok(event) => {
                self.remaining -= 1;
                Some(Ok(event))
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                // The stream shrank after it was measured; drop the partial record.
                warn!(
                    "stream ended early, {} of {} records missing",
                    self.remaining, self.record_count
                );
                self.remaining = 0;
                None
            }
            Err(e) => {
                self.remaining = 0;
                Some(Err(e.into()))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, usize::try_from(self.remaining).ok())
    }
}
