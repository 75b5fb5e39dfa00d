//! Writing time slices of a recording as new AEDAT 2.0 files.
//!
//! Sliced files start with a freshly generated comment header; the comments
//! of the input are not carried over. Records are written big-endian, see
//! [`crate::parser`] for the byte-order asymmetry with the read path.

use crate::config::SliceConfig;
use crate::parser;
use crate::scanner::{EventScanner, ScanError};
use crate::types::{Event, SliceStats, TimeWindow};
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use thiserror::Error;

/// Tool name written into the header when none is configured.
pub const DEFAULT_CREATOR: &str = "aedatslice";

/// Project URL written into the header.
pub const PROJECT_URL: &str = "https://github.com/rochus/aedatutils";

/// Errors that can occur while writing a slice.
#[derive(Error, Debug)]
pub enum SliceError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("failed to create {}: {}", .path.display(), .source)]
    Create { path: PathBuf, source: io::Error },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Returns the fixed AEDAT 2.0 header naming `creator` as the producing tool.
pub fn file_header(creator: &str) -> String {
    format!(
        "#!AER-DAT2.0\r\n\
         # This is a raw AE data file created by {creator} ({PROJECT_URL})\r\n\
         # Data format is int32 address, int32 timestamp (8 bytes total), repeated for each event\r\n\
         # Timestamps tick is 1 us\r\n"
    )
}

/// Buffered writer producing an AEDAT 2.0 file.
pub struct SliceWriter<W: Write> {
    writer: BufWriter<W>,
    events_written: u64,
}

impl<W: Write> SliceWriter<W> {
    /// Creates a new slice writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
            events_written: 0,
        }
    }

    /// Writes the file header.
    pub fn write_header(&mut self, creator: &str) -> Result<(), SliceError> {
        self.writer.write_all(file_header(creator).as_bytes())?;
        Ok(())
    }

    /// Writes a single event record.
    #[inline]
    pub fn write_event(&mut self, event: &Event) -> Result<(), SliceError> {
        parser::write_record(&mut self.writer, event)?;
        self.events_written += 1;
        Ok(())
    }

    /// Number of events written so far.
    pub fn events_written(&self) -> u64 {
        self.events_written
    }

    /// Flushes the writer.
    pub fn flush(&mut self) -> Result<(), SliceError> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes every event of `events` that falls inside `window`.
///
/// Scanning stops at the first timestamp past `window.stop`. This relies on
/// the timestamps being non-decreasing; on unsorted input later events that
/// would match are silently dropped. Returns the number of events written.
pub fn slice_events<I, W>(
    events: I,
    window: TimeWindow,
    writer: &mut SliceWriter<W>,
) -> Result<u64, SliceError>
where
    I: IntoIterator<Item = Result<Event, ScanError>>,
    W: Write,
{
    let written_before = writer.events_written();

    for event in events {
        let event = event?;
        if window.contains(event.timestamp) {
            writer.write_event(&event)?;
        }
        if window.is_exceeded_by(event.timestamp) {
            debug!(
                "timestamp {} past window end {}, stopping",
                event.timestamp, window.stop
            );
            break;
        }
    }

    Ok(writer.events_written() - written_before)
}

/// Slices the recording behind `scanner` into `output`.
///
/// `events_read` is the number of records in the input, whether or not the
/// scan stopped early.
pub fn slice<R, W>(
    scanner: EventScanner<R>,
    window: TimeWindow,
    creator: &str,
    output: W,
) -> Result<SliceStats, SliceError>
where
    R: Read,
    W: Write,
{
    let events_read = scanner.record_count();

    let mut writer = SliceWriter::new(output);
    writer.write_header(creator)?;
    let events_written = slice_events(scanner, window, &mut writer)?;
    writer.flush()?;

    Ok(SliceStats {
        events_read,
        events_written,
    })
}

/// Slices the input file of `config` into its output file.
///
/// The input is opened before the output is created. On failure mid-write the
/// output is left incomplete.
pub fn slice_file(config: &SliceConfig) -> Result<SliceStats, SliceError> {
    let scanner = EventScanner::open(config.input())?;
    let file = File::create(config.output()).map_err(|source| SliceError::Create {
        path: config.output().to_path_buf(),
        source,
    })?;
    slice(scanner, config.window(), config.creator(), file)
}
