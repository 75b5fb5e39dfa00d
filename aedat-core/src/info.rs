//! Summary statistics of a recording.

use crate::scanner::{EventScanner, ScanError};
use crate::types::{Event, InfoReport};
use std::path::Path;

/// Timestamp reported for `t_start`/`t_stop` when a recording has no events.
pub const NO_TIMESTAMP: u32 = u32::MAX;

/// Consumes an event sequence and reports its count and first/last timestamp.
///
/// Timestamps are assumed to be non-decreasing, so first and last are also
/// the minimum and maximum.
pub fn summarize<I>(events: I) -> Result<InfoReport, ScanError>
where
    I: IntoIterator<Item = Result<Event, ScanError>>,
{
    let mut report = InfoReport {
        events: 0,
        t_start: NO_TIMESTAMP,
        t_stop: NO_TIMESTAMP,
    };

    for event in events {
        let event = event?;
        if report.events == 0 {
            report.t_start = event.timestamp;
        }
        report.t_stop = event.timestamp;
        report.events += 1;
    }

    Ok(report)
}

/// Scans a recording on disk and summarises it.
pub fn file_info<P: AsRef<Path>>(path: P) -> Result<InfoReport, ScanError> {
    summarize(EventScanner::open(path)?)
}
