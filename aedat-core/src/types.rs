//! Core types for AEDAT 2.0 event data.
//!
//! This module defines the event record, the time window used for slicing,
//! and the summary values reported by the info and slice operations.

use std::fmt;

/// A decoded AEDAT 2.0 event.
///
/// Each event carries an opaque 32-bit address (the sensor element that fired)
/// and a 32-bit timestamp. By format convention one timestamp tick is 1 us.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Event {
    /// Address/data field, passed through unmodified
    pub address: u32,
    /// Timestamp in microseconds
    pub timestamp: u32,
}

impl Event {
    /// Creates a new event.
    #[inline]
    pub fn new(address: u32, timestamp: u32) -> Self {
        Self { address, timestamp }
    }
}

/// Inclusive timestamp window used when slicing a recording.
///
/// No ordering between `start` and `stop` is enforced. A window with
/// `start > stop` matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// First timestamp to keep
    pub start: u32,
    /// Last timestamp to keep
    pub stop: u32,
}

impl TimeWindow {
    /// Window covering every possible timestamp.
    pub const ALL: Self = Self {
        start: 0,
        stop: u32::MAX,
    };

    /// Creates a new window with inclusive bounds.
    #[inline]
    pub fn new(start: u32, stop: u32) -> Self {
        Self { start, stop }
    }

    /// Returns true if `timestamp` lies within `[start, stop]`.
    #[inline]
    pub fn contains(&self, timestamp: u32) -> bool {
        timestamp >= self.start && timestamp <= self.stop
    }

    /// Returns true once `timestamp` has moved beyond the end of the window.
    #[inline]
    pub fn is_exceeded_by(&self, timestamp: u32) -> bool {
        timestamp > self.stop
    }
}

/// Summary statistics of a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoReport {
    /// Number of complete records in the data section
    pub events: u64,
    /// Timestamp of the first event, `u32::MAX` if there is none
    pub t_start: u32,
    /// Timestamp of the last event, `u32::MAX` if there is none
    pub t_stop: u32,
}

impl fmt::Display for InfoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Events: {}", self.events)?;
        writeln!(f, "tStart: {}", self.t_start)?;
        write!(f, "tStop: {}", self.t_stop)
    }
}

/// Counts reported after slicing a recording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceStats {
    /// Number of records in the input data section
    pub events_read: u64,
    /// Number of records written to the output
    pub events_written: u64,
}

impl fmt::Display for SliceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Events read: {}", self.events_read)?;
        write!(f, "Events written: {}", self.events_written)
    }
}
