//! AEDAT 2.0 reader and slicer for event camera recordings.
//!
//! This crate reads AEDAT 2.0 files (an optional `#` comment header followed by
//! fixed 8-byte address/timestamp records), reports summary statistics and
//! writes time-bounded slices as new AEDAT 2.0 files. Recordings are streamed;
//! only the current record is held in memory.
//!
//! # Example
//!
//! ```no_run
//! use aedat_core::{info, output, SliceConfig, TimeWindow};
//!
//! let report = info::file_info("recording.aedat").unwrap();
//! println!("{}", report);
//!
//! let config = SliceConfig::new("recording.aedat", "slice.aedat", TimeWindow::new(1_000, 2_000)).unwrap();
//! let stats = output::slice_file(&config).unwrap();
//! println!("{}", stats);
//! ```
//!
//! # Byte order
//!
//! Records are decoded little-endian but written big-endian. This asymmetry
//! matches existing aedatutils files; see [`parser`].

pub mod config;
pub mod header;
pub mod info;
pub mod output;
pub mod parser;
pub mod scanner;
pub mod types;

// Re-export commonly used types
pub use config::{ConfigError, SliceConfig};
pub use header::FileHeader;
pub use output::{SliceError, SliceWriter};
pub use scanner::{EventScanner, ScanError};
pub use types::{Event, InfoReport, SliceStats, TimeWindow};
