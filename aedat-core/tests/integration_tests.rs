//! Integration tests for the AEDAT reader and slicer on real files.
//!
//! Run with: cargo test --test integration_tests

use aedat_core::{info, output, parser, ConfigError, Event, ScanError, SliceConfig, TimeWindow};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Encodes events the way recording software stores them (little-endian).
fn write_recording(path: &Path, header: &[u8], events: &[(u32, u32)]) {
    let mut data = header.to_vec();
    for &(address, timestamp) in events {
        data.extend_from_slice(&address.to_le_bytes());
        data.extend_from_slice(&timestamp.to_le_bytes());
    }
    fs::write(path, data).unwrap();
}

/// Decodes the big-endian records following the header of a sliced file.
fn read_slice_records(data: &[u8], header_len: usize) -> Vec<Event> {
    data[header_len..]
        .chunks_exact(parser::RECORD_SIZE)
        .map(|c| {
            Event::new(
                u32::from_be_bytes([c[0], c[1], c[2], c[3]]),
                u32::from_be_bytes([c[4], c[5], c[6], c[7]]),
            )
        })
        .collect()
}

#[test]
fn test_info_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.aedat");
    write_recording(&input, b"#x\n", &[(10, 5), (20, 15)]);

    let report = info::file_info(&input).unwrap();
    assert_eq!(report.events, 2);
    assert_eq!(report.t_start, 5);
    assert_eq!(report.t_stop, 15);
    assert_eq!(report.to_string(), "Events: 2\ntStart: 5\ntStop: 15");
}

#[test]
fn test_slice_end_to_end() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.aedat");
    let output_path = dir.path().join("slice.aedat");
    write_recording(&input, b"#x\n", &[(10, 5), (20, 15)]);

    let config = SliceConfig::new(&input, &output_path, TimeWindow::new(5, 5)).unwrap();
    let stats = output::slice_file(&config).unwrap();
    assert_eq!(stats.events_read, 2);
    assert_eq!(stats.events_written, 1);

    let data = fs::read(&output_path).unwrap();
    let header = output::file_header(output::DEFAULT_CREATOR);
    assert!(data.starts_with(header.as_bytes()));
    assert_eq!(
        read_slice_records(&data, header.len()),
        vec![Event::new(10, 5)]
    );
}

#[test]
fn test_slice_full_window_keeps_every_record() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.aedat");
    let output_path = dir.path().join("slice.aedat");
    let events: Vec<(u32, u32)> = (0..100).map(|i| (i * 7, i * 3)).collect();
    write_recording(&input, b"", &events);

    let config = SliceConfig::new(&input, &output_path, TimeWindow::ALL).unwrap();
    let stats = output::slice_file(&config).unwrap();
    assert_eq!(stats.events_read, 100);
    assert_eq!(stats.events_written, 100);

    let data = fs::read(&output_path).unwrap();
    let header_len = output::file_header(output::DEFAULT_CREATOR).len();
    let records = read_slice_records(&data, header_len);
    assert_eq!(records.len(), 100);
    assert_eq!(records[99], Event::new(99 * 7, 99 * 3));
}

#[test]
fn test_sliced_file_header_is_skipped_on_read() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.aedat");
    let output_path = dir.path().join("slice.aedat");
    write_recording(&input, b"", &[(1, 1), (2, 2), (3, 3)]);

    let config = SliceConfig::new(&input, &output_path, TimeWindow::ALL)
        .unwrap()
        .with_creator("test-suite");
    output::slice_file(&config).unwrap();

    // Reading the slice back uses the little-endian read path, so only the
    // record count is preserved.
    let report = info::file_info(&output_path).unwrap();
    assert_eq!(report.events, 3);

    let data = fs::read(&output_path).unwrap();
    assert!(String::from_utf8_lossy(&data).contains("created by test-suite"));
}

#[test]
fn test_info_header_only_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.aedat");
    write_recording(&input, b"#!AER-DAT2.0\r\n# nothing here\r\n", &[]);

    let report = info::file_info(&input).unwrap();
    assert_eq!(report.events, 0);
    assert_eq!(report.t_start, 4294967295);
    assert_eq!(report.t_stop, 4294967295);
}

#[test]
fn test_info_zero_length_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("zero.aedat");
    fs::write(&input, b"").unwrap();

    let report = info::file_info(&input).unwrap();
    assert_eq!(report.events, 0);
    assert_eq!(report.t_start, u32::MAX);
}

#[test]
fn test_info_ignores_trailing_partial_record() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("partial.aedat");
    write_recording(&input, b"#h\n", &[(1, 100), (2, 200)]);
    let mut data = fs::read(&input).unwrap();
    data.extend_from_slice(&[0xFF; 5]);
    fs::write(&input, data).unwrap();

    let report = info::file_info(&input).unwrap();
    assert_eq!(report.events, 2);
    assert_eq!(report.t_stop, 200);
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.aedat");
    let output_path = dir.path().join("slice.aedat");

    assert!(matches!(
        info::file_info(&input),
        Err(ScanError::Open { .. })
    ));

    let config = SliceConfig::new(&input, &output_path, TimeWindow::ALL).unwrap();
    assert!(output::slice_file(&config).is_err());
    // The output must not be created when the input cannot be read
    assert!(!output_path.exists());
}

#[test]
fn test_same_input_and_output_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.aedat");
    write_recording(&input, b"", &[(1, 1)]);

    let err = SliceConfig::new(&input, &input, TimeWindow::ALL).unwrap_err();
    assert_eq!(err, ConfigError::SamePath(input.clone()));
    // Input untouched
    assert_eq!(fs::read(&input).unwrap().len(), 8);
}
