//! Encoding and decoding of AEDAT 2.0 fixed-size event records.
//!
//! A record is 8 bytes: a 32-bit address followed by a 32-bit timestamp.
//!
//! The read and write paths use opposite byte orders. Records are decoded as
//! little-endian but encoded as big-endian, matching the files produced by the
//! existing aedatutils tooling. The two conversions are therefore not inverses
//! of each other. Consumers of sliced files may depend on either convention,
//! so this quirk is kept as is.

use crate::types::Event;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io::{self, Read, Write};

/// Size of one event record in bytes.
pub const RECORD_SIZE: usize = 8;

/// Decodes a record from 8 bytes (little-endian address, little-endian timestamp).
#[inline]
pub fn decode_record(bytes: &[u8; RECORD_SIZE]) -> Event {
    Event::new(
        LittleEndian::read_u32(&bytes[0..4]),
        LittleEndian::read_u32(&bytes[4..8]),
    )
}

/// Encodes a record into 8 bytes (big-endian address, big-endian timestamp).
#[inline]
pub fn encode_record(event: &Event) -> [u8; RECORD_SIZE] {
    let mut bytes = [0u8; RECORD_SIZE];
    BigEndian::write_u32(&mut bytes[0..4], event.address);
    BigEndian::write_u32(&mut bytes[4..8], event.timestamp);
    bytes
}

/// Reads and decodes one record.
///
/// A short read surfaces as an error of kind [`io::ErrorKind::UnexpectedEof`];
/// no bytes are fabricated for a partial record.
#[inline]
pub fn read_record<R: Read>(reader: &mut R) -> io::Result<Event> {
    let mut bytes = [0u8; RECORD_SIZE];
    reader.read_exact(&mut bytes)?;
    Ok(decode_record(&bytes))
}

/// Encodes and writes one record.
#[inline]
pub fn write_record<W: Write>(writer: &mut W, event: &Event) -> io::Result<()> {
    writer.write_all(&encode_record(event))
}
