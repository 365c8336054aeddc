//! Utility functions and constants for RESP protocol.

use std::io;
use std::io::BufRead;

use memchr::memchr;

use crate::error::DecodeError;

/// CRLF line ending
pub const CRLF: &[u8] = b"\r\n";

pub const LF: u8 = b'\n';

/// Type markers
pub const SIMPLE_STRING: u8 = b'+';
pub const ERROR: u8 = b'-';
pub const INTEGER: u8 = b':';
pub const BULK_STRING: u8 = b'$';
pub const ARRAY: u8 = b'*';

/// Length sentinel for null bulk strings and null arrays
pub const NULL_LENGTH: i64 = -1;

/// Read one line through its LF and return it without the CRLF.
///
/// The reader is advanced exactly past the LF, never further.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<Vec<u8>, DecodeError> {
	let mut line = Vec::new();
	loop {
		let (found, used) = {
			let available = match reader.fill_buf() {
				Ok(buf) => buf,
				Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
				Err(e) => return Err(e.into()),
			};
			if available.is_empty() {
				return Err(DecodeError::Truncated);
			}
			match memchr(LF, available) {
				Some(pos) => {
					line.extend_from_slice(&available[..=pos]);
					(true, pos + 1)
				}
				None => {
					line.extend_from_slice(available);
					(false, available.len())
				}
			}
		};
		reader.consume(used);
		if found {
			break;
		}
	}

	if !line.ends_with(CRLF) {
		return Err(DecodeError::MissingCrlf);
	}
	line.truncate(line.len() - CRLF.len());
	Ok(line)
}

/// Read a single byte, treating end of stream as truncation.
pub fn read_byte<R: BufRead>(reader: &mut R) -> Result<u8, DecodeError> {
	let mut byte = [0u8; 1];
	reader.read_exact(&mut byte)?;
	Ok(byte[0])
}

/// Parse an integer from a byte slice
#[inline]
pub fn parse_integer(buf: &[u8]) -> Result<i64, DecodeError> {
	let s = std::str::from_utf8(buf)?;
	Ok(s.parse::<i64>()?)
}
