//! Blocking RESP reply decoder.
//!
//! Decoding is a single depth-first pass driven by the lengths declared on
//! the wire. There is no parser object: the only state is the reader's
//! position and the recursion depth.

use std::io::BufRead;
use std::io::Read;

use bytes::Bytes;

use crate::error::DecodeError;
use crate::types::RespValue;
use crate::utils::*;

/// Array nesting accepted by [`decode`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Upper bound on the capacity reserved up front for an array, whatever
/// length it declares.
const MAX_PREALLOC: usize = 1024;

/// Decode exactly one RESP value from `reader`.
///
/// The reader is advanced by the bytes of that value and no further. Error
/// replies come back as [`DecodeError::Server`].
///
/// ```rust
/// use std::io::Cursor;
///
/// let mut reader = Cursor::new(&b"+OK\r\n"[..]);
/// let value = resp::decode(&mut reader).unwrap();
/// assert_eq!(value.as_str(), Some("OK"));
/// ```
pub fn decode<R: BufRead>(reader: &mut R) -> Result<RespValue, DecodeError> {
	decode_with_max_depth(reader, DEFAULT_MAX_DEPTH)
}

/// Like [`decode`], failing with [`DecodeError::NestingTooDeep`] once arrays
/// nest more than `max_depth` levels.
pub fn decode_with_max_depth<R: BufRead>(
	reader: &mut R,
	max_depth: usize,
) -> Result<RespValue, DecodeError> {
	decode_value(reader, 0, max_depth)
}

fn decode_value<R: BufRead>(
	reader: &mut R,
	depth: usize,
	max_depth: usize,
) -> Result<RespValue, DecodeError> {
	match read_byte(reader)? {
		SIMPLE_STRING => decode_simple_string(reader),
		ERROR => decode_error(reader),
		INTEGER => decode_integer(reader),
		BULK_STRING => decode_bulk_string(reader),
		ARRAY => decode_array(reader, depth, max_depth),
		prefix => Err(DecodeError::InvalidPrefix(prefix)),
	}
}

fn decode_simple_string<R: BufRead>(reader: &mut R) -> Result<RespValue, DecodeError> {
	let line = read_line(reader)?;
	Ok(RespValue::SimpleString(Bytes::from(line)))
}

fn decode_error<R: BufRead>(reader: &mut R) -> Result<RespValue, DecodeError> {
	let line = read_line(reader)?;
	Err(DecodeError::Server(
		String::from_utf8_lossy(&line).into_owned(),
	))
}

fn decode_integer<R: BufRead>(reader: &mut R) -> Result<RespValue, DecodeError> {
	let line = read_line(reader)?;
	Ok(RespValue::Integer(parse_integer(&line)?))
}

/// Read a length line, mapping `-1` to `None`.
fn read_length<R: BufRead>(reader: &mut R) -> Result<Option<usize>, DecodeError> {
	let length = parse_integer(&read_line(reader)?)?;
	if length == NULL_LENGTH {
		return Ok(None);
	}
	usize::try_from(length)
		.map(Some)
		.map_err(|_| DecodeError::InvalidLength(length))
}

fn decode_bulk_string<R: BufRead>(reader: &mut R) -> Result<RespValue, DecodeError> {
	// $6\r\nfoobar\r\n
	let length = match read_length(reader)? {
		None => return Ok(RespValue::BulkString(None)),
		Some(0) => return Ok(RespValue::BulkString(Some(Bytes::new()))),
		Some(length) => length,
	};

	let total = length
		.checked_add(CRLF.len())
		.ok_or(DecodeError::InvalidLength(i64::MAX))?;

	// Grow with the data actually received instead of trusting the length
	let mut data = Vec::new();
	reader.by_ref().take(total as u64).read_to_end(&mut data)?;
	if data.len() < total {
		return Err(DecodeError::Truncated);
	}

	// The trailing two bytes are the terminator and are not inspected
	data.truncate(length);
	Ok(RespValue::BulkString(Some(Bytes::from(data))))
}

fn decode_array<R: BufRead>(
	reader: &mut R,
	depth: usize,
	max_depth: usize,
) -> Result<RespValue, DecodeError> {
	let length = match read_length(reader)? {
		None => return Ok(RespValue::Array(None)),
		Some(length) => length,
	};

	if depth >= max_depth {
		return Err(DecodeError::NestingTooDeep(max_depth));
	}

	let mut elements = Vec::with_capacity(length.min(MAX_PREALLOC));
	for _ in 0..length {
		elements.push(decode_value(reader, depth + 1, max_depth)?);
	}
	Ok(RespValue::Array(Some(elements)))
}
