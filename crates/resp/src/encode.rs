use bytes::BufMut;
use bytes::Bytes;
use bytes::BytesMut;

use crate::arg::Arg;
use crate::error::EncodeError;
use crate::utils::*;

/// Trait for encoding request arguments.
///
/// A slice of arguments encodes as a complete request, a single [`Arg`]
/// encodes as one element of a request.
pub trait RespEncoder {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError>;

	fn encode(&self) -> Result<Bytes, EncodeError> {
		let mut buf = BytesMut::new();
		self.encode_to(&mut buf)?;
		Ok(buf.freeze())
	}
}

impl RespEncoder for [Arg] {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
		encode_length(buf, ARRAY, self.len());
		for arg in self {
			arg.encode_to(buf)?;
		}
		Ok(())
	}
}

impl RespEncoder for Arg {
	fn encode_to(&self, buf: &mut BytesMut) -> Result<(), EncodeError> {
		match self {
			Arg::SignedInt(n) => encode_line(buf, INTEGER, n.to_string().as_bytes()),
			Arg::UnsignedInt(n) => encode_line(buf, INTEGER, n.to_string().as_bytes()),
			Arg::Int64(n) => encode_bulk_string(buf, n.to_string().as_bytes()),
			Arg::Float(d) => encode_line(buf, SIMPLE_STRING, d.to_string().as_bytes()),
			Arg::Bool(b) => {
				let text: &[u8] = if *b { b"true" } else { b"false" };
				encode_line(buf, SIMPLE_STRING, text)
			}
			Arg::Text(s) => encode_bulk_string(buf, s.as_bytes()),
			Arg::Bytes(b) => encode_bulk_string(buf, b),
			Arg::Null => encode_null(buf),
			Arg::List(items) => encode_list(buf, items)?,
		}
		Ok(())
	}
}

/// Encode `args` as one request array.
///
/// ```rust
/// use resp::Arg;
///
/// let request = resp::encode(&[Arg::from("GET"), Arg::from("key")]).unwrap();
/// assert_eq!(&request[..], b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n");
/// ```
pub fn encode(args: &[Arg]) -> Result<Bytes, EncodeError> {
	args.encode()
}

/// Append the request for `args` to `buf`.
pub fn encode_to(buf: &mut BytesMut, args: &[Arg]) -> Result<(), EncodeError> {
	args.encode_to(buf)
}

#[inline]
fn encode_line(buf: &mut BytesMut, marker: u8, line: &[u8]) {
	buf.put_u8(marker);
	buf.put_slice(line);
	buf.put_slice(CRLF);
}

#[inline]
fn encode_length(buf: &mut BytesMut, marker: u8, length: usize) {
	encode_line(buf, marker, length.to_string().as_bytes());
}

#[inline]
fn encode_bulk_string(buf: &mut BytesMut, s: &[u8]) {
	encode_length(buf, BULK_STRING, s.len());
	buf.put_slice(s);
	buf.put_slice(CRLF);
}

#[inline]
fn encode_null(buf: &mut BytesMut) {
	encode_line(buf, BULK_STRING, NULL_LENGTH.to_string().as_bytes());
}

// Each element is framed as its own one-element request.
fn encode_list(buf: &mut BytesMut, items: &[Arg]) -> Result<(), EncodeError> {
	encode_length(buf, ARRAY, items.len());
	for item in items {
		std::slice::from_ref(item).encode_to(buf)?;
	}
	Ok(())
}
