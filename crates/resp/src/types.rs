//! RESP reply values.

use bytes::Bytes;

/// A decoded RESP reply.
///
/// Error replies never appear here: the decoder surfaces them as
/// [`DecodeError::Server`](crate::DecodeError::Server).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RespValue {
	/// Simple string: `+OK\r\n`
	SimpleString(Bytes),

	/// Integer: `:1000\r\n`
	Integer(i64),

	/// Bulk string: `$6\r\nfoobar\r\n`, or `$-1\r\n` for `None`
	BulkString(Option<Bytes>),

	/// Array: `*2\r\n$3\r\nfoo\r\n$3\r\nbar\r\n`, or `*-1\r\n` for `None`
	Array(Option<Vec<RespValue>>),
}

impl RespValue {
	/// `true` for `$-1` and `*-1`
	pub fn is_null(&self) -> bool {
		matches!(self, RespValue::BulkString(None) | RespValue::Array(None))
	}

	/// Text of a simple or non-null bulk string, if it is valid UTF-8
	pub fn as_str(&self) -> Option<&str> {
		self.as_bytes().and_then(|b| std::str::from_utf8(b).ok())
	}

	/// Payload of a simple or non-null bulk string
	pub fn as_bytes(&self) -> Option<&Bytes> {
		match self {
			RespValue::SimpleString(b) | RespValue::BulkString(Some(b)) => Some(b),
			_ => None,
		}
	}

		pub fn as_integer(&self) -> Option<i64> {
		match self {
			RespValue::Integer(i) => Some(*i),
			_ => None,
		}
	}

	/// Elements of a non-null array
	pub fn as_array(&self) -> Option<&[RespValue]> {
		match self {
			RespValue::Array(Some(a)) => Some(a.as_slice()),
			_ => None,
		}
	}

	/// Like [`as_str`](Self::as_str), replacing invalid UTF-8
	pub fn to_string_lossy(&self) -> Option<String> {
		self.as_bytes()
			.map(|b| String::from_utf8_lossy(b).into_owned())
	}

	/// Take the elements of a non-null array
	pub fn into_vec(self) -> Option<Vec<RespValue>> {
		match self {
			RespValue::Array(a) => a,
			_ => None,
		}
	}

	pub fn simple_string(s: impl Into<Bytes>) -> Self {
		RespValue::SimpleString(s.into())
	}

	pub fn bulk_string(s: impl Into<Bytes>) -> Self {
		RespValue::BulkString(Some(s.into()))
	}

	pub fn integer(i: i64) -> Self {
		RespValue::Integer(i)
	}

	pub fn array(items: impl IntoIterator<Item = RespValue>) -> Self {
		RespValue::Array(Some(items.into_iter().collect()))
	}

	pub fn null_bulk() -> Self {
		RespValue::BulkString(None)
	}

	pub fn null_array() -> Self {
		RespValue::Array(None)
	}
}
