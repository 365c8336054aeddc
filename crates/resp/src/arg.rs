//! Request arguments.

use bytes::Bytes;
use serde_json::Value;

use crate::error::EncodeError;

/// One argument of a request, classified by how it goes on the wire.
///
/// The mapping follows the framing of the original client byte for byte:
/// `i64` travels as a bulk string while the other integer widths use the
/// `:` line, and floats and booleans use the `+` line.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
	/// `i8`, `i16`, `i32` or `isize`, sent as `:<n>\r\n`
	SignedInt(i64),

	/// `u8` through `u64` or `usize`, sent as `:<n>\r\n`
	UnsignedInt(u64),

	/// `i64`, sent as the bulk string of its decimal text
	Int64(i64),

	/// Sent as `+<value>\r\n`
	Float(f64),

	/// Sent as `+true\r\n` or `+false\r\n`
	Bool(bool),

	Text(String),

	Bytes(Bytes),

	/// Sent as `$-1\r\n`
	Null,

	/// Sent as a sub-array of independently framed elements
	List(Vec<Arg>),
}

impl Arg {
	/// Create a list argument from an iterator
	pub fn list<T: Into<Arg>>(items: impl IntoIterator<Item = T>) -> Self {
		Arg::List(items.into_iter().map(Into::into).collect())
	}
}

macro_rules! impl_from_int {
	($variant:ident, $target:ty, $($t:ty),+) => {
		$(
			impl From<$t> for Arg {
				fn from(n: $t) -> Self {
					Arg::$variant(n as $target)
				}
			}
		)+
	};
}

impl_from_int!(SignedInt, i64, i8, i16, i32, isize);
impl_from_int!(UnsignedInt, u64, u8, u16, u32, usize);

impl From<u64> for Arg {
	fn from(n: u64) -> Self {
		Arg::UnsignedInt(n)
	}
}

impl From<i64> for Arg {
	fn from(n: i64) -> Self {
		Arg::Int64(n)
	}
}

impl From<f64> for Arg {
	fn from(d: f64) -> Self {
		Arg::Float(d)
	}
}

impl From<f32> for Arg {
	fn from(d: f32) -> Self {
		// Widen through the shortest decimal form so 0.1f32 renders as 0.1
		Arg::Float(d.to_string().parse().unwrap_or(f64::from(d)))
	}
}

impl From<bool> for Arg {
	fn from(b: bool) -> Self {
		Arg::Bool(b)
	}
}

impl From<&str> for Arg {
	fn from(s: &str) -> Self {
		Arg::Text(s.to_string())
	}
}

impl From<String> for Arg {
	fn from(s: String) -> Self {
		Arg::Text(s)
	}
}

impl From<&String> for Arg {
	fn from(s: &String) -> Self {
		Arg::Text(s.clone())
	}
}

impl From<&[u8]> for Arg {
	fn from(b: &[u8]) -> Self {
		Arg::Bytes(Bytes::copy_from_slice(b))
	}
}

impl From<Vec<u8>> for Arg {
	fn from(v: Vec<u8>) -> Self {
		Arg::Bytes(Bytes::from(v))
	}
}

impl From<Bytes> for Arg {
	fn from(b: Bytes) -> Self {
		Arg::Bytes(b)
	}
}

impl From<Vec<Arg>> for Arg {
	fn from(v: Vec<Arg>) -> Self {
		Arg::List(v)
	}
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
	fn from(o: Option<T>) -> Self {
		match o {
			Some(v) => v.into(),
			None => Arg::Null,
		}
	}
}

impl TryFrom<Value> for Arg {
	type Error = EncodeError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::Null => Ok(Arg::Null),
			Value::Bool(b) => Ok(Arg::Bool(b)),
			Value::Number(n) => {
				if let Some(i) = n.as_i64() {
					Ok(Arg::Int64(i))
				} else if let Some(u) = n.as_u64() {
					Ok(Arg::UnsignedInt(u))
				} else {
					n.as_f64()
						.map(Arg::Float)
						.ok_or_else(|| EncodeError::UnsupportedType(format!("number {n}")))
				}
			}
			Value::String(s) => Ok(Arg::Text(s)),
			Value::Array(items) => items
				.into_iter()
				.map(Arg::try_from)
				.collect::<Result<Vec<_>, _>>()
				.map(Arg::List),
			Value::Object(_) => Err(EncodeError::UnsupportedType("object".to_string())),
		}
	}
}
