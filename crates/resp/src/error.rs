//! Error types for RESP encoding and decoding.

use thiserror::Error;

/// Errors that can occur while building a request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
	/// The argument has no wire mapping
	#[error("unsupported type: {0}")]
	UnsupportedType(String),
}

/// Errors that can occur while decoding a reply.
#[derive(Error, Debug)]
pub enum DecodeError {
	/// Leading byte is not one of `+ - : $ *`
	#[error("invalid prefix: {:?}", *.0 as char)]
	InvalidPrefix(u8),

	/// A line ended with a bare LF
	#[error("line is not terminated by CRLF")]
	MissingCrlf,

	/// The stream ended before the frame was complete
	#[error("unexpected end of stream")]
	Truncated,

	#[error("I/O error: {0}")]
	Io(#[source] std::io::Error),

	/// Length or integer field is not a base-10 i64
	#[error("invalid integer: {0}")]
	InvalidInteger(String),

	/// Negative length other than the `-1` null sentinel
	#[error("invalid length: {0}")]
	InvalidLength(i64),

	/// The server answered with an error reply
	#[error("{0}")]
	Server(String),

	/// Arrays nested deeper than the configured bound
	#[error("nesting too deep: more than {0} levels")]
	NestingTooDeep(usize),
}

impl DecodeError {
	/// Returns the server-supplied message if this is an error reply.
	pub fn server_message(&self) -> Option<&str> {
		match self {
			DecodeError::Server(msg) => Some(msg),
			_ => None,
		}
	}
}

impl From<std::io::Error> for DecodeError {
	fn from(e: std::io::Error) -> Self {
		if e.kind() == std::io::ErrorKind::UnexpectedEof {
			DecodeError::Truncated
		} else {
			DecodeError::Io(e)
		}
	}
}

impl From<std::str::Utf8Error> for DecodeError {
	fn from(e: std::str::Utf8Error) -> Self {
		DecodeError::InvalidInteger(e.to_string())
	}
}

impl From<std::num::ParseIntError> for DecodeError {
	fn from(e: std::num::ParseIntError) -> Self {
		DecodeError::InvalidInteger(e.to_string())
	}
}
