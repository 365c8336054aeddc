use resp::DecodeError;
use resp::EncodeError;
use resp::RespValue;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Encode error: {0}")]
	Encode(#[from] EncodeError),

	#[error("Decode error: {0}")]
	Decode(#[from] DecodeError),

	/// The reply does not have the shape the command returns
	#[error("Unexpected reply to {command}: {reply:?}")]
	UnexpectedReply {
		command: &'static str,
		reply: RespValue,
	},

	#[error("Reply is not valid UTF-8")]
	InvalidUtf8,
}

impl ClientError {
	/// Returns the server's message if the command failed with an error reply.
	pub fn server_message(&self) -> Option<&str> {
		match self {
			ClientError::Decode(e) => e.server_message(),
			_ => None,
		}
	}
}
