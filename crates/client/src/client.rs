use std::io::BufReader;
use std::io::ErrorKind;
use std::io::Write;
use std::net::Shutdown;
use std::net::TcpStream;

use bytes::Bytes;
use log::debug;
use log::trace;
use resp::Arg;
use resp::RespValue;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// A single blocking connection to a Redis-compatible server.
pub struct Client {
	writer: TcpStream,
	reader: BufReader<TcpStream>,
	max_depth: usize,
}

impl Client {
	/// Connect to `addr` with default settings.
	pub fn connect(addr: impl Into<String>) -> Result<Self, ClientError> {
		Self::with_config(&ClientConfig::new(addr))
	}

	pub fn with_config(config: &ClientConfig) -> Result<Self, ClientError> {
		let stream = TcpStream::connect(config.addr.as_str())?;
		stream.set_read_timeout(config.read_timeout)?;
		stream.set_write_timeout(config.write_timeout)?;
		stream.set_nodelay(true)?;
		debug!("Connected to {}", config.addr);

		Ok(Self {
			reader: BufReader::new(stream.try_clone()?),
			writer: stream,
			max_depth: config.max_depth,
		})
	}

	/// Shut the connection down in both directions.
	pub fn close(self) -> Result<(), ClientError> {
		match self.writer.shutdown(Shutdown::Both) {
			Ok(()) => Ok(()),
			// The server already went away
			Err(e) if e.kind() == ErrorKind::NotConnected => Ok(()),
			Err(e) => Err(e.into()),
		}
	}

	/// Send one command and read its reply.
	///
	/// `args` holds the command name followed by its arguments.
	pub fn send_command(&mut self, args: &[Arg]) -> Result<RespValue, ClientError> {
		let request = resp::encode(args)?;
		debug!("Sending {} bytes", request.len());
		trace!("Request: {:?}", String::from_utf8_lossy(&request));

		self.writer.write_all(&request)?;
		self.writer.flush()?;

		let reply = resp::decode_with_max_depth(&mut self.reader, self.max_depth)?;
		debug!("Reply: {:?}", reply);
		Ok(reply)
	}

	pub fn ping(&mut self) -> Result<String, ClientError> {
		let reply = self.send_command(&["PING".into()])?;
		expect_text("PING", reply)
	}

	/// Append `value` to `key`, returning the new length.
	pub fn append(&mut self, key: &str, value: &str) -> Result<i64, ClientError> {
		let reply = self.send_command(&["APPEND".into(), key.into(), value.into()])?;
		expect_integer("APPEND", reply)
	}

	pub fn decr(&mut self, key: &str) -> Result<i64, ClientError> {
		let reply = self.send_command(&["DECR".into(), key.into()])?;
		expect_integer("DECR", reply)
	}

	pub fn decr_by(&mut self, key: &str, decrement: i64) -> Result<i64, ClientError> {
		let reply = self.send_command(&["DECRBY".into(), key.into(), decrement.into()])?;
		expect_integer("DECRBY", reply)
	}

	pub fn incr(&mut self, key: &str) -> Result<i64, ClientError> {
		let reply = self.send_command(&["INCR".into(), key.into()])?;
		expect_integer("INCR", reply)
	}

	pub fn incr_by(&mut self, key: &str, increment: i64) -> Result<i64, ClientError> {
		let reply = self.send_command(&["INCRBY".into(), key.into(), increment.into()])?;
		expect_integer("INCRBY", reply)
	}

	/// Delete `keys`, returning how many existed.
	pub fn del<K: Into<Arg>>(
		&mut self,
		keys: impl IntoIterator<Item = K>,
	) -> Result<i64, ClientError> {
		let mut args = vec![Arg::from("DEL")];
		args.extend(keys.into_iter().map(Into::into));
		let reply = self.send_command(&args)?;
		expect_integer("DEL", reply)
	}

	/// Get the value of `key`, `None` if it does not exist.
	pub fn get(&mut self, key: &str) -> Result<Option<String>, ClientError> {
		match self.send_command(&["GET".into(), key.into()])? {
			RespValue::BulkString(None) => Ok(None),
			reply => expect_text("GET", reply).map(Some),
		}
	}

	pub fn set(&mut self, key: &str, value: impl Into<Arg>) -> Result<(), ClientError> {
		let reply = self.send_command(&["SET".into(), key.into(), value.into()])?;
		match reply {
			RespValue::SimpleString(ref s) if s.as_ref() == b"OK" => Ok(()),
			reply => Err(ClientError::UnexpectedReply {
				command: "SET",
				reply,
			}),
		}
	}
}

fn expect_integer(command: &'static str, reply: RespValue) -> Result<i64, ClientError> {
	match reply {
		RespValue::Integer(n) => Ok(n),
		reply => Err(ClientError::UnexpectedReply { command, reply }),
	}
}

fn expect_text(command: &'static str, reply: RespValue) -> Result<String, ClientError> {
	match reply {
		RespValue::SimpleString(s) | RespValue::BulkString(Some(s)) => into_string(s),
		reply => Err(ClientError::UnexpectedReply { command, reply }),
	}
}

fn into_string(bytes: Bytes) -> Result<String, ClientError> {
	String::from_utf8(bytes.to_vec()).map_err(|_| ClientError::InvalidUtf8)
}
