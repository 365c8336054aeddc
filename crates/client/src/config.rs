use std::time::Duration;

/// Connection settings for [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
	/// Server address, `host:port`
	pub addr: String,
	/// Socket read timeout, `None` blocks indefinitely
	pub read_timeout: Option<Duration>,
	/// Socket write timeout, `None` blocks indefinitely
	pub write_timeout: Option<Duration>,
	/// Deepest array nesting accepted in a reply
	pub max_depth: usize,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			addr: "127.0.0.1:6379".into(),
			read_timeout: None,
			write_timeout: None,
			max_depth: resp::DEFAULT_MAX_DEPTH,
		}
	}
}

impl ClientConfig {
	pub fn new(addr: impl Into<String>) -> Self {
		Self {
			addr: addr.into(),
			..Self::default()
		}
	}
}
