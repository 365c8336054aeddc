//! # RESP - Redis Serialization Protocol codec
//!
//! A small, blocking RESP codec for clients: it turns an ordered list of
//! arguments into a request frame and reads exactly one reply frame back from
//! a buffered reader.
//!
//! ## Features
//!
//! - **Closed argument type**: [`Arg`] fixes the wire rule of every argument
//!   at compile time
//! - **Typed replies**: [`RespValue`] with distinct null bulk strings and null
//!   arrays, server errors surfaced as [`DecodeError::Server`]
//! - **Exact consumption**: the decoder never reads past the reply it returns
//! - **Bounded nesting**: deeply nested arrays fail instead of exhausting the
//!   stack
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use resp::Arg;
//! use resp::RespValue;
//!
//! let request = resp::encode(&[Arg::from("SET"), Arg::from("key"), Arg::from("value")]).unwrap();
//! assert_eq!(&request[..], b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n");
//!
//! let mut reply = Cursor::new(&b"$5\r\nvalue\r\n"[..]);
//! assert_eq!(resp::decode(&mut reply).unwrap(), RespValue::bulk_string("value"));
//! ```

mod arg;
mod decode;
mod encode;
mod error;
mod types;
mod utils;

pub use arg::Arg;
pub use decode::DEFAULT_MAX_DEPTH;
pub use decode::decode;
pub use decode::decode_with_max_depth;
pub use encode::RespEncoder;
pub use encode::encode;
pub use encode::encode_to;
pub use error::DecodeError;
pub use error::EncodeError;
pub use types::RespValue;
