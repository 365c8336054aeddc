//! Blocking Redis client.
//!
//! Every command is one round trip: encode the arguments, write them, then
//! decode exactly one reply. Methods take `&mut self`, so a [`Client`] can
//! never have two requests in flight.
//!
//! ```no_run
//! use client::Client;
//!
//! let mut client = Client::connect("127.0.0.1:6379")?;
//! client.del(["num"])?;
//! let value = client.decr_by("num", 100)?;
//! assert_eq!(value, -100);
//! client.close()?;
//! # Ok::<(), client::ClientError>(())
//! ```

mod client;
mod config;
mod error;

pub use client::Client;
pub use config::ClientConfig;
pub use error::ClientError;
pub use resp::Arg;
pub use resp::RespValue;
