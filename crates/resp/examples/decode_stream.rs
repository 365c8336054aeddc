use std::io::BufReader;

use resp::Arg;
use resp::DecodeError;

fn main() {
	println!("--- RESP Request/Reply Example ---");

	let request = resp::encode(&[Arg::from("DECRBY"), Arg::from("num"), Arg::from(100i64)])
		.expect("encoding text and integer arguments cannot fail");
	println!("[Encoder] {:?}", String::from_utf8_lossy(&request));

	// Several replies back to back, as they would sit in a socket buffer
	let replies: &[u8] = b"+OK\r\n:-100\r\n$5\r\nhello\r\n*2\r\n$1\r\na\r\n$-1\r\n-ERR no such key\r\n";
	let mut reader = BufReader::with_capacity(8, replies);

	loop {
		match resp::decode(&mut reader) {
			Ok(value) => println!("[Decoder] Value: {:?}", value),
			Err(DecodeError::Server(msg)) => println!("[Decoder] Server error: {}", msg),
			Err(DecodeError::Truncated) => {
				println!("[Decoder] End of stream");
				break;
			}
			Err(e) => {
				eprintln!("[Decoder] Error: {}", e);
				break;
			}
		}
	}
}
