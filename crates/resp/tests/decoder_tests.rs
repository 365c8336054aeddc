//! Integration tests for the reply decoder

use std::io::BufReader;
use std::io::Cursor;
use std::io::Read;

use resp::DecodeError;
use resp::RespValue;
use rstest::rstest;

fn decode_bytes(input: &[u8]) -> Result<RespValue, DecodeError> {
	resp::decode(&mut Cursor::new(input))
}

#[rstest]
#[case(b"+OK\r\n", RespValue::simple_string("OK"))]
#[case(b":0\r\n", RespValue::integer(0))]
#[case(b":123\r\n", RespValue::integer(123))]
#[case(b":9223372036854775807\r\n", RespValue::integer(i64::MAX))]
#[case(b":-9223372036854775808\r\n", RespValue::integer(i64::MIN))]
#[case(b"$11\r\nhello world\r\n", RespValue::bulk_string("hello world"))]
#[case(b"$12\r\nhello\r\nworld\r\n", RespValue::bulk_string("hello\r\nworld"))]
#[case(b"$0\r\n", RespValue::bulk_string(""))]
#[case(b"$-1\r\n", RespValue::null_bulk())]
#[case(b"*-1\r\n", RespValue::null_array())]
fn test_decode_values(#[case] input: &[u8], #[case] expected: RespValue) {
	assert_eq!(decode_bytes(input).unwrap(), expected);
}

#[test]
fn test_decode_server_error() {
	let err = decode_bytes(b"-error message\r\n").unwrap_err();
	assert!(matches!(err, DecodeError::Server(ref msg) if msg == "error message"));
}

#[test]
fn test_decode_mixed_array() {
	let input = b"*9\r\n+OK\r\n:0\r\n:123\r\n:-9223372036854775808\r\n:9223372036854775807\r\n$11\r\nhello world\r\n$12\r\nhello\r\nworld\r\n$0\r\n$-1\r\n";
	let value = decode_bytes(input).unwrap();
	assert_eq!(
		value,
		RespValue::array(vec![
			RespValue::simple_string("OK"),
			RespValue::integer(0),
			RespValue::integer(123),
			RespValue::integer(i64::MIN),
			RespValue::integer(i64::MAX),
			RespValue::bulk_string("hello world"),
			RespValue::bulk_string("hello\r\nworld"),
			RespValue::bulk_string(""),
			RespValue::null_bulk(),
		])
	);
}

#[test]
fn test_decode_nested_arrays() {
	let value = decode_bytes(b"*2\r\n*2\r\n:1\r\n:2\r\n*-1\r\n").unwrap();
	assert_eq!(
		value,
		RespValue::array(vec![
			RespValue::array(vec![RespValue::integer(1), RespValue::integer(2)]),
			RespValue::null_array(),
		])
	);
}

#[test]
fn test_invalid_prefix_consumes_one_byte() {
	let mut reader = Cursor::new(&b"#t\r\n"[..]);
	let err = resp::decode(&mut reader).unwrap_err();
	assert!(matches!(err, DecodeError::InvalidPrefix(b'#')));
	assert_eq!(reader.position(), 1);
}

#[rstest]
#[case(b"$10\r\nshort\r\n")]
#[case(b"$5\r\nhello")]
#[case(b"+OK")]
#[case(b"*2\r\n:1\r\n")]
#[case(b":12")]
fn test_decode_truncated(#[case] input: &[u8]) {
	assert!(matches!(decode_bytes(input), Err(DecodeError::Truncated)));
}

#[test]
fn test_decode_bare_lf_rejected() {
	assert!(matches!(decode_bytes(b"+OK\n"), Err(DecodeError::MissingCrlf)));
}

#[test]
fn test_decode_consecutive_replies() {
	// A tiny buffer makes every frame span several refills
	let input = &b"+OK\r\n:1000\r\n$3\r\nfoo\r\n*1\r\n$3\r\nbar\r\nrest"[..];
	let mut reader = BufReader::with_capacity(3, input);

	assert_eq!(resp::decode(&mut reader).unwrap(), RespValue::simple_string("OK"));
	assert_eq!(resp::decode(&mut reader).unwrap(), RespValue::integer(1000));
	assert_eq!(resp::decode(&mut reader).unwrap(), RespValue::bulk_string("foo"));
	assert_eq!(
		resp::decode(&mut reader).unwrap(),
		RespValue::array(vec![RespValue::bulk_string("bar")])
	);

	let mut rest = String::new();
	reader.read_to_string(&mut rest).unwrap();
	assert_eq!(rest, "rest");
}

#[test]
fn test_decode_empty_bulk_leaves_following_bytes() {
	let mut reader = Cursor::new(&b"$0\r\n:5\r\n"[..]);
	assert_eq!(resp::decode(&mut reader).unwrap(), RespValue::bulk_string(""));
	assert_eq!(resp::decode(&mut reader).unwrap(), RespValue::integer(5));
}
