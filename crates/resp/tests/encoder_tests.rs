//! Integration tests for the request encoder

use std::io::Cursor;

use bytes::Bytes;
use resp::Arg;
use resp::RespEncoder;
use resp::RespValue;
use rstest::rstest;

fn text_args(args: &[&str]) -> Vec<Arg> {
	args.iter().map(|s| Arg::from(*s)).collect()
}

#[rstest]
#[case(&["GET", "key"], b"*2\r\n$3\r\nGET\r\n$3\r\nkey\r\n")]
#[case(&["SET", "key", "value"], b"*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n$5\r\nvalue\r\n")]
#[case(&["INCR", "counter"], b"*2\r\n$4\r\nINCR\r\n$7\r\ncounter\r\n")]
#[case(
	&["LPUSH", "list", "value1", "value2"],
	b"*4\r\n$5\r\nLPUSH\r\n$4\r\nlist\r\n$6\r\nvalue1\r\n$6\r\nvalue2\r\n"
)]
fn test_encode_commands(#[case] args: &[&str], #[case] expected: &[u8]) {
	let encoded = resp::encode(&text_args(args)).unwrap();
	assert_eq!(&encoded[..], expected);
}

#[test]
fn test_encode_mixed_argument_types() {
	let args = vec![
		Arg::from("CMD"),
		Arg::from(7i32),
		Arg::from(7u16),
		Arg::from(7i64),
		Arg::from(1.5f64),
		Arg::from(false),
		Arg::from(&b"raw"[..]),
		Arg::Null,
	];
	let encoded = args.encode().unwrap();
	assert_eq!(
		&encoded[..],
		b"*8\r\n$3\r\nCMD\r\n:7\r\n:7\r\n$1\r\n7\r\n+1.5\r\n+false\r\n$3\r\nraw\r\n$-1\r\n"
	);
}

#[test]
fn test_encode_nested_list() {
	let args = vec![
		Arg::from("RPUSH"),
		Arg::List(vec![Arg::from("a"), Arg::from(1i64)]),
	];
	let encoded = resp::encode(&args).unwrap();
	assert_eq!(
		&encoded[..],
		b"*2\r\n$5\r\nRPUSH\r\n*2\r\n*1\r\n$1\r\na\r\n*1\r\n$1\r\n1\r\n"
	);
}

#[rstest]
#[case(&["PING"])]
#[case(&["SET", "key", "value with spaces"])]
#[case(&["SET", "crlf", "line1\r\nline2"])]
#[case(&["ECHO", ""])]
fn test_roundtrip_text_arguments(#[case] args: &[&str]) {
	let encoded = resp::encode(&text_args(args)).unwrap();
	let decoded = resp::decode(&mut Cursor::new(&encoded[..])).unwrap();

	let expected = RespValue::array(args.iter().map(|s| RespValue::bulk_string(s.to_string())));
	assert_eq!(decoded, expected);
}

#[test]
fn test_roundtrip_binary_argument() {
	let data: Vec<u8> = (0..=255).collect();
	let encoded = resp::encode(&[Arg::from("SET"), Arg::from(data.clone())]).unwrap();
	let mut reader = Cursor::new(&encoded[..]);
	let decoded = resp::decode(&mut reader).unwrap();

	let elements = decoded.into_vec().unwrap();
	assert_eq!(elements[1].as_bytes(), Some(&Bytes::from(data)));
	assert_eq!(reader.position() as usize, encoded.len());
}

#[test]
fn test_encode_large_bulk_string() {
	let data = "x".repeat(1024);
	let encoded = resp::encode(&[Arg::from(data.as_str())]).unwrap();
	assert!(encoded.starts_with(b"*1\r\n$1024\r\n"));
	assert_eq!(encoded.len(), 4 + 7 + 1024 + 2);
}
