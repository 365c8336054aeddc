use resp::Arg;
use resp::EncodeError;
use serde_json::Value;

/// Turn command line words into request arguments.
///
/// In JSON mode a word that parses as JSON keeps its JSON type, so `100` is
/// sent as an integer and `[1,2]` as a nested list. Words that are not JSON,
/// such as bare command names, are sent as text either way.
pub fn to_args<S: AsRef<str>>(words: &[S], json: bool) -> Result<Vec<Arg>, EncodeError> {
	words
		.iter()
		.map(|word| {
			let word = word.as_ref();
			if !json {
				return Ok(Arg::from(word));
			}
			match serde_json::from_str::<Value>(word) {
				Ok(value) => Arg::try_from(value),
				Err(_) => Ok(Arg::from(word)),
			}
		})
		.collect()
}

/// Split an interactive input line on whitespace.
///
/// Quoting is not interpreted: `SET k "a b"` yields four words.
pub fn split_line(line: &str) -> Vec<&str> {
	line.split_whitespace().collect()
}
