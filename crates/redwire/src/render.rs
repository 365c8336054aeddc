//! redis-cli style rendering of replies.

use resp::RespValue;

/// Render `value` the way `redis-cli` prints it on a terminal.
pub fn render(value: &RespValue) -> String {
	let mut out = String::new();
	render_into(&mut out, value, 0);
	out
}

fn render_into(out: &mut String, value: &RespValue, indent: usize) {
	match value {
		RespValue::SimpleString(s) => out.push_str(&String::from_utf8_lossy(s)),
		RespValue::Integer(n) => out.push_str(&format!("(integer) {n}")),
		RespValue::BulkString(Some(s)) => out.push_str(&format!("\"{}\"", s.escape_ascii())),
		RespValue::BulkString(None) | RespValue::Array(None) => out.push_str("(nil)"),
		RespValue::Array(Some(items)) if items.is_empty() => out.push_str("(empty array)"),
		RespValue::Array(Some(items)) => {
			let width = items.len().to_string().len();
			for (i, item) in items.iter().enumerate() {
				if i > 0 {
					out.push('\n');
					out.push_str(&" ".repeat(indent));
				}
				let label = format!("{:>width$}) ", i + 1);
				out.push_str(&label);
				render_into(out, item, indent + label.len());
			}
		}
	}
}
