//! Interactive session: one command per input line.

use std::io::BufRead;
use std::io::Write;

use client::Client;
use client::ClientError;
use tracing::debug;

use crate::args::split_line;
use crate::args::to_args;
use crate::render::render;

/// Read commands from `input` until it ends or `quit` is entered, writing
/// each reply to `out`.
///
/// Server errors and arguments that cannot be sent are printed and the
/// session goes on. Connection failures end it.
pub fn run<R: BufRead, W: Write>(
	client: &mut Client,
	input: R,
	out: &mut W,
	prompt: &str,
	json: bool,
) -> Result<(), ClientError> {
	write!(out, "{prompt}> ")?;
	out.flush()?;

	for line in input.lines() {
		let line = line?;
		let words = split_line(&line);

		match words.as_slice() {
			[] => {}
			[cmd] if cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("exit") => {
				break;
			}
			[cmd, level] if cmd.eq_ignore_ascii_case(":loglevel") => {
				match telemetry::reload_log_level(level) {
					Ok(()) => writeln!(out, "OK")?,
					Err(e) => writeln!(out, "(error) {e}")?,
				}
			}
			_ => execute(client, &words, out, json)?,
		}

		write!(out, "{prompt}> ")?;
		out.flush()?;
	}

	writeln!(out)?;
	Ok(())
}

fn execute<W: Write>(
	client: &mut Client,
	words: &[&str],
	out: &mut W,
	json: bool,
) -> Result<(), ClientError> {
	let args = match to_args(words, json) {
		Ok(args) => args,
		Err(e) => {
			writeln!(out, "(error) {e}")?;
			return Ok(());
		}
	};

	debug!(command = words[0], args = words.len() - 1, "Executing command");
	match client.send_command(&args) {
		Ok(reply) => writeln!(out, "{}", render(&reply))?,
		Err(e) => match e.server_message() {
			Some(msg) => writeln!(out, "(error) {msg}")?,
			None => return Err(e),
		},
	}
	Ok(())
}
