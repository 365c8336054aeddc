use std::io;
use std::process::ExitCode;

use client::Client;
use redwire::args::to_args;
use redwire::config;
use redwire::config::Cli;
use redwire::config::Parser;
use redwire::render::render;
use redwire::repl;
use tracing::debug;
use tracing::info;

fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
	let cli = Cli::parse();
	let settings = config::load(&cli)?;
	telemetry::init(&settings.log_level)?;

	let addr = settings.addr();
	let mut client = Client::with_config(&settings.client_config())?;
	info!("Connected to {}", addr);

	if cli.args.is_empty() {
		let stdin = io::stdin();
		repl::run(&mut client, stdin.lock(), &mut io::stdout(), &addr, cli.json)?;
		client.close()?;
		return Ok(ExitCode::SUCCESS);
	}

	let args = to_args(&cli.args, cli.json)?;
	debug!(command = %cli.args[0], "Executing command");

	let code = match client.send_command(&args) {
		Ok(reply) => {
			println!("{}", render(&reply));
			ExitCode::SUCCESS
		}
		Err(e) => match e.server_message() {
			Some(msg) => {
				println!("(error) {msg}");
				ExitCode::FAILURE
			}
			None => return Err(e.into()),
		},
	};

	client.close()?;
	Ok(code)
}
