//! Configuration for the redwire command line client
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! a configuration file, and command line flags.
//!
//! # Example
//!
//! ```no_run
//! use redwire::config::{Cli, Parser, load};
//!
//! let args = Cli::parse();
//! let settings = load(&args).unwrap();
//! println!("Server address: {}:{}", settings.host, settings.port);
//! ```

use std::path::Path;
use std::time::Duration;

pub use clap::Parser;
use client::ClientConfig;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("Failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Failed to parse JSON configuration: {0}")]
	JsonParse(#[from] serde_json::Error),

	#[error("Failed to parse YAML configuration: {0}")]
	YamlParse(#[from] serde_yaml::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Configuration file has no extension")]
	NoExtension,
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Configuration file path (TOML, JSON, or YAML).
	/// Defaults to conf/redwire.toml if it exists.
	#[arg(short, long)]
	pub config: Option<String>,

	/// Server host
	#[arg(long)]
	pub host: Option<String>,

	/// Server port
	#[arg(short, long)]
	pub port: Option<u16>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Socket read timeout in milliseconds
	#[arg(long)]
	pub read_timeout_ms: Option<u64>,

	/// Send arguments that parse as JSON with their JSON type
	#[arg(long)]
	pub json: bool,

	/// Command and arguments. Starts an interactive session when empty.
	pub args: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
	pub host: String,
	pub port: u16,
	pub log_level: String,
	pub read_timeout_ms: Option<u64>,
	pub write_timeout_ms: Option<u64>,
	pub max_depth: usize,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".into(),
			port: 6379,
			log_level: "warn".into(),
			read_timeout_ms: None,
			write_timeout_ms: None,
			max_depth: resp::DEFAULT_MAX_DEPTH,
		}
	}
}

impl Settings {
	pub fn addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}

	pub fn client_config(&self) -> ClientConfig {
		ClientConfig {
			addr: self.addr(),
			read_timeout: self.read_timeout_ms.map(Duration::from_millis),
			write_timeout: self.write_timeout_ms.map(Duration::from_millis),
			max_depth: self.max_depth,
		}
	}
}

/// Resolve the settings for this run.
pub fn load(args: &Cli) -> Result<Settings, ConfigError> {
	let default_config = "conf/redwire.toml";
	let mut settings = match args.config.as_deref() {
		Some(p) => load_from_file(p)?,
		None if Path::new(default_config).exists() => load_from_file(default_config)?,
		None => Settings::default(),
	};

	// Override with CLI arguments if explicitly provided
	if let Some(host) = &args.host {
		settings.host = host.clone();
	}
	if let Some(port) = args.port {
		settings.port = port;
	}
	if let Some(log_level) = &args.log_level {
		settings.log_level = log_level.clone();
	}
	if let Some(ms) = args.read_timeout_ms {
		settings.read_timeout_ms = Some(ms);
	}

	Ok(settings)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	let extension = path_ref
		.extension()
		.and_then(|ext| ext.to_str())
		.ok_or(ConfigError::NoExtension)?;

	match extension.to_lowercase().as_str() {
		"toml" => Ok(toml::from_str(&content)?),
		"json" => Ok(serde_json::from_str(&content)?),
		"yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
		_ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn write_config(name: &str, content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
		let dir = tempfile::tempdir().unwrap();
		let file_path = dir.path().join(name);
		std::fs::write(&file_path, content).unwrap();
		(dir, file_path)
	}

	#[test]
	fn test_parse_toml() {
		let (_dir, path) = write_config(
			"redwire.toml",
			r#"
host = "10.0.0.5"
port = 7000
log_level = "debug"
read_timeout_ms = 250
max_depth = 16
"#,
		);

		let settings = load_from_file(&path).unwrap();
		assert_eq!(settings.host, "10.0.0.5");
		assert_eq!(settings.port, 7000);
		assert_eq!(settings.log_level, "debug");
		assert_eq!(settings.read_timeout_ms, Some(250));
		assert_eq!(settings.write_timeout_ms, None);
		assert_eq!(settings.max_depth, 16);
	}

	#[test]
	fn test_parse_json() {
		let (_dir, path) = write_config(
			"redwire.json",
			r#"
{
  "host": "10.0.0.5",
  "port": 7000,
  "write_timeout_ms": 100
}
"#,
		);

		let settings = load_from_file(&path).unwrap();
		assert_eq!(settings.host, "10.0.0.5");
		assert_eq!(settings.port, 7000);
		assert_eq!(settings.write_timeout_ms, Some(100));
		assert_eq!(settings.log_level, "warn");
	}

	#[test]
	fn test_parse_yaml() {
		let (_dir, path) = write_config(
			"redwire.yml",
			r#"
host: "10.0.0.5"
port: 7000
log_level: "info"
"#,
		);

		let settings = load_from_file(&path).unwrap();
		assert_eq!(settings.host, "10.0.0.5");
		assert_eq!(settings.port, 7000);
		assert_eq!(settings.log_level, "info");
	}

	#[test]
	fn test_unsupported_extension() {
		let (_dir, path) = write_config("redwire.ini", "port = 1");
		assert!(matches!(
			load_from_file(&path),
			Err(ConfigError::UnsupportedFormat(ext)) if ext == "ini"
		));
	}

	#[test]
	fn test_no_extension() {
		let (_dir, path) = write_config("redwire", "port = 1");
		assert!(matches!(load_from_file(&path), Err(ConfigError::NoExtension)));
	}

	#[test]
	fn test_missing_file() {
		assert!(matches!(
			load_from_file("/nonexistent/redwire.toml"),
			Err(ConfigError::Io { .. })
		));
	}

	#[test]
	fn test_cli_overrides_file() {
		let (_dir, path) = write_config("redwire.toml", "host = \"10.0.0.5\"\nport = 7000\n");
		let args = Cli::parse_from([
			"redwire",
			"--config",
			path.to_str().unwrap(),
			"--port",
			"7001",
			"--read-timeout-ms",
			"50",
			"GET",
			"key",
		]);

		let settings = load(&args).unwrap();
		assert_eq!(settings.host, "10.0.0.5");
		assert_eq!(settings.port, 7001);
		assert_eq!(settings.read_timeout_ms, Some(50));
		assert_eq!(args.args, vec!["GET", "key"]);
	}

	#[test]
	fn test_client_config() {
		let settings = Settings {
			read_timeout_ms: Some(1500),
			..Settings::default()
		};
		let config = settings.client_config();
		assert_eq!(config.addr, "127.0.0.1:6379");
		assert_eq!(config.read_timeout, Some(Duration::from_millis(1500)));
		assert_eq!(config.write_timeout, None);
		assert_eq!(config.max_depth, resp::DEFAULT_MAX_DEPTH);
	}
}
