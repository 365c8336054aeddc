//! Process-wide logger for the command line client.
//!
//! Output goes to stderr so that stdout only ever carries rendered replies.
//! Records sent through the `log` facade by the library crates are picked up
//! by the same subscriber.

use std::sync::OnceLock;

use chrono::Local;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::reload;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TelemetryError;

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const TIME_FORMAT: &str = "[%Y-%m-%d %H:%M:%S%.6f]";

/// Local wall clock with microseconds.
struct LocalTime;

impl FormatTime for LocalTime {
	fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
		write!(w, "{}", Local::now().format(TIME_FORMAT))
	}
}

static FILTER: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Normalise a level name, rejecting anything but the five tracing levels.
fn parse_level(level: &str) -> Result<String, TelemetryError> {
	let lower = level.trim().to_ascii_lowercase();
	if LEVELS.contains(&lower.as_str()) {
		Ok(lower)
	} else {
		Err(TelemetryError::InvalidLogLevel(level.to_string()))
	}
}

/// Install the global subscriber at `level`.
///
/// Fails if `level` is not one of `trace`, `debug`, `info`, `warn`, `error`
/// (any case), or if a subscriber is already installed.
///
/// ```no_run
/// telemetry::logger::init("debug")?;
/// # Ok::<(), telemetry::TelemetryError>(())
/// ```
pub fn init(level: &str) -> Result<(), TelemetryError> {
	let level = parse_level(level)?;
	let (filter, handle) = reload::Layer::new(EnvFilter::new(level));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_timer(LocalTime)
				.with_target(true)
				.with_ansi(false),
		)
		.try_init()
		.map_err(|_| TelemetryError::AlreadyInitialized)?;

	FILTER
		.set(handle)
		.map_err(|_| TelemetryError::AlreadyInitialized)
}

/// Swap the active level of the installed subscriber.
///
/// The name is checked before the subscriber, so a bad name is reported as
/// such even when [`init`] was never called.
pub fn reload_log_level(level: &str) -> Result<(), TelemetryError> {
	let level = parse_level(level)?;
	let handle = FILTER.get().ok_or(TelemetryError::NotInitialized)?;
	handle
		.reload(EnvFilter::new(level))
		.map_err(|e| TelemetryError::ReloadFailed(e.to_string()))
}
