//! Logging setup shared by the snake binaries.
//!
//! Reexports macros from the [`log`] crate and installs an [`env_logger`]
//! backend. Game crates only log through the [`log`] facade; binaries call
//! [`init_logger`] once at startup.
//!
//! Example:
//! ```rust
//! use logger::*;
//!
//! init_logger();
//!
//! info!("Snake is ready");
//! ```

pub use log::{debug, error, info, trace, warn};

use env_logger::{fmt::Formatter, Builder, Env};
use log::{Record, SetLoggerError};
use std::io;

/// Default log level for debug compilations.
const DEBUG_LOG_LEVEL: &str = "trace";

/// Default log level for release compilations.
const RELEASE_LOG_LEVEL: &str = "info";

/// Environment variable for log level setting.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Environment variable for log style setting.
pub const LOG_STYLE_ENV: &str = "LOG_STYLE";

/// Default log style.
const LOG_STYLE: &str = "auto";

/// Install the logger. Run this in a binary crate before anything logs.
///
/// A second call is harmless: the already installed logger is kept.
pub fn init_logger() {
	if let Err(e) = try_init_logger() {
		log::debug!("Logger is already initialized: {}", e);
	}
}

/// Install the logger, failing if another one is already set.
pub fn try_init_logger() -> Result<(), SetLoggerError> {
	builder().try_init()
}

/// Logger builder reading [`LOG_LEVEL_ENV`] and [`LOG_STYLE_ENV`].
fn builder() -> Builder {
	let mut builder = Builder::from_env(
		Env::default()
			.filter_or(LOG_LEVEL_ENV, default_level())
			.write_style_or(LOG_STYLE_ENV, LOG_STYLE),
	);
	builder.format(format);
	builder
}

fn default_level() -> &'static str {
	match cfg!(debug_assertions) {
		true => DEBUG_LOG_LEVEL,
		false => RELEASE_LOG_LEVEL,
	}
}

/// Logging output format: colored level, module, message.
fn format(buf: &'_ mut Formatter, record: &'_ Record<'_>) -> io::Result<()> {
	use env_logger::fmt::Color;
	use log::Level;
	use std::io::Write;

	let mut level_style = buf.style();
	match record.level() {
		Level::Error => level_style.set_color(Color::Red).set_bold(true),
		Level::Warn => level_style.set_color(Color::Yellow),
		Level::Info => level_style.set_color(Color::Cyan),
		Level::Debug => level_style.set_color(Color::Magenta),
		Level::Trace => level_style.set_color(Color::Blue),
	};

	let mut target_style = buf.style();
	target_style.set_dimmed(true);

	writeln!(
		buf,
		"{}\t{}\t{}",
		level_style.value(record.level()),
		target_style.value(record.target()),
		record.args()
	)
}
