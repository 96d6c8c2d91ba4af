//! Logging setup for the `dictconfig` binary and tests.
//!
//! The library only emits `tracing` events; nothing is printed unless a
//! subscriber is installed with [`initialize`].

use tracing_subscriber::{EnvFilter, fmt};

/// Level used when neither `RUST_LOG` nor a verbosity flag asks for more.
pub const DEFAULT_LEVEL: &str = "warn";

/// Map a `-v` count to a filter directive.
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
	match verbosity {
		0 => DEFAULT_LEVEL,
		1 => "info",
		2 => "debug",
		_ => "trace",
	}
}

/// Install a stderr subscriber. `RUST_LOG` wins when set; otherwise the
/// level comes from `verbosity`. Calling this twice is harmless.
pub fn initialize(verbosity: u8) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

	let _ = fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}

/// Install a debug-level subscriber that writes through the test harness.
pub fn init_test() {
	let _ = fmt()
		.with_env_filter(EnvFilter::new("debug"))
		.with_test_writer()
		.try_init();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbosity_raises_level() {
		assert_eq!(level_for_verbosity(0), "warn");
		assert_eq!(level_for_verbosity(1), "info");
		assert_eq!(level_for_verbosity(2), "debug");
		assert_eq!(level_for_verbosity(7), "trace");
	}

	#[test]
	fn initialize_twice_does_not_panic() {
		init_test();
		initialize(2);
	}
}
