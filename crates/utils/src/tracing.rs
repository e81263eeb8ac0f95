// Copyright 2023 Ulvetanna Inc.
// Copyright 2025 Digestkit Developers

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs a global subscriber writing to stderr, filtered by `RUST_LOG`.
///
/// Calling this more than once is harmless; only the first call installs a subscriber.
pub fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
