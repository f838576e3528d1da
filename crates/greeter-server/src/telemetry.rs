//! Logging setup and `.env` loading.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset. `TraceLayer` emits its request
/// spans and events at DEBUG.
pub const DEFAULT_LOG_FILTER: &str = "greeter_server=info,tower_http=debug";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_LOG_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

/// Install the global fmt subscriber.
pub fn init_logging() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Load `.env` from the working directory.
///
/// A missing file yields `None`. Any other failure (unreadable file, bad
/// line) is returned so it can be reported once logging is up; variables
/// before the bad line are still applied.
pub fn load_dotenv() -> Option<dotenvy::Error> {
    dotenvy::dotenv().err().filter(|err| !err.not_found())
}

/// Same as [`load_dotenv`] for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Option<dotenvy::Error> {
    dotenvy::from_path(path).err().filter(|err| !err.not_found())
}
