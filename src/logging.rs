//! Logging setup.
//!
//! The subscriber is installed at `info` before the config file is read, so
//! config warnings are not lost. Once the config is known, [`LogLevel`]
//! switches the filter to match its `debug` flag.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Handle for changing the active filter after [`init`].
pub struct LogLevel {
    handle: reload::Handle<EnvFilter, Registry>,
}

impl LogLevel {
    /// Apply the config's `debug` flag.
    pub fn set_debug(&self, debug: bool) {
        if let Err(e) = self.handle.reload(filter_for(debug)) {
            tracing::warn!("cannot change log level: {}", e);
        }
    }
}

/// Filter for the given debug flag. The default level is `info`; with
/// `debug` it becomes `debug` and `RUST_LOG` may override it.
pub fn filter_for(debug: bool) -> EnvFilter {
    // Without the debug flag, ignore RUST_LOG so a stray variable in the
    // locker's environment cannot turn on per-key trace output.
    if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber at `info` on stderr.
///
/// Returns `None` if a subscriber was already installed.
pub fn init() -> Option<LogLevel> {
    let (filter, handle) = reload::Layer::new(filter_for(false));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .ok()?;
    Some(LogLevel { handle })
}
