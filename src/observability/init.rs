//! Tracing initialization and subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes a tracing subscriber for the library's diagnostics.
///
/// Installs a `tracing-subscriber` registry with an [`EnvFilter`] built from
/// `level` and a formatting layer writing to standard error, so rendered
/// tables on standard output stay separate from diagnostics.
///
/// # Parameters
///
/// * `level` - Filter directive, e.g. `"info"` or `"tablizer=debug"`
///
/// # Initialization Behavior
///
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect, later calls are ignored)
/// - Never panics or returns an error; diagnostics are optional
///
/// # Example
///
/// ```rust
/// use tablizer::observability::init_tracing;
///
/// init_tracing("debug");
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(level: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    let _ = subscriber.try_init();
}
