//! Opt-in diagnostics for hosts that want the library's tracing output.
//!
//! Library code reports through `tracing` macros: construction geometry at
//! debug level, dropped trailing elements at debug, cell overflows at warn,
//! and render-pipeline anomalies at error. Nothing is emitted unless a
//! subscriber is installed; executables and tests that want the diagnostics
//! call [`init_tracing`] once at startup.
//!
//! # Configuration
//!
//! The filter directive passed to [`init_tracing`] follows `EnvFilter`
//! syntax, so both plain levels (`"info"`) and per-target directives
//! (`"tablizer=debug"`) work.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup

mod init;

pub use init::init_tracing;
