//! Logging setup.
//!
//! The engine itself only emits through the `log` facade; this module is the
//! optional `env_logger` backend for binaries and tests.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER};
