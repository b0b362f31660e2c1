//! Logging utilities.
//!
//! The engine itself only uses the `log` facade; this module wires up
//! `env_logger` for binaries.

mod init;

pub use init::{LoggingConfig, init_logging};
