//! Logging setup.
//!
//! The library logs through the `log` facade only. Binaries and tests that want
//! output call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
