//! Logging utilities.
//!
//! Centralizes logger initialization for the binaries. Library code only uses
//! the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
