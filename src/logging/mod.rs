//! Logger setup for the viewer binary.

mod init;

pub use init::{init_logging, LoggingConfig};
