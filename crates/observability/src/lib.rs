//! Tracing and logging setup shared by the workspace.

pub mod tracing;

pub use self::tracing::{LogConfig, LogFormat, init, init_for_tests, init_with};
