//! Shared utilities for the veil membership registry.

pub mod logging;

pub use logging::{init_logging, init_tracing, LogFormat};
