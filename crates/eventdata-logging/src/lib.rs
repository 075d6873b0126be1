//! eventdata-logging - Tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] installing a formatted subscriber behind a reloadable filter
//! - [`ReloadHandle`] for changing the log level at runtime

mod layer;
mod reload;

pub use eventdata_core::LogLevel;
pub use layer::{init_logging, init_logging_from_config};
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging, init_logging_from_config};
}
