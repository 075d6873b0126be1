//! Subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use eventdata_core::{EventResult, LogLevel, TranscoderConfig};
use tracing_subscriber::EnvFilter;

/// Initialize the global subscriber
///
/// `RUST_LOG` directives take precedence over `level` when set. The filter
/// can later be changed through [`ReloadHandle::global`]. Returns `false` if
/// a global subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level));
    let (filter_layer, handle) = tracing_subscriber::reload::Layer::new(filter);

    let subscriber = tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_target(true));

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }
    ReloadHandle::global().set_handle(handle);
    tracing::debug!("Logging initialized at {}", level);
    true
}

/// Initialize logging with the level named in a transcoder configuration
pub fn init_logging_from_config(config: &TranscoderConfig) -> EventResult<bool> {
    Ok(init_logging(config.log_level()?))
}

#[cfg(test)]
#[path = "layer/layer_tests.rs"]
mod layer_tests;
