//! Dynamic log level reloading support

use eventdata_core::{EventError, EventResult, LogLevel};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::reload;

/// Handle for dynamically reloading the log filter
pub struct ReloadHandle {
    handle: Mutex<Option<reload::Handle<EnvFilter, tracing_subscriber::Registry>>>,
}

impl ReloadHandle {
    /// Create a new reload handle
    pub fn new() -> Self {
        Self {
            handle: Mutex::new(None),
        }
    }

    /// Get the global reload handle
    pub fn global() -> &'static ReloadHandle {
        static INSTANCE: OnceCell<ReloadHandle> = OnceCell::new();
        INSTANCE.get_or_init(ReloadHandle::new)
    }

    /// Set the reload handle (called during initialization)
    pub fn set_handle(&self, handle: reload::Handle<EnvFilter, tracing_subscriber::Registry>) {
        *self.handle.lock() = Some(handle);
    }

    pub fn is_initialized(&self) -> bool {
        self.handle.lock().is_some()
    }

    /// Reload the filter to use a new log level
    pub fn reload_level(&self, level: LogLevel) -> EventResult<()> {
        let guard = self.handle.lock();
        let Some(handle) = guard.as_ref() else {
            return Err(EventError::ConfigError("reload handle not initialized".to_string()));
        };
        handle
            .reload(level_filter(level))
            .map_err(|e| EventError::ConfigError(format!("failed to reload filter: {e}")))
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter directive for a log level
pub(crate) fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
        LogLevel::Off => "off",
    }
}

pub(crate) fn level_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level_directive(level))
}
