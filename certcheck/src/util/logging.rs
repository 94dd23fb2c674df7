//! Logging support

#[cfg(feature = "std")]
use log::{debug, error, info, warn};

/// Enum that describes level associated with a log message
#[derive(Debug, Eq, PartialEq)]
pub enum PeLogLevels {
    /// Common error logging level
    PeError,
    /// Common info logging level
    PeInfo,
    /// Common warn logging level
    PeWarn,
    /// Common debug logging level
    PeDebug,
}

/// `log_message` forwards a message to the `log` facade at the given level.
#[cfg(feature = "std")]
pub fn log_message(level: &PeLogLevels, message: &str) {
    match level {
        PeLogLevels::PeError => error!("{}", message),
        PeLogLevels::PeWarn => warn!("{}", message),
        PeLogLevels::PeInfo => info!("{}", message),
        PeLogLevels::PeDebug => debug!("{}", message),
    }
}

#[cfg(not(feature = "std"))]
/// `log_message` does nothing when std feature gate is not used
pub fn log_message(_level: &PeLogLevels, _message: &str) {}

/// `debug_enabled` returns true when debug level messages would be emitted.
#[cfg(feature = "std")]
pub fn debug_enabled() -> bool {
    log::log_enabled!(log::Level::Debug)
}

#[cfg(not(feature = "std"))]
/// `debug_enabled` is always false when std feature gate is not used
pub fn debug_enabled() -> bool {
    false
}
