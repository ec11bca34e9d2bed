//! Hardware Abstraction Layer
//!
//! Raw access to the native memory and version interfaces of each OS.
//! Every module exposes the same functions on all targets; the real
//! implementation is selected at compile time via `target_os`, and other
//! targets get a stub that reports [`HalError::NotSupported`].

#[cfg(feature = "vmstat")]
pub mod vmstat;

#[cfg(feature = "perfinfo")]
pub mod perfinfo;

#[cfg(feature = "osversion")]
pub mod osversion;

use thiserror::Error;

/// Native interface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HalError {
    /// Interface not available on this platform
    #[error("Not supported on this platform")]
    NotSupported,
    /// Native call failed with the platform error code
    #[error("System error: {0}")]
    SystemError(i32),
}

/// Result type for HAL calls
pub type HalResult<T> = Result<T, HalError>;
