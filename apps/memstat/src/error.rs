//! Error types for memory statistic queries.

use std::io;
use std::path::PathBuf;

use hal::HalError;
use thiserror::Error;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum StatError {
    /// Wrong argument count or unknown platform token.
    #[error("Invalid command line: {0}")]
    InvalidArgument(String),

    /// The OS statistics call reported failure.
    #[error("Failed to get {query}. Error code: {code}")]
    NativeQueryFailure { query: &'static str, code: i32 },

    /// The native interface is not compiled into this build.
    #[error("Failed to get {query}: not supported on this platform")]
    Unsupported { query: &'static str },

    /// An OS-provided file is absent.
    #[error("File \"{}\" not found", .0.display())]
    ResourceNotFound(PathBuf),

    /// Reading an OS-provided file failed for a reason other than absence.
    #[error("Error reading file \"{}\"", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StatError {
    /// Wrap a HAL failure with the name of the query that failed.
    pub fn native(query: &'static str, err: HalError) -> Self {
        match err {
            HalError::NotSupported => StatError::Unsupported { query },
            HalError::SystemError(code) => StatError::NativeQueryFailure { query, code },
        }
    }

    /// Process exit code for this error.
    ///
    /// - 2: usage error (EX_USAGE convention)
    /// - 1: everything else
    pub fn exit_code(&self) -> i32 {
        match self {
            StatError::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}

/// Result type for statistic queries
pub type StatResult<T> = Result<T, StatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_error_keeps_code() {
        let err = StatError::native("host VM info", HalError::SystemError(5));
        assert!(matches!(
            err,
            StatError::NativeQueryFailure { query: "host VM info", code: 5 }
        ));
        assert_eq!(err.to_string(), "Failed to get host VM info. Error code: 5");
    }

    #[test]
    fn not_supported_maps_to_unsupported() {
        let err = StatError::native("performance info", HalError::NotSupported);
        assert!(matches!(err, StatError::Unsupported { query: "performance info" }));
    }

    #[test]
    fn io_error_exposes_source() {
        use std::error::Error as _;

        let err = StatError::Io {
            path: PathBuf::from("/proc/meminfo"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Error reading file \"/proc/meminfo\"");
        assert_eq!(err.source().map(|s| s.to_string()), Some("denied".to_string()));
    }

    #[test]
    fn exit_codes() {
        assert_eq!(StatError::InvalidArgument("x".into()).exit_code(), 2);
        assert_eq!(StatError::ResourceNotFound(PathBuf::from("/x")).exit_code(), 1);
    }
}
