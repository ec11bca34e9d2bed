//! Output collaborator for results and failures.

use std::error::Error;

use tracing::{error, info};

use crate::error::StatError;
use crate::stat::StatValue;

/// Separator logged before the results.
pub const HEADER: &str = "-------------------------";

/// Receives everything a run wants to show the user.
pub trait Reporter {
    fn header(&mut self);
    fn stat(&mut self, label: &str, value: &StatValue);
    fn failure(&mut self, err: &StatError);
}

/// Reports through `tracing`: results at info, failures at error.
#[derive(Debug, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn header(&mut self) {
        info!("{}", HEADER);
    }

    fn stat(&mut self, label: &str, value: &StatValue) {
        info!("{}: {}", label, value);
    }

    fn failure(&mut self, err: &StatError) {
        error!("Major error: {}", error_chain(err));
    }
}

/// Render an error followed by its `source()` chain.
pub fn error_chain(err: &dyn Error) -> String {
    let mut out = err.to_string();
    let mut cause = err.source();
    while let Some(e) = cause {
        out.push_str("\n  caused by: ");
        out.push_str(&e.to_string());
        cause = e.source();
    }
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    /// Collects reported lines as plain strings.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingReporter {
        pub lines: Vec<String>,
        pub failures: Vec<String>,
    }

    impl Reporter for RecordingReporter {
        fn header(&mut self) {
            self.lines.push(HEADER.to_string());
        }

        fn stat(&mut self, label: &str, value: &StatValue) {
            self.lines.push(format!("{}: {}", label, value));
        }

        fn failure(&mut self, err: &StatError) {
            self.failures.push(error_chain(err));
        }
    }

    #[test]
    fn chain_includes_io_cause() {
        let err = StatError::Io {
            path: PathBuf::from("/proc/meminfo"),
            source: io::Error::new(io::ErrorKind::Other, "bad sector"),
        };
        assert_eq!(
            error_chain(&err),
            "Error reading file \"/proc/meminfo\"\n  caused by: bad sector"
        );
    }

    #[test]
    fn recording_reporter_keeps_failures_apart() {
        let mut out = RecordingReporter::default();
        out.failure(&StatError::InvalidArgument("no platform".into()));
        assert!(out.lines.is_empty());
        assert_eq!(out.failures, vec!["Invalid command line: no platform".to_string()]);
    }

    #[test]
    fn chain_without_cause_is_message() {
        let err = StatError::ResourceNotFound(PathBuf::from("/proc/meminfo"));
        assert_eq!(error_chain(&err), "File \"/proc/meminfo\" not found");
    }
}
