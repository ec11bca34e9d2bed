//! memstat - report available system memory
//!
//! Queries one native interface per OS family and prints the result:
//! - Windows: `GetPerformanceInfo` (plus edition/build from `GetVersionExW`)
//! - macOS: Mach host VM statistics
//! - Linux: `MemAvailable` from `/proc/meminfo`
//!
//! Native calls are provided by the `hal` crate, selected at compile time.

pub mod cli;
pub mod dispatch;
pub mod error;
pub mod probe;
pub mod report;
pub mod stat;

use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use cli::Cli;
pub use dispatch::{dispatch, Platform};
pub use error::{StatError, StatResult};
pub use report::{Reporter, TracingReporter};
pub use stat::{OsStat, StatValue};

/// Run with the process arguments - portable entry point
pub fn run() -> i32 {
    run_from(std::env::args_os())
}

/// Parse `args`, run one probe, and return the process exit code.
pub fn run_from<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return 0;
        }
        Err(e) => {
            init_logging(false);
            let err = StatError::InvalidArgument(e.to_string());
            TracingReporter.failure(&err);
            return err.exit_code();
        }
    };

    init_logging(cli.verbose);
    let mut reporter = TracingReporter;
    match execute(&cli, &mut reporter) {
        Ok(()) => 0,
        Err(err) => {
            reporter.failure(&err);
            err.exit_code()
        }
    }
}

/// Select the probe named on the command line and report its result.
pub fn execute(cli: &Cli, out: &mut dyn Reporter) -> StatResult<()> {
    let platform = cli.platform()?;
    debug!(%platform, "selected probe");
    dispatch(platform, &cli.meminfo, out)
}

/// Install the global subscriber. `RUST_LOG` wins over `verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::RecordingReporter;
    use crate::report::HEADER;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("memstat").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn bad_invocations_never_reach_a_probe() {
        let cases: [&[&str]; 6] = [
            &[],
            &["win", "linux"],
            &["linux", "linux", "osx"],
            &["windows"],
            &["mac"],
            &["LINUX"],
        ];
        for args in cases {
            let mut out = RecordingReporter::default();
            let err = execute(&cli(args), &mut out).unwrap_err();
            assert!(matches!(err, StatError::InvalidArgument(_)), "{:?}", args);
            assert_eq!(err.exit_code(), 2);
            assert!(out.lines.is_empty());
        }
    }

    #[test]
    fn linux_run_end_to_end() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "MemTotal: 2000 kB\nMemAvailable: 1000 kB").unwrap();
        let path = file.path().to_str().unwrap();

        let mut out = RecordingReporter::default();
        execute(&cli(&["--meminfo", path, "linux"]), &mut out).unwrap();
        assert_eq!(
            out.lines,
            vec![HEADER.to_string(), "Available memory: 1024000".to_string()]
        );
    }

    #[test]
    fn unknown_flag_exits_with_usage_code() {
        assert_eq!(run_from(["memstat", "--bogus", "linux"]), 2);
    }

    #[test]
    fn help_exits_cleanly() {
        assert_eq!(run_from(["memstat", "--help"]), 0);
    }
}
