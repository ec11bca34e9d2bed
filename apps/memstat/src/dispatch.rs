//! Platform selection and the single query of a run.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{StatError, StatResult};
use crate::probe::{
    LinuxMemoryStats, MacOsMemoryStats, WindowsMemoryStats, WindowsOsInfo,
};
use crate::report::Reporter;
use crate::stat::{CombinedOsStat, OsStat};

/// Usage line shown with every argument error.
pub const USAGE: &str = "Usage: memstat win|osx|linux";

/// OS family whose native interface is queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Command-line token for this platform
    pub fn token(&self) -> &'static str {
        match self {
            Platform::Windows => "win",
            Platform::MacOs => "osx",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Platform {
    type Err = StatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "win" => Ok(Platform::Windows),
            "osx" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(StatError::InvalidArgument(format!(
                "parameter \"platform\" should be \"osx\", \"win\" or \"linux\", got \"{}\"\n{}",
                other, USAGE
            ))),
        }
    }
}

/// Run the probe for `platform` once and report its lines.
///
/// `meminfo` is only read for [`Platform::Linux`].
pub fn dispatch(platform: Platform, meminfo: &Path, out: &mut dyn Reporter) -> StatResult<()> {
    match platform {
        Platform::Windows => report(
            &CombinedOsStat::new(WindowsOsInfo::new(), WindowsMemoryStats::new()),
            out,
        ),
        Platform::MacOs => report(&MacOsMemoryStats::new(), out),
        Platform::Linux => report(&LinuxMemoryStats::with_path(meminfo), out),
    }
}

/// Query `stat`, then emit the header and every line. Nothing is emitted on
/// failure.
pub fn report<S: OsStat>(stat: &S, out: &mut dyn Reporter) -> StatResult<()> {
    let lines = stat.lines()?;
    out.header();
    for (label, value) in &lines {
        out.stat(label, value);
    }
    Ok(())
}
