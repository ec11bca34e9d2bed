//! Command-line definition.

use std::path::PathBuf;

use clap::Parser;

use crate::dispatch::{Platform, USAGE};
use crate::error::{StatError, StatResult};
use crate::probe::MEMINFO_PATH;

/// Report available system memory using the native interface of one OS.
#[derive(Debug, Parser)]
#[command(name = "memstat", version)]
pub struct Cli {
    /// Platform to query: win, osx or linux
    #[arg(value_name = "PLATFORM")]
    pub platforms: Vec<String>,

    /// Enable debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// meminfo-formatted file read by the linux probe
    #[arg(long, value_name = "PATH", default_value = MEMINFO_PATH, hide = true)]
    pub meminfo: PathBuf,
}

impl Cli {
    /// The single platform token, parsed.
    pub fn platform(&self) -> StatResult<Platform> {
        match self.platforms.as_slice() {
            [token] => token.parse(),
            [] => Err(StatError::InvalidArgument(format!(
                "parameter \"platform\" is missing\n{}",
                USAGE
            ))),
            many => Err(StatError::InvalidArgument(format!(
                "expected one platform, got {}\n{}",
                many.len(),
                USAGE
            ))),
        }
    }
}
