//! Linux probe: `MemAvailable` from `/proc/meminfo`.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{StatError, StatResult};
use crate::stat::{OsStat, StatValue};

/// Where the kernel publishes memory counters.
pub const MEMINFO_PATH: &str = "/proc/meminfo";

const MEM_AVAILABLE_KEY: &str = "MemAvailable:";

#[derive(Debug, Clone)]
pub struct LinuxMemoryStats {
    path: PathBuf,
}

impl Default for LinuxMemoryStats {
    fn default() -> Self {
        Self::with_path(MEMINFO_PATH)
    }
}

impl LinuxMemoryStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read from another meminfo-formatted file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StatError {
        if source.kind() == io::ErrorKind::NotFound {
            StatError::ResourceNotFound(self.path.clone())
        } else {
            StatError::Io {
                path: self.path.clone(),
                source,
            }
        }
    }
}

impl OsStat for LinuxMemoryStats {
    fn name(&self) -> &str {
        "Available memory"
    }

    fn stat(&self) -> StatResult<StatValue> {
        let file = File::open(&self.path).map_err(|e| self.io_error(e))?;
        debug!(path = %self.path.display(), "reading meminfo");
        parse_mem_available(BufReader::new(file)).map_err(|source| StatError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Scan meminfo-formatted lines for `MemAvailable:`.
///
/// A value followed by `kB` is converted to bytes; any other unit is left
/// as-is. A missing line, or one whose value is not a number, yields
/// [`StatValue::NotDetected`].
pub fn parse_mem_available<R: BufRead>(reader: R) -> io::Result<StatValue> {
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        if fields.next() != Some(MEM_AVAILABLE_KEY) {
            continue;
        }
        let Some(raw) = fields.next() else {
            continue;
        };

        let value: u64 = match raw.parse() {
            Ok(v) => v,
            Err(e) => {
                warn!(value = raw, error = %e, "MemAvailable is not a number");
                return Ok(StatValue::NotDetected);
            }
        };
        return Ok(match fields.next() {
            Some("kB") => StatValue::Bytes(value.saturating_mul(1024)),
            _ => StatValue::Count(value),
        });
    }
    Ok(StatValue::NotDetected)
}
