//! Windows probes: available physical memory and OS edition/build.

use tracing::debug;

use super::{Host, OsVersionSource, PerfInfoSource};
use crate::error::{StatError, StatResult};
use crate::stat::{OsStat, StatValue};

const PERF_QUERY: &str = "Performance Info";
const VERSION_QUERY: &str = "OS version info";

/// `VER_SUITE_*` bits we know how to name, in ascending bit order.
const SUITES: [(u16, &str); 8] = [
    (0x0002, "Enterprise"),
    (0x0004, "BackOffice"),
    (0x0008, "Communication Server"),
    (0x0080, "Datacenter"),
    (0x0200, "Home"),
    (0x0400, "Web Server"),
    (0x2000, "Storage Server"),
    (0x4000, "Compute Cluster"),
];

/// Comma-joined edition names for a suite mask. Unknown bits are ignored.
pub fn decode_suite_mask(mask: u16) -> String {
    SUITES
        .iter()
        .filter(|(bit, _)| mask & bit != 0)
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(",")
}

/// Available physical memory in bytes.
#[derive(Debug, Default)]
pub struct WindowsMemoryStats<S = Host> {
    source: S,
}

impl WindowsMemoryStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: PerfInfoSource> WindowsMemoryStats<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: PerfInfoSource> OsStat for WindowsMemoryStats<S> {
    fn name(&self) -> &str {
        "Available memory"
    }

    fn stat(&self) -> StatResult<StatValue> {
        let info = self
            .source
            .performance_info()
            .map_err(|e| StatError::native(PERF_QUERY, e))?;
        debug!(
            page_size = info.page_size,
            physical_available = info.physical_available,
            physical_total = info.physical_total,
            "performance info"
        );
        Ok(StatValue::Bytes(info.available_bytes()))
    }
}

/// Edition names decoded from the suite mask, plus the build number.
#[derive(Debug, Default)]
pub struct WindowsOsInfo<S = Host> {
    source: S,
}

impl WindowsOsInfo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: OsVersionSource> WindowsOsInfo<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: OsVersionSource> OsStat for WindowsOsInfo<S> {
    fn name(&self) -> &str {
        "OS code name"
    }

    fn stat(&self) -> StatResult<StatValue> {
        let version = self
            .source
            .os_version_info()
            .map_err(|e| StatError::native(VERSION_QUERY, e))?;
        debug!(
            major = version.major_version,
            minor = version.minor_version,
            suite_mask = version.suite_mask,
            "OS version info"
        );
        Ok(StatValue::Text(format!(
            "{}\nBuild: {}",
            decode_suite_mask(version.suite_mask),
            version.build_number
        )))
    }
}
