//! Platform memory probes
//!
//! Each probe issues exactly one native or filesystem query. Native calls go
//! through a small source trait so a probe can run against [`Host`] (the HAL
//! for the compiled target) or against a stand-in.

mod linux;
mod macos;
mod windows;

pub use linux::{parse_mem_available, LinuxMemoryStats, MEMINFO_PATH};
pub use macos::MacOsMemoryStats;
pub use windows::{decode_suite_mask, WindowsMemoryStats, WindowsOsInfo};

use hal::osversion::{self, OsVersionInfo};
use hal::perfinfo::{self, PerformanceInfo};
use hal::vmstat::{self, VmStatistics};
use hal::HalResult;

/// Mach host VM statistics
pub trait VmStatsSource {
    fn host_vm_statistics(&self) -> HalResult<VmStatistics>;
}

/// Windows performance information
pub trait PerfInfoSource {
    fn performance_info(&self) -> HalResult<PerformanceInfo>;
}

/// Windows extended version record
pub trait OsVersionSource {
    fn os_version_info(&self) -> HalResult<OsVersionInfo>;
}

/// The running system, via the HAL.
#[derive(Debug, Clone, Copy, Default)]
pub struct Host;

impl VmStatsSource for Host {
    fn host_vm_statistics(&self) -> HalResult<VmStatistics> {
        vmstat::host_vm_statistics()
    }
}

impl PerfInfoSource for Host {
    fn performance_info(&self) -> HalResult<PerformanceInfo> {
        perfinfo::performance_info()
    }
}

impl OsVersionSource for Host {
    fn os_version_info(&self) -> HalResult<OsVersionInfo> {
        osversion::os_version_info()
    }
}
