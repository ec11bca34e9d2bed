//! Host VM statistics HAL
//!
//! Page-level virtual memory counters of the whole host.
//!
//! - macOS: Mach `host_statistics(HOST_VM_INFO)`
//! - Others: stub returning `NotSupported`

#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "macos")]
pub use macos::*;

#[cfg(not(target_os = "macos"))]
mod none;
#[cfg(not(target_os = "macos"))]
pub use none::*;

/// Host-wide virtual memory counters, all in pages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VmStatistics {
    /// Pages free
    pub free_count: u32,
    /// Pages active
    pub active_count: u32,
    /// Pages inactive
    pub inactive_count: u32,
    /// Pages wired down
    pub wire_count: u32,
    /// Pages purgeable
    pub purgeable_count: u32,
    /// Pages speculative
    pub speculative_count: u32,
}

impl VmStatistics {
    /// Pages that can be handed out without paging anything out
    pub fn reclaimable_pages(&self) -> u64 {
        u64::from(self.free_count) + u64::from(self.inactive_count)
    }
}
