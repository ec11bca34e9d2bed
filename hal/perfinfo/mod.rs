//! Performance information HAL
//!
//! System-wide memory counters from the Windows process status API.
//! Counters are in pages; multiply by `page_size` for bytes.

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::*;

#[cfg(not(windows))]
mod none;
#[cfg(not(windows))]
pub use none::*;

/// Subset of `PERFORMANCE_INFORMATION`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerformanceInfo {
    /// Page size in bytes
    pub page_size: u64,
    /// Physical memory, in pages
    pub physical_total: u64,
    /// Physical memory available to user processes, in pages
    pub physical_available: u64,
    /// Pages currently committed
    pub commit_total: u64,
    /// Commit limit, in pages
    pub commit_limit: u64,
    /// System cache, in pages
    pub system_cache: u64,
}

impl PerformanceInfo {
    /// Available physical memory in bytes
    pub fn available_bytes(&self) -> u64 {
        self.page_size.saturating_mul(self.physical_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_bytes_is_pages_times_page_size() {
        let info = PerformanceInfo {
            page_size: 4096,
            physical_available: 1000,
            ..Default::default()
        };
        assert_eq!(info.available_bytes(), 4_096_000);
    }

    #[cfg(not(windows))]
    #[test]
    fn stub_is_not_supported() {
        assert_eq!(performance_info(), Err(crate::HalError::NotSupported));
    }
}
