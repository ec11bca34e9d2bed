//! OS version HAL
//!
//! Extended version record of the running Windows installation.

#[cfg(windows)]
mod windows;
#[cfg(windows)]
pub use windows::*;

#[cfg(not(windows))]
mod none;
#[cfg(not(windows))]
pub use none::*;

/// Subset of `OSVERSIONINFOEXW`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OsVersionInfo {
    pub major_version: u32,
    pub minor_version: u32,
    pub build_number: u32,
    /// `VER_SUITE_*` bit mask
    pub suite_mask: u16,
    /// `VER_NT_*` product type
    pub product_type: u8,
}

#[cfg(test)]
mod tests {
    #[cfg(not(windows))]
    #[test]
    fn stub_is_not_supported() {
        assert_eq!(super::os_version_info(), Err(crate::HalError::NotSupported));
    }
}
