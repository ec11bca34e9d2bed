//! OS version stub for non-Windows platforms

use super::OsVersionInfo;
use crate::{HalError, HalResult};

/// Query the OS version record (stub - returns NotSupported)
pub fn os_version_info() -> HalResult<OsVersionInfo> {
    Err(HalError::NotSupported)
}
