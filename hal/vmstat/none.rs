//! Host VM statistics stub for non-Mach platforms

use super::VmStatistics;
use crate::{HalError, HalResult};

/// Query host VM statistics (stub - returns NotSupported)
pub fn host_vm_statistics() -> HalResult<VmStatistics> {
    Err(HalError::NotSupported)
}
