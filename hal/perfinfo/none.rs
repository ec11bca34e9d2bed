//! Performance information stub for non-Windows platforms

use super::PerformanceInfo;
use crate::{HalError, HalResult};

/// Query performance information (stub - returns NotSupported)
pub fn performance_info() -> HalResult<PerformanceInfo> {
    Err(HalError::NotSupported)
}
