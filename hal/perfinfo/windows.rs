//! Windows performance information using `GetPerformanceInfo`

use super::PerformanceInfo;
use crate::{HalError, HalResult};
use std::mem;
use winapi::shared::minwindef::{DWORD, FALSE};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::psapi::{GetPerformanceInfo, PERFORMANCE_INFORMATION};

/// Query performance information
pub fn performance_info() -> HalResult<PerformanceInfo> {
    let mut info: PERFORMANCE_INFORMATION = unsafe { mem::zeroed() };
    let cb = mem::size_of::<PERFORMANCE_INFORMATION>() as DWORD;

    if unsafe { GetPerformanceInfo(&mut info, cb) } == FALSE {
        let code = unsafe { GetLastError() };
        return Err(HalError::SystemError(code as i32));
    }

    Ok(PerformanceInfo {
        page_size: info.PageSize as u64,
        physical_total: info.PhysicalTotal as u64,
        physical_available: info.PhysicalAvailable as u64,
        commit_total: info.CommitTotal as u64,
        commit_limit: info.CommitLimit as u64,
        system_cache: info.SystemCache as u64,
    })
}
