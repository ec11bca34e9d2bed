//! Windows OS version using `GetVersionExW`

use super::OsVersionInfo;
use crate::{HalError, HalResult};
use std::mem;
use winapi::shared::minwindef::{DWORD, FALSE};
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::sysinfoapi::GetVersionExW;
use winapi::um::winnt::{LPOSVERSIONINFOW, OSVERSIONINFOEXW};

/// Query the OS version record
///
/// Without an application manifest Windows reports itself as 6.2 here;
/// the build number and suite mask are still those of the running system.
pub fn os_version_info() -> HalResult<OsVersionInfo> {
    let mut info: OSVERSIONINFOEXW = unsafe { mem::zeroed() };
    info.dwOSVersionInfoSize = mem::size_of::<OSVERSIONINFOEXW>() as DWORD;

    let ok = unsafe { GetVersionExW(&mut info as *mut OSVERSIONINFOEXW as LPOSVERSIONINFOW) };
    if ok == FALSE {
        let code = unsafe { GetLastError() };
        return Err(HalError::SystemError(code as i32));
    }

    Ok(OsVersionInfo {
        major_version: info.dwMajorVersion,
        minor_version: info.dwMinorVersion,
        build_number: info.dwBuildNumber,
        suite_mask: info.wSuiteMask,
        product_type: info.wProductType,
    })
}
