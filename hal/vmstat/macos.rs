//! macOS host VM statistics using the Mach host interface

use super::VmStatistics;
use crate::{HalError, HalResult};
use libc::{c_int, c_uint};

// <mach/host_info.h>
const HOST_VM_INFO: c_int = 2;
const KERN_SUCCESS: c_int = 0;

/// `struct vm_statistics` (32-bit counters, matching the Mach ABI)
#[repr(C)]
#[allow(dead_code)]
#[derive(Debug, Default)]
struct VmStatisticsData {
    free_count: c_uint,
    active_count: c_uint,
    inactive_count: c_uint,
    wire_count: c_uint,
    zero_fill_count: c_uint,
    reactivations: c_uint,
    pageins: c_uint,
    pageouts: c_uint,
    faults: c_uint,
    cow_faults: c_uint,
    lookups: c_uint,
    hits: c_uint,
    purgeable_count: c_uint,
    purges: c_uint,
    speculative_count: c_uint,
}

// HOST_VM_INFO_COUNT: size of the record in integer_t units
const HOST_VM_INFO_COUNT: c_uint =
    (std::mem::size_of::<VmStatisticsData>() / std::mem::size_of::<c_int>()) as c_uint;

extern "C" {
    fn mach_host_self() -> c_uint;
    fn host_statistics(
        host_priv: c_uint,
        flavor: c_int,
        host_info_out: *mut c_int,
        host_info_out_cnt: *mut c_uint,
    ) -> c_int;
}

/// Query host VM statistics
pub fn host_vm_statistics() -> HalResult<VmStatistics> {
    let mut data = VmStatisticsData::default();
    let mut count = HOST_VM_INFO_COUNT;

    let kr = unsafe {
        host_statistics(
            mach_host_self(),
            HOST_VM_INFO,
            (&mut data as *mut VmStatisticsData).cast::<c_int>(),
            &mut count,
        )
    };
    if kr != KERN_SUCCESS {
        return Err(HalError::SystemError(kr));
    }

    Ok(VmStatistics {
        free_count: data.free_count,
        active_count: data.active_count,
        inactive_count: data.inactive_count,
        wire_count: data.wire_count,
        purgeable_count: data.purgeable_count,
        speculative_count: data.speculative_count,
    })
}
