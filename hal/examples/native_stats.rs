//! Print every native statistic the HAL can read on this host

fn main() {
    println!("HAL native statistics");
    println!("=====================\n");

    print!("Host VM statistics... ");
    match hal::vmstat::host_vm_statistics() {
        Ok(vm) => println!(
            "free={} inactive={} active={} wired={}",
            vm.free_count, vm.inactive_count, vm.active_count, vm.wire_count
        ),
        Err(e) => println!("FAIL: {}", e),
    }

    print!("Performance info... ");
    match hal::perfinfo::performance_info() {
        Ok(info) => println!(
            "page_size={} available={} bytes ({} of {} pages)",
            info.page_size,
            info.available_bytes(),
            info.physical_available,
            info.physical_total
        ),
        Err(e) => println!("FAIL: {}", e),
    }

    print!("OS version... ");
    match hal::osversion::os_version_info() {
        Ok(v) => println!(
            "{}.{} build {} suite_mask={:#06x}",
            v.major_version, v.minor_version, v.build_number, v.suite_mask
        ),
        Err(e) => println!("FAIL: {}", e),
    }
}
