//! macOS probe: free + inactive pages from the Mach host VM statistics.

use tracing::debug;

use super::{Host, VmStatsSource};
use crate::error::{StatError, StatResult};
use crate::stat::{OsStat, StatValue};

const QUERY: &str = "host VM info";

#[derive(Debug, Default)]
pub struct MacOsMemoryStats<S = Host> {
    source: S,
}

impl MacOsMemoryStats {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: VmStatsSource> MacOsMemoryStats<S> {
    pub fn with_source(source: S) -> Self {
        Self { source }
    }
}

impl<S: VmStatsSource> OsStat for MacOsMemoryStats<S> {
    fn name(&self) -> &str {
        "Free pages"
    }

    fn stat(&self) -> StatResult<StatValue> {
        let vm = self
            .source
            .host_vm_statistics()
            .map_err(|e| StatError::native(QUERY, e))?;
        debug!(
            free = vm.free_count,
            inactive = vm.inactive_count,
            active = vm.active_count,
            wired = vm.wire_count,
            "host VM statistics"
        );
        Ok(StatValue::Count(vm.reclaimable_pages()))
    }
}
