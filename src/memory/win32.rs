//! `VirtualQuery`-backed probe.

use std::ffi::c_void;
use std::mem::size_of;

use windows::Win32::System::Memory::{
    VirtualQuery, MEMORY_BASIC_INFORMATION, MEM_COMMIT, MEM_RESERVE,
};

use super::{RegionInfo, RegionProbe, RegionState};

/// Queries the current process's address space.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl RegionProbe for SystemProbe {
    fn query(&self, address: usize) -> Option<RegionInfo> {
        let mut info = MEMORY_BASIC_INFORMATION::default();

        // SAFETY: VirtualQuery only writes into `info`, whose size is passed
        // alongside it. The queried address itself is never dereferenced.
        let written = unsafe {
            VirtualQuery(
                Some(address as *const c_void),
                &mut info,
                size_of::<MEMORY_BASIC_INFORMATION>(),
            )
        };
        if written == 0 {
            return None;
        }

        let state = if info.State == MEM_COMMIT {
            RegionState::Committed
        } else if info.State == MEM_RESERVE {
            RegionState::Reserved
        } else {
            RegionState::Free
        };

        Some(RegionInfo {
            base: info.BaseAddress as usize,
            size: info.RegionSize,
            state,
            protection: info.Protect.0,
        })
    }
}
