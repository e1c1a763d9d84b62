//! Simulated address space for tests.

use super::{RegionInfo, RegionProbe, RegionState};

/// Probe over a fixed list of regions
///
/// Addresses outside every region report as a free page, the same answer
/// the operating system gives for unmapped memory.
///
/// ```
/// use overlay_settings::memory::{is_readable_memory, FakeProbe, PAGE_NOACCESS, PAGE_READWRITE};
///
/// let probe = FakeProbe::new()
///     .committed(0x1000, 0x1000, PAGE_READWRITE)
///     .committed(0x2000, 0x1000, PAGE_NOACCESS);
///
/// assert!(is_readable_memory(&probe, 0x1FF8, 8));
/// assert!(!is_readable_memory(&probe, 0x1FFC, 8));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FakeProbe {
    regions: Vec<RegionInfo>,
}

impl FakeProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, base: usize, size: usize, state: RegionState, protection: u32) -> Self {
        self.regions.push(RegionInfo {
            base,
            size,
            state,
            protection,
        });
        self
    }

    pub fn committed(self, base: usize, size: usize, protection: u32) -> Self {
        self.region(base, size, RegionState::Committed, protection)
    }

    pub fn reserved(self, base: usize, size: usize) -> Self {
        self.region(base, size, RegionState::Reserved, 0)
    }
}

impl RegionProbe for FakeProbe {
    fn query(&self, address: usize) -> Option<RegionInfo> {
        let found = self
            .regions
            .iter()
            .find(|r| address >= r.base && address - r.base < r.size)
            .copied();

        Some(found.unwrap_or(RegionInfo {
            base: address,
            size: 1,
            state: RegionState::Free,
            protection: 0,
        }))
    }
}
