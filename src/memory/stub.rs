//! Probe for platforms without page queries.
//!
//! Reports no region for any address, so the gate rejects everything and
//! the host treats every scanned address as absent.

use super::{RegionInfo, RegionProbe};

/// Operating system probe (stub).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemProbe;

impl RegionProbe for SystemProbe {
    fn query(&self, _address: usize) -> Option<RegionInfo> {
        None
    }
}
