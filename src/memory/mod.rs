// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Readable-memory gate
//!
//! The host finds object addresses by scanning game memory, so an address
//! may point at a page that was freed, never committed, or is not readable.
//! Every such address goes through `is_readable_memory` before the host
//! dereferences it; an address that fails is treated as absent.
//!
//! # Rules
//!
//! - A null address always fails.
//! - The page holding the first byte must be committed with one of
//!   `PAGE_READONLY`, `PAGE_READWRITE`, `PAGE_EXECUTE_READ` or
//!   `PAGE_EXECUTE_READWRITE`. The `PAGE_GUARD`, `PAGE_NOCACHE` and
//!   `PAGE_WRITECOMBINE` modifier bits are ignored.
//! - For reads longer than one byte, the page holding the last byte is
//!   checked the same way. A range that wraps the address space fails.
//!
//! # Probes
//!
//! Page metadata comes from a [`RegionProbe`]. [`SystemProbe`] asks the
//! operating system (`VirtualQuery` on Windows); [`FakeProbe`] serves
//! simulated regions to tests.

#![allow(unsafe_code)]

mod fake;
#[cfg(not(windows))]
mod stub;
#[cfg(windows)]
mod win32;

pub use fake::FakeProbe;
#[cfg(not(windows))]
pub use stub::SystemProbe;
#[cfg(windows)]
pub use win32::SystemProbe;

use std::mem::size_of;
use tracing::trace;

pub const PAGE_NOACCESS: u32 = 0x01;
pub const PAGE_READONLY: u32 = 0x02;
pub const PAGE_READWRITE: u32 = 0x04;
pub const PAGE_WRITECOPY: u32 = 0x08;
pub const PAGE_EXECUTE_READ: u32 = 0x20;
pub const PAGE_EXECUTE_READWRITE: u32 = 0x40;
pub const PAGE_GUARD: u32 = 0x100;
pub const PAGE_NOCACHE: u32 = 0x200;
pub const PAGE_WRITECOMBINE: u32 = 0x400;

const PROTECTION_MODIFIERS: u32 = PAGE_GUARD | PAGE_NOCACHE | PAGE_WRITECOMBINE;

/// Bytes checked by [`is_readable`]: one pointer-sized value.
pub const DEFAULT_PROBE_SIZE: usize = 8;

/// Allocation state of a region.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegionState {
    Committed,
    Reserved,
    Free,
}

/// Metadata for the region containing a queried address.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RegionInfo {
    pub base: usize,
    pub size: usize,
    pub state: RegionState,
    /// Raw `PAGE_*` protection flags
    pub protection: u32,
}

impl RegionInfo {
    /// Committed with a readable protection, modifier bits ignored.
    pub fn is_readable(&self) -> bool {
        self.state == RegionState::Committed
            && matches!(
                self.protection & !PROTECTION_MODIFIERS,
                PAGE_READONLY | PAGE_READWRITE | PAGE_EXECUTE_READ | PAGE_EXECUTE_READWRITE
            )
    }
}

/// Source of page metadata for an address.
pub trait RegionProbe {
    /// Region containing `address`, or `None` if the address cannot be queried.
    fn query(&self, address: usize) -> Option<RegionInfo>;
}

/// Checks that `size` bytes starting at `address` can be read.
pub fn is_readable_memory<P: RegionProbe + ?Sized>(probe: &P, address: usize, size: usize) -> bool {
    if address == 0 {
        return false;
    }
    if !page_is_readable(probe, address) {
        return false;
    }
    if size > 1 {
        let Some(last) = address.checked_add(size - 1) else {
            trace!(address, size, "probe range wraps the address space");
            return false;
        };
        return page_is_readable(probe, last);
    }
    true
}

/// [`is_readable_memory`] with the operating system probe and an 8-byte range.
pub fn is_readable(address: usize) -> bool {
    is_readable_memory(&SystemProbe, address, DEFAULT_PROBE_SIZE)
}

/// Reads a `T` from `address` in this process after validating it.
pub fn read_checked<T: Copy>(address: usize) -> Option<T> {
    // SAFETY: SystemProbe describes this process's own address space.
    unsafe { read_with_probe(&SystemProbe, address) }
}

/// Reads a `T` from `address` if `probe` reports the whole range readable.
///
/// # Safety
///
/// `probe` must describe the current process's address space: a region it
/// reports as committed and readable must really be mapped and readable for
/// the duration of the call.
pub unsafe fn read_with_probe<T: Copy, P: RegionProbe + ?Sized>(
    probe: &P,
    address: usize,
) -> Option<T> {
    if !is_readable_memory(probe, address, size_of::<T>()) {
        return None;
    }
    Some(std::ptr::read_unaligned(address as *const T))
}

fn page_is_readable<P: RegionProbe + ?Sized>(probe: &P, address: usize) -> bool {
    match probe.query(address) {
        Some(region) if region.is_readable() => true,
        Some(region) => {
            trace!(address, ?region, "page not readable");
            false
        }
        None => {
            trace!(address, "page query failed");
            false
        }
    }
}

#[cfg(test)]
mod tests;
