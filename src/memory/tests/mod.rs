//! Memory gate tests
//!
//! Run against `FakeProbe`, so the rules are checked the same way on
//! every platform. `read_with_probe` is exercised on a real local value.

use crate::memory::*;

const PAGE: usize = 0x1000;

/// Three readable pages with an inaccessible page and a reserved page after them.
fn probe() -> FakeProbe {
    FakeProbe::new()
        .committed(0x1_0000, PAGE, PAGE_READONLY)
        .committed(0x1_1000, PAGE, PAGE_READWRITE)
        .committed(0x1_2000, PAGE, PAGE_EXECUTE_READ)
        .committed(0x1_3000, PAGE, PAGE_NOACCESS)
        .reserved(0x1_4000, PAGE)
}

#[test]
fn test_null_always_fails() {
    let probe = FakeProbe::new().committed(0, PAGE, PAGE_READWRITE);
    assert!(!is_readable_memory(&probe, 0, 1));
    assert!(!is_readable_memory(&probe, 0, 8));
}

#[test]
fn test_readable_protections() {
    let probe = probe();
    assert!(is_readable_memory(&probe, 0x1_0010, 8));
    assert!(is_readable_memory(&probe, 0x1_1010, 8));
    assert!(is_readable_memory(&probe, 0x1_2010, 8));

    let rwx = FakeProbe::new().committed(PAGE, PAGE, PAGE_EXECUTE_READWRITE);
    assert!(is_readable_memory(&rwx, PAGE, 8));
}

#[test]
fn test_unreadable_protections() {
    let probe = probe();
    assert!(!is_readable_memory(&probe, 0x1_3010, 1));

    // Copy-on-write pages are not treated as readable
    let write_copy = FakeProbe::new().committed(PAGE, PAGE, PAGE_WRITECOPY);
    assert!(!is_readable_memory(&write_copy, PAGE, 8));
}

#[test]
fn test_uncommitted_regions_fail() {
    let probe = probe();
    assert!(!is_readable_memory(&probe, 0x1_4000, 1));
    // Outside every region: free
    assert!(!is_readable_memory(&probe, 0x9_0000, 1));

    let reserved_rw = FakeProbe::new().region(PAGE, PAGE, RegionState::Reserved, PAGE_READWRITE);
    assert!(!is_readable_memory(&reserved_rw, PAGE, 1));
}

#[test]
fn test_modifier_bits_ignored() {
    for modifier in [PAGE_GUARD, PAGE_NOCACHE, PAGE_WRITECOMBINE] {
        let probe = FakeProbe::new().committed(PAGE, PAGE, PAGE_READWRITE | modifier);
        assert!(is_readable_memory(&probe, PAGE, 8), "0x{:X}", modifier);

        let no_access = FakeProbe::new().committed(PAGE, PAGE, PAGE_NOACCESS | modifier);
        assert!(!is_readable_memory(&no_access, PAGE, 8));
    }
}

#[test]
fn test_range_spanning_readable_pages() {
    let probe = probe();
    // Last byte lands on the next (readable) page
    assert!(is_readable_memory(&probe, 0x1_0FFC, 8));
}

#[test]
fn test_last_byte_on_unreadable_page() {
    let probe = probe();
    assert!(is_readable_memory(&probe, 0x1_2FF8, 8));
    assert!(!is_readable_memory(&probe, 0x1_2FFC, 8));
    assert!(!is_readable_memory(&probe, 0x1_2FFF, 2));
}

#[test]
fn test_size_zero_and_one_check_first_page_only() {
    let probe = probe();
    assert!(is_readable_memory(&probe, 0x1_2FFF, 1));
    assert!(is_readable_memory(&probe, 0x1_2FFF, 0));
}

#[test]
fn test_range_wrapping_address_space_fails() {
    let probe = FakeProbe::new().committed(usize::MAX - PAGE + 1, PAGE, PAGE_READWRITE);
    assert!(is_readable_memory(&probe, usize::MAX - 7, 8));
    assert!(!is_readable_memory(&probe, usize::MAX - 3, 8));
}

#[test]
fn test_region_info_is_readable() {
    let region = RegionInfo {
        base: PAGE,
        size: PAGE,
        state: RegionState::Committed,
        protection: PAGE_READONLY | PAGE_GUARD,
    };
    assert!(region.is_readable());
    assert!(!RegionInfo {
        state: RegionState::Free,
        ..region
    }
    .is_readable());
}

#[test]
fn test_read_with_probe_reads_value() {
    let value: u64 = 0x0123_4567_89AB_CDEF;
    let address = &value as *const u64 as usize;
    let probe = FakeProbe::new().committed(address, std::mem::size_of::<u64>(), PAGE_READWRITE);

    // SAFETY: the probe only reports `value`, which lives for the whole call.
    let read = unsafe { read_with_probe::<u64, _>(&probe, address) };
    assert_eq!(read, Some(value));
}

#[test]
fn test_read_with_probe_refuses_unreadable() {
    let value: u32 = 7;
    let address = &value as *const u32 as usize;
    let probe = FakeProbe::new().committed(address, 4, PAGE_NOACCESS);

    // SAFETY: nothing is dereferenced when the probe rejects the range.
    let read = unsafe { read_with_probe::<u32, _>(&probe, address) };
    assert_eq!(read, None);
    assert_eq!(unsafe { read_with_probe::<u32, _>(&probe, 0) }, None);
}

#[cfg(not(windows))]
#[test]
fn test_system_probe_without_os_support() {
    let value = 42u32;
    // No page metadata is available, so every address is rejected
    assert!(!is_readable(&value as *const u32 as usize));
    assert_eq!(read_checked::<u32>(&value as *const u32 as usize), None);
}

#[cfg(windows)]
#[test]
fn test_system_probe_reads_own_stack() {
    let value = 42u32;
    let address = &value as *const u32 as usize;
    assert!(is_readable(address));
    assert_eq!(read_checked::<u32>(address), Some(42));
    assert!(!is_readable(0));
}
