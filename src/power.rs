//! Conversions between power (in milliwatts) and enabled counters.
//!
//! Every counter draws [`POWER_PER_COUNTER`] milliwatts.
//!
//! [`POWER_PER_COUNTER`]: ../constants/constant.POWER_PER_COUNTER.html

use constants::POWER_PER_COUNTER;
use num_utils::div_round_up;

/// Number of counters needed to draw at least `power_mw`. Rounds up, so the requested power is
/// never under-provisioned.
///
/// ```
/// # use fpgapower::power::power_to_counters;
/// assert_eq!(power_to_counters (0), 0);
/// assert_eq!(power_to_counters (10), 1);
/// assert_eq!(power_to_counters (11), 2);
/// ```
pub fn power_to_counters (power_mw: u32) -> u32 {
    div_round_up (power_mw, POWER_PER_COUNTER)
}

/// Power drawn by `count` counters, in milliwatts. Wraps around on overflow.
pub fn counters_to_power (count: u32) -> u32 {
    count.wrapping_mul (POWER_PER_COUNTER)
}

#[test]
fn test_power_to_counters() {
    assert_eq!(power_to_counters (0), 0);
    assert_eq!(power_to_counters (1), 1);
    assert_eq!(power_to_counters (9), 1);
    assert_eq!(power_to_counters (10), 1);
    assert_eq!(power_to_counters (11), 2);
    assert_eq!(power_to_counters (500), 50);
    assert_eq!(power_to_counters (1000), 100);
}

#[test]
fn test_counters_round_trip() {
    for count in 0..33 {
        assert_eq!(power_to_counters (counters_to_power (count)), count);
    }
}

#[test]
fn test_power_to_counters_is_monotonic() {
    let mut previous = 0;
    for power in 0..1000 {
        let count = power_to_counters (power);
        assert!(count >= previous);
        assert!(counters_to_power (count) >= power);
        previous = count;
    }
}

#[test]
fn test_counters_to_power() {
    assert_eq!(counters_to_power (0), 0);
    assert_eq!(counters_to_power (32), 320);
    assert_eq!(counters_to_power (50), 500);
    assert_eq!(counters_to_power (::std::u32::MAX), ::std::u32::MAX.wrapping_mul (10));
}
