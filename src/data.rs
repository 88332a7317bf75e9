//! Data objects such as the `RegisterMap` and `PowerReport`.

use std::fmt;
use codec::Address;
use constants::*;

/// The addresses of the registers used to control power consumption.
///
/// [`RegisterMap::default()`] returns the memory map of the simulator:
/// ```
/// # use fpgapower::data::RegisterMap;
/// let map = RegisterMap::default();
/// assert_eq!((map.reset, map.enable, map.status, map.config), (0x00, 0x04, 0x08, 0x0C));
/// ```
///
/// [`RegisterMap::default()`]: ./struct.RegisterMap.html#impl-Default
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RegisterMap {
    /// Reset control register.
    pub reset: Address,
    /// Counter enable mask.
    pub enable: Address,
    /// Enabled counter count.
    pub status: Address,
    /// Maximum counter count.
    pub config: Address
}

impl Default for RegisterMap {
    fn default () -> RegisterMap {
        RegisterMap {
            reset:  REGISTER_RESET,
            enable: REGISTER_ENABLE,
            status: REGISTER_STATUS,
            config: REGISTER_CONFIG
        }
    }
}

/// Outcome of a successful "set power" request.
///
/// `actual` is read back from the device after the counters have been enabled, and may differ
/// from `requested` (e.g. when more than 32 counters would be needed).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PowerReport {
    /// Requested power, in milliwatts.
    pub requested: u32,
    /// Number of counters computed for `requested`.
    pub counters: u32,
    /// Power reported by the device, in milliwatts.
    pub actual: u32
}

impl fmt::Display for PowerReport {
    fn fmt (&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            write!(f, "{} mW (requested {} mW, {} counters)", self.actual, self.requested,
                self.counters)
        } else {
            write!(f, "{} mW", self.actual)
        }
    }
}

#[test]
fn test_power_report_display() {
    let report = PowerReport { requested: 500, counters: 50, actual: 320 };
    assert_eq!(format!("{}", report), "320 mW");
    assert_eq!(format!("{:#}", report), "320 mW (requested 500 mW, 50 counters)");
}
