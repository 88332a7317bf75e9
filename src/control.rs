//! The "set power" and "current power" use cases.

use client::RegisterClient;
use data::{PowerReport, RegisterMap};
use errors::*;
use power::{counters_to_power, power_to_counters};

/// Drives power consumption through a [`RegisterClient`] and a [`RegisterMap`].
///
/// [`RegisterClient`]: ../client/struct.RegisterClient.html
/// [`RegisterMap`]: ../data/struct.RegisterMap.html
#[derive(Debug, Clone, Default)]
pub struct PowerController {
    client: RegisterClient,
    registers: RegisterMap
}

impl PowerController {
    pub fn new (client: RegisterClient, registers: RegisterMap) -> PowerController {
        PowerController { client, registers }
    }

    pub fn client (&self) -> &RegisterClient { &self.client }
    pub fn registers (&self) -> &RegisterMap { &self.registers }

    /// Current power consumption in milliwatts, derived from the device status register.
    /// An unreachable device reads as `0`.
    pub fn current_power (&self) -> u32 {
        counters_to_power (self.client.query_enabled_count (self.registers.status))
    }

    /// Highest power the device can draw, derived from its configuration register.
    pub fn max_power (&self) -> u32 {
        counters_to_power (self.client.query_max_counters (self.registers.config))
    }

    /// Resets the device and enables as many counters as needed to draw `requested_mw`.
    ///
    /// Fails with [`ErrorKind::CapacityExceeded`] without touching the device if the request
    /// needs more counters than the device reports as available. Otherwise the returned report
    /// carries the power read back from the device.
    ///
    /// [`ErrorKind::CapacityExceeded`]: ../errors/enum.ErrorKind.html#variant.CapacityExceeded
    pub fn set_power (&self, requested_mw: u32) -> Result<PowerReport> {
        let counters = power_to_counters (requested_mw);
        let max_counters = self.client.query_max_counters (self.registers.config);
        if counters > max_counters {
            bail!(ErrorKind::CapacityExceeded (requested_mw, counters_to_power (max_counters)));
        }
        info!("enabling {} counters for {} mW", counters, requested_mw);
        self.client.reset_device (self.registers.reset);
        self.client.enable_counters (self.registers.enable, counters);
        Ok(PowerReport { requested: requested_mw, counters, actual: self.current_power() })
    }
}

/// Parses a power value in milliwatts from the command line.
///
/// ```
/// # use fpgapower::control::parse_power;
/// assert_eq!(parse_power ("500").unwrap(), 500);
/// assert!(parse_power ("abc").is_err());
/// ```
pub fn parse_power (input: &str) -> Result<u32> {
    input.parse::<u32>()
        .map_err (|_| ErrorKind::InvalidInput (input.to_owned()).into())
}
