//! Typed register operations built on top of [`Session`] and [`Command`].
//!
//! Each operation comes in two flavours. The `try_` methods report every transport failure to
//! the caller. The plain ones never fail: writes that cannot be delivered are dropped and reads
//! that cannot be completed return `0`. In both cases the error chain is logged.
//!
//! [`Session`]: ../transport/struct.Session.html
//! [`Command`]: ../codec/enum.Command.html

use std::path::{Path, PathBuf};
use std::time::Duration;
use codec::{self, Address, Command, Value};
use constants::*;
use errors::*;
use num_utils::low_bits_mask;
use transport::Session;

/// A client for the register interface of the simulated FPGA.
///
/// The client holds no connection: every operation opens its own and closes it before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterClient {
    endpoint: PathBuf,
    timeout: Duration
}

impl Default for RegisterClient {
    /// A client for the well-known simulator socket ([`SOCKET_PATH`]).
    ///
    /// [`SOCKET_PATH`]: ../constants/constant.SOCKET_PATH.html
    fn default () -> RegisterClient {
        RegisterClient::new (SOCKET_PATH)
    }
}

impl RegisterClient {
    /// Creates a client for the peer listening on `endpoint`, using [`DEFAULT_TIMEOUT`].
    ///
    /// [`DEFAULT_TIMEOUT`]: ../constants/constant.DEFAULT_TIMEOUT.html
    pub fn new<P: Into<PathBuf>> (endpoint: P) -> RegisterClient {
        RegisterClient { endpoint: endpoint.into(), timeout: DEFAULT_TIMEOUT }
    }

    /// Replaces the upper bound of a single exchange.
    pub fn with_timeout (mut self, timeout: Duration) -> RegisterClient {
        self.timeout = timeout;
        self
    }

    pub fn endpoint (&self) -> &Path { &self.endpoint }
    pub fn timeout (&self) -> Duration { self.timeout }

    fn transact (&self, command: Command) -> Result<Vec<u8>> {
        let mut session = Session::open (&self.endpoint, self.timeout)?;
        debug!("sending {:?}", command);
        let response = session.exchange (&command.encode(), command.response_len())?;
        session.close();
        Ok(response)
    }

    /// Writes `value` to the register at `address`, returning the status byte sent back by the
    /// peer.
    pub fn try_write_register (&self, address: Address, value: Value) -> Result<u8> {
        let response = self.transact (Command::Write(address, value))
            .chain_err (|| format!("unable to write register 0x{:02x}", address))?;
        codec::decode_write_response (&response)
    }

    /// Reads the register at `address`.
    pub fn try_read_register (&self, address: Address) -> Result<Value> {
        let response = self.transact (Command::Read(address))
            .chain_err (|| format!("unable to read register 0x{:02x}", address))?;
        codec::decode_read_response (&response)
    }

    /// Like [`try_write_register()`], but failures are only logged.
    ///
    /// [`try_write_register()`]: ./struct.RegisterClient.html#method.try_write_register
    pub fn write_register (&self, address: Address, value: Value) {
        debug!("writing 0x{:08x} to register 0x{:02x}", value, address);
        match self.try_write_register (address, value) {
            Ok(status) => debug!("write to register 0x{:02x} completed with status {}",
                address, status),
            Err(error) => warn!("{}", chain_summary (&error))
        }
    }

    /// Like [`try_read_register()`], but failures yield `0`.
    ///
    /// **NOTE**: `0` is also a perfectly valid register value, callers which need to tell the
    /// two apart should use [`try_read_register()`].
    ///
    /// [`try_read_register()`]: ./struct.RegisterClient.html#method.try_read_register
    pub fn read_register (&self, address: Address) -> Value {
        debug!("reading register 0x{:02x}", address);
        match self.try_read_register (address) {
            Ok(value) => {
                debug!("read 0x{:08x} from register 0x{:02x}", value, address);
                value
            },
            Err(error) => {
                warn!("{}", chain_summary (&error));
                0
            }
        }
    }

    /// Pulses the reset line: writes `1`, then `0`. The two writes are independent exchanges.
    pub fn reset_device (&self, reset_register: Address) {
        self.write_register (reset_register, 1);
        self.write_register (reset_register, 0);
    }

    /// Enables the first `count` counters by writing a mask with the `count` low bits set.
    ///
    /// The enable register is 32 bits wide, so counts above [`MAX_ENABLE_BITS`] silently enable
    /// all 32 counters.
    ///
    /// [`MAX_ENABLE_BITS`]: ../constants/constant.MAX_ENABLE_BITS.html
    pub fn enable_counters (&self, enable_register: Address, count: u32) {
        if count > MAX_ENABLE_BITS {
            debug!("capping {} counters to {}", count, MAX_ENABLE_BITS);
        }
        self.write_register (enable_register, low_bits_mask (count));
    }

    /// Number of enabled counters. The device reports the count itself, not a mask.
    pub fn query_enabled_count (&self, status_register: Address) -> u32 {
        self.read_register (status_register)
    }

    /// Maximum number of counters the device supports.
    pub fn query_max_counters (&self, config_register: Address) -> u32 {
        self.read_register (config_register)
    }
}
