//! Register addresses and other constants.
//! # Note about register addresses
//! The addresses must match the memory map of the simulator. Registers are 32 bits wide and
//! 4-byte aligned, hence the stride of `4` between consecutive addresses.

use std::time::Duration;

/// Writing `1` then `0` here pulses the reset line.
pub const REGISTER_RESET:  u32 = 0x00;
/// Counter enable mask. Bit `i` set means counter `i` is running.
pub const REGISTER_ENABLE: u32 = 0x04;
/// Number of counters currently enabled, as reported by the device.
pub const REGISTER_STATUS: u32 = 0x08;
/// Maximum number of counters the device can enable.
pub const REGISTER_CONFIG: u32 = 0x0C;

/// Well-known path of the simulator socket.
pub const SOCKET_PATH: &'static str = "/tmp/fpga_sim.sock";

pub const OPCODE_READ:  u8 = 0;
pub const OPCODE_WRITE: u8 = 1;

/// Opcode + address.
pub const READ_FRAME_LEN:  usize = 5;
/// Opcode + address + value.
pub const WRITE_FRAME_LEN: usize = 9;
/// A read is answered with the big-endian register value.
pub const READ_RESPONSE_LEN:  usize = 4;
/// A write is answered with a single status byte.
pub const WRITE_RESPONSE_LEN: usize = 1;

/// Power drawn by a single enabled counter, in milliwatts.
pub const POWER_PER_COUNTER: u32 = 10;
/// Width of the enable register: no more counters than this can be enabled at once.
pub const MAX_ENABLE_BITS: u32 = 32;

/// Upper bound for a single request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);
