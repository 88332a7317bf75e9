//! Encoding and decoding of the fixed-layout command frames.
//!
//! | Field                     | Read | Write |
//! |---------------------------|------|-------|
//! | opcode (1 byte)           | `0`  | `1`   |
//! | address (4 bytes, BE)     | yes  | yes   |
//! | value (4 bytes, BE)       | -    | yes   |
//! | response                  | 4-byte BE value | 1-byte status |

use constants::*;
use errors::*;

/// Represents a register address.
pub type Address = u32;
/// Represents the contents of a register.
pub type Value = u32;

/// A single request sent to the peer.
///
/// ```
/// # use fpgapower::codec::Command;
/// assert_eq!(Command::Read(0x0C).encode(), vec![0, 0, 0, 0, 0x0C]);
/// assert_eq!(Command::Write(0x04, 0x1F).encode(), vec![1, 0, 0, 0, 0x04, 0, 0, 0, 0x1F]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Read the register at the given address.
    Read(Address),
    /// Write a value to the register at the given address.
    Write(Address, Value)
}

impl Command {
    pub fn opcode (&self) -> u8 {
        match *self {
            Command::Read(_)     => OPCODE_READ,
            Command::Write(_, _) => OPCODE_WRITE
        }
    }

    pub fn address (&self) -> Address {
        match *self {
            Command::Read(address) | Command::Write(address, _) => address
        }
    }

    /// Size of the encoded frame: 5 bytes for reads, 9 for writes.
    pub fn frame_len (&self) -> usize {
        match *self {
            Command::Read(_)     => READ_FRAME_LEN,
            Command::Write(_, _) => WRITE_FRAME_LEN
        }
    }

    /// Size of the response the peer sends back for this command.
    pub fn response_len (&self) -> usize {
        match *self {
            Command::Read(_)     => READ_RESPONSE_LEN,
            Command::Write(_, _) => WRITE_RESPONSE_LEN
        }
    }

    /// Serializes the command. The returned buffer is always exactly [`frame_len()`] bytes long.
    ///
    /// [`frame_len()`]: ./enum.Command.html#method.frame_len
    pub fn encode (&self) -> Vec<u8> {
        let mut frame = Vec::with_capacity (self.frame_len());
        frame.push (self.opcode());
        frame.extend_from_slice (&self.address().to_be_bytes());
        if let Command::Write(_, value) = *self {
            frame.extend_from_slice (&value.to_be_bytes());
        }
        frame
    }

    /// Parses a frame as produced by [`encode()`]. Trailing bytes are ignored.
    ///
    /// [`encode()`]: ./enum.Command.html#method.encode
    pub fn decode (frame: &[u8]) -> Result<Command> {
        let opcode = match frame.first() {
            Some(opcode) => *opcode,
            None => bail!(ErrorKind::ShortRead(READ_FRAME_LEN))
        };
        match opcode {
            OPCODE_READ => {
                let address = be_u32 (frame.get (1..READ_FRAME_LEN), READ_FRAME_LEN)?;
                Ok(Command::Read(address))
            },
            OPCODE_WRITE => {
                let address = be_u32 (frame.get (1..READ_FRAME_LEN), WRITE_FRAME_LEN)?;
                let value = be_u32 (frame.get (READ_FRAME_LEN..WRITE_FRAME_LEN), WRITE_FRAME_LEN)?;
                Ok(Command::Write(address, value))
            },
            _ => bail!(ErrorKind::UnknownOpcode(opcode))
        }
    }
}

// `expected` is only used to report the full frame size on failure.
fn be_u32 (bytes: Option<&[u8]>, expected: usize) -> Result<u32> {
    match bytes {
        Some(&[b0, b1, b2, b3]) => Ok(u32::from_be_bytes ([b0, b1, b2, b3])),
        _ => Err(ErrorKind::ShortRead(expected).into())
    }
}

/// Decodes the response to a [`Command::Read`]: exactly 4 bytes, big-endian.
///
/// [`Command::Read`]: ./enum.Command.html#variant.Read
pub fn decode_read_response (response: &[u8]) -> Result<Value> {
    if response.len() != READ_RESPONSE_LEN {
        bail!(ErrorKind::ShortRead(READ_RESPONSE_LEN));
    }
    be_u32 (Some(response), READ_RESPONSE_LEN)
}

/// Decodes the response to a [`Command::Write`]: exactly 1 status byte. The status is opaque.
///
/// [`Command::Write`]: ./enum.Command.html#variant.Write
pub fn decode_write_response (response: &[u8]) -> Result<u8> {
    match *response {
        [status] => Ok(status),
        _ => bail!(ErrorKind::ShortRead(WRITE_RESPONSE_LEN))
    }
}
