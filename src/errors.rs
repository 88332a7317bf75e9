//! Error types, generated through `error_chain`.

error_chain! {
    foreign_links {
        Io(::std::io::Error);
    }

    errors {
        // The peer endpoint is missing or refused the connection.
        Connection(endpoint: String) {
            description("unable to connect to the FPGA simulator")
            display("unable to connect to the FPGA simulator at '{}'", endpoint)
        }
        // The peer closed the connection before sending the full response.
        ShortRead(expected: usize) {
            description("truncated response from the FPGA simulator")
            display("truncated response from the FPGA simulator (expected {} bytes)", expected)
        }
        // The exchange did not complete within the configured timeout.
        TimedOut {
            description("timed out waiting for the FPGA simulator")
            display("timed out waiting for the FPGA simulator")
        }
        UnknownOpcode(opcode: u8) {
            description("unknown command opcode")
            display("unknown command opcode: {}", opcode)
        }
        // A power value which is not a non-negative integer.
        InvalidInput(input: String) {
            description("invalid power value")
            display("Invalid power value: '{}'", input)
        }
        // Both values are in milliwatts.
        CapacityExceeded(requested: u32, maximum: u32) {
            description("requested power exceeds the device capacity")
            display("Requested power ({} mW) exceeds maximum possible power ({} mW)",
                requested, maximum)
        }
    }
}

/// Every message in the chain of `error`, outermost first, joined by `": "`.
///
/// Unlike `display_chain()`, the backtrace is never included.
pub fn chain_summary (error: &Error) -> String {
    error.iter()
        .map (|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join (": ")
}

#[test]
fn test_chain_summary() {
    let error: Error = ErrorKind::ShortRead (4).into();
    let error = Error::with_chain (error, "unable to read register 0x08");
    assert_eq!(chain_summary (&error),
        "unable to read register 0x08: truncated response from the FPGA simulator (expected 4 bytes)");
}
