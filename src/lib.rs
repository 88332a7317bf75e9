//! A tool to control the simulated power consumption of an FPGA by enabling counters through
//! its register interface.
//!
//! Registers are accessed through a tiny binary protocol spoken over a local socket: every
//! operation opens a connection, sends one frame, waits for the reply and closes the connection.

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
extern crate futures;
extern crate tokio_core;
extern crate tokio_io;
extern crate tokio_timer;
extern crate tokio_uds;

pub mod errors;
pub mod constants;
pub mod codec;
pub mod transport;
pub mod client;
pub mod power;
pub mod data;
pub mod control;
mod num_utils;
