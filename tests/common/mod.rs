//! An in-process stand-in for the FPGA simulator.

#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::os::unix::net::{UnixListener, UnixStream};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::{env, process, thread};

use fpgapower::codec::Command;
use fpgapower::constants::*;

static NEXT_PEER: AtomicUsize = AtomicUsize::new (0);

/// How the fake peer answers requests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Behaves like the simulator.
    Normal,
    /// Sends one byte less than expected, then hangs up.
    Truncated,
    /// Reads the request but never answers.
    Silent
}

pub struct FakePeer {
    path: PathBuf,
    registers: Arc<Mutex<HashMap<u32, u32>>>,
    received: Arc<Mutex<Vec<Command>>>
}

impl FakePeer {
    pub fn spawn (max_counters: u32, mode: Mode) -> FakePeer {
        let path = env::temp_dir().join (format!("fpgapower-test-{}-{}.sock",
            process::id(), NEXT_PEER.fetch_add (1, Ordering::SeqCst)));
        FakePeer::spawn_at (path, max_counters, mode)
    }

    /// Listens on `path`, replacing any stale socket left there.
    pub fn spawn_at<P: Into<PathBuf>> (path: P, max_counters: u32, mode: Mode) -> FakePeer {
        let _ = ::env_logger::builder().is_test (true).try_init();
        let path = path.into();
        let _ = fs::remove_file (&path);
        let listener = UnixListener::bind (&path).expect ("unable to bind fake peer");

        let mut initial = HashMap::new();
        initial.insert (REGISTER_RESET, 0);
        initial.insert (REGISTER_ENABLE, 0);
        initial.insert (REGISTER_STATUS, 0);
        initial.insert (REGISTER_CONFIG, max_counters);
        let registers = Arc::new (Mutex::new (initial));
        let received = Arc::new (Mutex::new (Vec::new()));

        let (thread_registers, thread_received) = (registers.clone(), received.clone());
        thread::spawn (move || {
            for conn in listener.incoming() {
                let conn = match conn {
                    Ok(conn) => conn,
                    Err(_) => break
                };
                let (registers, received) = (thread_registers.clone(), thread_received.clone());
                thread::spawn (move || serve (conn, mode, &registers, &received));
            }
        });

        FakePeer { path, registers, received }
    }

    pub fn path (&self) -> &Path { &self.path }

    pub fn register (&self, address: u32) -> u32 {
        *self.registers.lock().unwrap().get (&address).unwrap_or (&0)
    }

    pub fn set_register (&self, address: u32, value: u32) {
        self.registers.lock().unwrap().insert (address, value);
    }

    /// Every command received so far, in order.
    pub fn received (&self) -> Vec<Command> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for FakePeer {
    fn drop (&mut self) {
        let _ = fs::remove_file (&self.path);
    }
}

fn serve (
    mut conn: UnixStream,
    mode: Mode,
    registers: &Mutex<HashMap<u32, u32>>,
    received: &Mutex<Vec<Command>>
) {
    loop {
        let mut frame = vec![0_u8; READ_FRAME_LEN];
        if conn.read_exact (&mut frame).is_err() {
            return
        }
        if frame[0] == OPCODE_WRITE {
            let mut value = [0_u8; 4];
            if conn.read_exact (&mut value).is_err() {
                return
            }
            frame.extend_from_slice (&value);
        }
        let command = Command::decode (&frame).expect ("fake peer got a malformed frame");
        received.lock().unwrap().push (command);

        let response = match mode {
            Mode::Silent => continue,
            _ => apply (command, &mut registers.lock().unwrap())
        };
        let response = match mode {
            Mode::Truncated => &response[..response.len() - 1],
            _ => &response[..]
        };
        if conn.write_all (response).is_err() || mode == Mode::Truncated {
            return
        }
    }
}

// Same semantics as the simulator: the status register mirrors the number of bits set in the
// enable register, and raising the reset line clears both.
fn apply (command: Command, registers: &mut HashMap<u32, u32>) -> Vec<u8> {
    match command {
        Command::Write(address, value) => {
            registers.insert (address, value);
            if address == REGISTER_ENABLE {
                registers.insert (REGISTER_STATUS, value.count_ones());
            } else if address == REGISTER_RESET && value == 1 {
                registers.insert (REGISTER_ENABLE, 0);
                registers.insert (REGISTER_STATUS, 0);
            }
            vec![0]
        },
        Command::Read(address) => {
            if address == REGISTER_STATUS {
                let enabled = registers.get (&REGISTER_ENABLE).cloned().unwrap_or (0).count_ones();
                registers.insert (REGISTER_STATUS, enabled);
            }
            registers.get (&address).cloned().unwrap_or (0).to_be_bytes().to_vec()
        }
    }
}
