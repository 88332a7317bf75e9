//! End-to-end "set power" scenarios against an in-process fake peer.

extern crate env_logger;
extern crate fpgapower;

mod common;

use fpgapower::client::RegisterClient;
use fpgapower::codec::Command;
use fpgapower::constants::*;
use fpgapower::control::PowerController;
use fpgapower::data::{PowerReport, RegisterMap};
use fpgapower::errors::*;
use common::{FakePeer, Mode};

fn controller_for (peer: &FakePeer) -> PowerController {
    PowerController::new (RegisterClient::new (peer.path()), RegisterMap::default())
}

#[test]
fn request_within_enable_width() {
    let peer = FakePeer::spawn (256, Mode::Normal);
    let controller = controller_for (&peer);
    let report = controller.set_power (55).unwrap();
    assert_eq!(report, PowerReport { requested: 55, counters: 6, actual: 60 });
    assert_eq!(peer.register (REGISTER_ENABLE), 0x3F);
    assert_eq!(controller.current_power(), 60);
}

#[test]
fn request_beyond_enable_width_is_capped_by_the_register() {
    let peer = FakePeer::spawn (100, Mode::Normal);
    let controller = controller_for (&peer);
    let report = controller.set_power (500).unwrap();
    assert_eq!(report, PowerReport { requested: 500, counters: 50, actual: 320 });
    assert_eq!(peer.received(), vec![
        Command::Read(REGISTER_CONFIG),
        Command::Write(REGISTER_RESET, 1),
        Command::Write(REGISTER_RESET, 0),
        Command::Write(REGISTER_ENABLE, 0xFFFF_FFFF),
        Command::Read(REGISTER_STATUS)
    ]);
}

#[test]
fn request_beyond_capacity_leaves_device_untouched() {
    let peer = FakePeer::spawn (50, Mode::Normal);
    peer.set_register (REGISTER_ENABLE, 0x7);
    let controller = controller_for (&peer);
    let error = controller.set_power (1000).unwrap_err();
    match *error.kind() {
        ErrorKind::CapacityExceeded(1000, 500) => (),
        ref kind => panic!("unexpected error: {:?}", kind)
    }
    assert!(error.to_string().contains ("exceeds maximum possible power (500 mW)"));
    assert_eq!(peer.received(), vec![Command::Read(REGISTER_CONFIG)]);
    assert_eq!(peer.register (REGISTER_ENABLE), 0x7);
}

#[test]
fn exact_capacity_is_accepted() {
    let peer = FakePeer::spawn (20, Mode::Normal);
    let controller = controller_for (&peer);
    assert_eq!(controller.max_power(), 200);
    assert_eq!(controller.set_power (200).unwrap().actual, 200);
    assert!(controller.set_power (201).is_err());
}

#[test]
fn zero_power_disables_everything() {
    let peer = FakePeer::spawn (256, Mode::Normal);
    peer.set_register (REGISTER_ENABLE, 0xFFFF);
    let controller = controller_for (&peer);
    assert_eq!(controller.current_power(), 160);
    assert_eq!(controller.set_power (0).unwrap().actual, 0);
    assert_eq!(peer.register (REGISTER_ENABLE), 0);
}

#[test]
fn custom_register_map_is_honoured() {
    let peer = FakePeer::spawn (256, Mode::Normal);
    let registers = RegisterMap { status: REGISTER_CONFIG, ..RegisterMap::default() };
    let controller = PowerController::new (RegisterClient::new (peer.path()), registers);
    assert_eq!(controller.current_power(), 2560);
}
