#[macro_use]
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate fpgapower;

use std::process;
use env_logger::Env;
use fpgapower::control::{parse_power, PowerController};
use fpgapower::errors::{chain_summary, ErrorKind};

const EXAMPLES: &'static str = r#"EXAMPLES:
    fpgapower 500    Set power consumption to 500 mW
    fpgapower        Print current power consumption

Every counter enabled on the device draws 10 mW, requests are rounded up to the next 10 mW.
Set RUST_LOG to tune diagnostics (e.g. RUST_LOG=debug)."#;

fn main() {
    let mut app = clap_app!(fpgapower =>
        (@setting DeriveDisplayOrder)
        (version: crate_version!())
        (about: "Controls the simulated power consumption of an FPGA")
        (after_help: EXAMPLES)
        (@arg verbose: -v --verbose "Logs every register access to stderr")
        (@arg power:
            "Power consumption to set, in milliwatts. Prints the current consumption if omitted")
    );
    let args = app.clone().get_matches();
    init_logging (args.is_present ("verbose"));

    let controller = PowerController::default();
    match args.value_of ("power") {
        None => print_power (controller.current_power()),
        Some("help") => {
            if let Err(error) = app.print_help() {
                eprintln!("{}", error);
                process::exit (1);
            }
            println!("");
        },
        Some(power) => {
            match parse_power (power).and_then (|power| controller.set_power (power)) {
                Ok(report) => {
                    debug!("{:#}", report);
                    print_power (report.actual)
                },
                Err(error) => {
                    eprintln!("Error: {}", chain_summary (&error));
                    // A malformed value is a usage error, the rest are device errors.
                    if let ErrorKind::InvalidInput(_) = *error.kind() {
                        eprintln!("\n{}", args.usage());
                    }
                    process::exit (1);
                }
            }
        }
    }
}

fn print_power (power_mw: u32) {
    println!("Current power consumption is {} mW", power_mw);
}

fn init_logging (verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env (Env::default().default_filter_or (default_level))
        .try_init();
}
