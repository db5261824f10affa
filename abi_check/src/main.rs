//! # abi_check
//!
//! Command-line entry point. Set `RUST_LOG=debug` for parser and checker
//! diagnostics on stderr.

use abi_check::{parse_args, print_usage, run, EXIT_USAGE};
use std::env;
use std::io;
use std::process;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("abi_check");

    let options = parse_args(&args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        if let Err(err) = print_usage(&mut io::stderr(), program) {
            log::warn!("failed to print usage: {}", err);
        }
        process::exit(EXIT_USAGE);
    });

    let stdout = io::stdout();
    let code = run(&options, &mut stdout.lock()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        EXIT_USAGE
    });
    process::exit(code);
}
