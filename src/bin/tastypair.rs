//! TastyPair CLI binary.

use std::env;
use std::io::Write;
use std::process;

use clap::Parser;
use env_logger::Builder;

use tastypair::cli::args::TastyPairArgs;
use tastypair::cli::commands::execute_command;

/// Send logs to stderr so JSON on stdout stays clean.
fn init_logging(args: &TastyPairArgs) {
    let mut builder = Builder::new();
    builder.filter_level(args.log_level());

    // An explicit RUST_LOG replaces the -q/-v level entirely.
    if env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    }

    builder
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

fn main() {
    let args = TastyPairArgs::parse();
    init_logging(&args);

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
