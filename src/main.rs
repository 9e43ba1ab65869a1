//! docrest entry point
//!
//! Parses arguments and hands off to the CLI module. Any error is fatal:
//! it is printed to stderr and the process exits with status 1.

use docrest::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
