//! gramdex CLI entry point.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use gramdex_cli::{Cli, init_logging, report, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", report(&err));
            ExitCode::FAILURE
        }
    }
}
