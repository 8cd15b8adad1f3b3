//! `kinetic-hull` binary: reads stdin, prints the query result to stdout.

use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use hull_cli::{run, Cli, CliResult};

fn execute(cli: &Cli) -> CliResult<()> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(cli, &input, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
