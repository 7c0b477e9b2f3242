// src/main.rs
use clap::Parser;
use std::process::ExitCode;

use sumsort::args::Args;
use sumsort::error::Result;
use sumsort::input;

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let expression = input::read_expression(args)?;
    Ok(sumsort_core::normalize(&expression)?)
}
