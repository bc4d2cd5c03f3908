// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Plays a URI through `uridecodebin`, linking its pads as they appear.

use std::process::ExitCode;

use clap::Parser;
use gstplayctl::cli::Args;
use playctl::Termination;

fn main() -> ExitCode {
    let args = Args::parse();
    gstplayctl::setup_logging(args.verbose);

    let result = gstplayctl::init().and_then(|()| gstplayctl::dynamic::run(&args.dynamic_config()));
    match result {
        Ok(Termination::EndOfStream) => ExitCode::SUCCESS,
        // Already reported by the poll loop.
        Ok(Termination::Error { .. }) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
