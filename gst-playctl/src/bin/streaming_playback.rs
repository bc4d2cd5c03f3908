// SPDX-FileCopyrightText: 2025 2025 Contributors to the playctl project.
// SPDX-License-Identifier: Apache-2.0

//! Plays a URI with `playbin`, reacting to buffering and clock loss.

use std::process::ExitCode;

use clap::Parser;
use gstplayctl::cli::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    gstplayctl::setup_logging(args.verbose);

    let result = gstplayctl::init().and_then(|()| gstplayctl::streaming::run(&args.streaming_config()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
