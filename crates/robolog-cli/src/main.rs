// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! robolog: structured view of Robot Framework console output
//!
//! Reads a captured console log (or stdin), prints it as a tree of suites and
//! tests, and exits non-zero when any test failed.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use robolog_cli::config::Config;
use robolog_cli::opener::SystemOpener;

fn main() -> anyhow::Result<ExitCode> {
    let config = Config::parse();

    // Logs go to stderr so stdout carries only the rendered output
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;

    let summary = robolog_cli::run(&config, &SystemOpener, &mut io::stdout().lock())?;

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
