// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

use std::process::ExitCode;

use clap::Parser;
use pcrmix::config::CliConfig;
use pcrmix::{app, utils};

fn main() -> ExitCode {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // Help and version requests are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    utils::logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if !config.no_gui {
        let defaults = match config.form_defaults() {
            Ok(defaults) => defaults,
            Err(err) => {
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
        };
        match app::run_gui(defaults) {
            Ok(()) => return ExitCode::SUCCESS,
            Err(err) => {
                tracing::warn!("GUI unavailable ({err}); falling back to the command line");
            }
        }
    }

    match app::cli::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("command line flow failed: {err:?}");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
