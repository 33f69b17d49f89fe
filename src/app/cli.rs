// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Terminal front end: batch mode from flags, or interactive prompts.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::{CliConfig, DEFAULT_EXCESS, DEFAULT_MIX, DEFAULT_SAMPLES};
use crate::logic::mastermix::{CalculationResult, compute_request};
use crate::logic::report::{export_report, format_report};
use crate::models::CalculationRequest;
use crate::utils::{parse_excess, parse_mix, parse_samples};

/// JSON document printed by `--json`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    request: &'a CalculationRequest,
    result: &'a CalculationResult,
}

/// Run the command-line flow on the process stdin/stdout.
pub fn run(config: &CliConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(config, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the command-line flow against arbitrary input/output streams.
///
/// Prompts for the inputs when no sample count was given on the command
/// line, prints the report (or JSON), and writes the report file when
/// `--save` is set.
pub fn run_with(config: &CliConfig, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let request = match config.samples {
        Some(samples) => CalculationRequest::new(samples, config.excess, config.mix)?,
        None => prompt_request(input, output)?,
    };
    tracing::debug!(?request, "running calculation");

    let result = compute_request(&request)?;
    let report = format_report(&request, &result);

    if config.json {
        let doc = JsonOutput {
            request: &request,
            result: &result,
        };
        let json = serde_json::to_string_pretty(&doc).context("Failed to serialize result")?;
        writeln!(output, "{json}").context("Failed to write to standard output")?;
    } else {
        write!(output, "\n{report}\n\n").context("Failed to write to standard output")?;
    }

    if let Some(path) = &config.save {
        export_report(path, &report)?;
        writeln!(output, "[+] Saved to {}", path.display())
            .context("Failed to write to standard output")?;
    }

    Ok(())
}

/// Ask for samples, excess and mix; empty answers take the defaults.
fn prompt_request(input: &mut impl BufRead, output: &mut impl Write) -> Result<CalculationRequest> {
    writeln!(output, "--- PCR Calculator (CLI) ---").context("Failed to write prompt")?;

    let samples_in = prompt(input, output, &format!("Number of samples [{DEFAULT_SAMPLES}]: "))?;
    let excess_in = prompt(input, output, &format!("Excess % [{DEFAULT_EXCESS:.1}]: "))?;
    let mix_in = prompt(input, output, &format!("Mix (2 or 5) [{DEFAULT_MIX}]: "))?;

    let samples = if samples_in.is_empty() {
        DEFAULT_SAMPLES
    } else {
        parse_samples(&samples_in)?
    };
    let excess = if excess_in.is_empty() {
        DEFAULT_EXCESS
    } else {
        parse_excess(&excess_in)?
    };
    let mix = if mix_in.is_empty() {
        DEFAULT_MIX
    } else {
        parse_mix(&mix_in)?
    };

    Ok(CalculationRequest::new(samples, excess, mix)?)
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> Result<String> {
    write!(output, "{label}").context("Failed to write prompt")?;
    output.flush().context("Failed to write prompt")?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from standard input")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use clap::Parser;
    use tempfile::TempDir;

    use super::*;
    use crate::error::PcrError;

    fn run_capture(args: &[&str], stdin: &str) -> (Result<()>, String) {
        let mut argv = vec!["pcrmix", "--no-gui"];
        argv.extend_from_slice(args);
        let config = CliConfig::try_parse_from(argv).unwrap();

        let mut input = Cursor::new(stdin.as_bytes().to_vec());
        let mut output = Vec::new();
        let res = run_with(&config, &mut input, &mut output);
        (res, String::from_utf8(output).unwrap())
    }

    #[test]
    fn batch_mode_prints_report_between_blank_lines() {
        let (res, out) = run_capture(&["-n", "8"], "");

        res.unwrap();
        assert!(out.starts_with("\nPCR Report | Samples: 8 | Excess: 10.0% | Mix: 2X\n"));
        assert!(out.ends_with("TOTAL VOLUME         |    11.0 µL |      97.0 µL\n\n"));
        assert!(!out.contains("PCR Calculator (CLI)"));
    }

    #[test]
    fn empty_prompts_take_defaults() {
        let (res, out) = run_capture(&[], "\n\n\n");

        res.unwrap();
        assert!(out.contains("--- PCR Calculator (CLI) ---"));
        assert!(out.contains("Number of samples [8]: "));
        assert!(out.contains("Excess % [10.0]: "));
        assert!(out.contains("Mix (2 or 5) [2]: "));
        assert!(out.contains("PCR Report | Samples: 8 | Excess: 10.0% | Mix: 2X"));
    }

    #[test]
    fn prompts_accept_entered_values() {
        let (res, out) = run_capture(&[], "1\n0\n5X\n");

        res.unwrap();
        assert!(out.contains("PCR Report | Samples: 1 | Excess: 0.0% | Mix: 5X"));
        assert!(out.contains("TOTAL VOLUME         |    11.0 µL |      11.0 µL"));
    }

    #[test]
    fn non_numeric_prompt_answer_is_invalid_input() {
        let (res, _) = run_capture(&[], "eight\n\n\n");

        let err = res.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PcrError>(),
            Some(PcrError::InvalidInput(_))
        ));
    }

    #[test]
    fn unsupported_mix_flag_fails() {
        let (res, out) = run_capture(&["-n", "4", "-m", "3"], "");

        let err = res.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PcrError>(),
            Some(PcrError::InvalidMixFactor(3))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn negative_excess_flag_fails() {
        let (res, _) = run_capture(&["-n", "4", "-e", "-5"], "");

        let err = res.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PcrError>(),
            Some(PcrError::InvalidInput(_))
        ));
    }

    #[test]
    fn save_flag_writes_report_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("mix.txt");
        let path_arg = path.to_string_lossy().into_owned();

        let (res, out) = run_capture(&["-n", "8", "-s", &path_arg], "");

        res.unwrap();
        let saved = std::fs::read_to_string(&path).unwrap();
        assert!(out.contains(&format!("\n{saved}\n\n")));
        assert!(out.ends_with(&format!("[+] Saved to {}\n", path.display())));
    }

    #[test]
    fn save_to_unwritable_path_reports_io_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no_such_dir").join("mix.txt");
        let path_arg = path.to_string_lossy().into_owned();

        let (res, _) = run_capture(&["-n", "8", "-s", &path_arg], "");

        let err = res.unwrap_err();
        assert!(matches!(err.downcast_ref::<PcrError>(), Some(PcrError::Io { .. })));
    }

    #[test]
    fn json_flag_prints_structured_result() {
        let (res, out) = run_capture(&["-n", "8", "--json"], "");

        res.unwrap();
        let doc: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(doc["request"]["mix_factor"], 2);
        assert_eq!(doc["result"]["grand_total"], 97.0);
        assert_eq!(doc["result"]["per_sample"][0]["ingredient"], "DDW");
    }
}
