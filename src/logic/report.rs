// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Plain-text report rendering and export.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{PcrError, Result};
use crate::logic::mastermix::CalculationResult;
use crate::models::CalculationRequest;

/// Width of the `=`/`-` separator rules.
const RULE_WIDTH: usize = 50;

/// Render the fixed-width report table for a calculation.
///
/// Rows follow the per-sample ingredient order; the total row shows the
/// recipe's per-sample volume next to the summed master-mix volume.
pub fn format_report(request: &CalculationRequest, result: &CalculationResult) -> String {
    let mut lines = vec![
        format!(
            "PCR Report | Samples: {} | Excess: {}% | Mix: {}",
            request.sample_count(),
            format_percent(request.excess_percent()),
            request.mix_factor()
        ),
        "=".repeat(RULE_WIDTH),
        format!("{:<20} | {:>10} | {:>12}", "INGREDIENT", "PER SAMPLE", "MASTER MIX"),
        "-".repeat(RULE_WIDTH),
    ];

    for (per, scaled) in result.per_sample.iter().zip(result.scaled.iter()) {
        lines.push(format!(
            "{:<20} | {:>7.1} µL | {:>9.1} µL",
            per.ingredient.to_string(),
            per.volume_ul,
            scaled.volume_ul
        ));
    }

    lines.push("-".repeat(RULE_WIDTH));
    lines.push(format!(
        "{:<20} | {:>7.1} µL | {:>9.1} µL",
        "TOTAL VOLUME", result.reaction_volume, result.grand_total
    ));

    lines.join("\n")
}

/// Shortest round-trip rendering of the excess: at least one decimal
/// (`10.0`, `12.5`), scientific with a signed two-digit exponent below 1e-4
/// or from 1e16 up (`1e-05`, `2.5e+16`).
fn format_percent(value: f64) -> String {
    let magnitude = value.abs();
    if value != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{value:e}");
        return match sci.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                format!("{mantissa}e{sign}{digits:0>2}")
            }
            None => sci,
        };
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// Write the report text to `path`, replacing any existing file.
///
/// A file left behind by a failed write is removed.
///
/// # Errors
///
/// Returns [`PcrError::Io`] with the destination and cause when the file
/// cannot be created or written.
pub fn export_report(path: &Path, report: &str) -> Result<()> {
    let io_err = |source| PcrError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_err)?;
    if let Err(err) = file.write_all(report.as_bytes()).and_then(|_| file.flush()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(io_err(err));
    }

    tracing::info!(path = %path.display(), bytes = report.len(), "report exported");
    Ok(())
}

/// Suggest a report filename for the save dialog.
pub fn suggested_report_name(request: &CalculationRequest) -> String {
    format!(
        "pcr_mastermix_{}_samples_{}x.txt",
        request.sample_count(),
        request.mix_factor().value()
    )
}

/// Force a specific extension onto a path when it is missing or different.
///
/// Keeps existing matching extension (case-insensitive); otherwise replaces it.
pub fn ensure_extension(mut path: PathBuf, extension: &str) -> PathBuf {
    let replace = !matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case(extension)
    );

    if replace {
        path.set_extension(extension);
    }
    path
}
