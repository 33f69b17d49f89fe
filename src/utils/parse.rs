// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Text-to-number conversion for form fields and terminal prompts.

use crate::error::{PcrError, Result};

/// Parse a sample count; must be a whole number of at least 1.
pub fn parse_samples(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let count: u32 = trimmed
        .parse()
        .map_err(|_| PcrError::invalid_input(format!("'{trimmed}' is not a whole number of samples")))?;
    if count < 1 {
        return Err(PcrError::invalid_input("sample count must be at least 1"));
    }
    Ok(count)
}

/// Parse an excess percentage; must be a finite, non-negative number.
pub fn parse_excess(text: &str) -> Result<f64> {
    let trimmed = text.trim().trim_end_matches('%').trim_end();
    let excess: f64 = trimmed
        .parse()
        .map_err(|_| PcrError::invalid_input(format!("'{trimmed}' is not a valid excess percentage")))?;
    if !excess.is_finite() || excess < 0.0 {
        return Err(PcrError::invalid_input("excess percentage cannot be negative"));
    }
    Ok(excess)
}

/// Parse a raw mix factor, accepting an optional `X` suffix (`"5"`, `"5X"`).
///
/// Only the number is checked here; whether it is a supported factor is
/// decided by the engine.
pub fn parse_mix(text: &str) -> Result<u32> {
    let trimmed = text.trim();
    let digits = trimmed
        .strip_suffix(['X', 'x'])
        .unwrap_or(trimmed)
        .trim_end();
    digits
        .parse()
        .map_err(|_| PcrError::invalid_input(format!("'{trimmed}' is not a mix concentration")))
}
