// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the desktop form and the command line.

pub mod logger;
pub mod parse;

/// Parse user-entered form/prompt values.
pub use parse::{parse_excess, parse_mix, parse_samples};
