// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! PCR master-mix calculator: volume engine, text report, and the desktop
//! and terminal front ends built on them.

pub mod app;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod mvu;
pub mod ui;
pub mod utils;

pub use error::{PcrError, Result};
pub use logic::mastermix::{CalculationResult, compute};
pub use logic::report::format_report;
