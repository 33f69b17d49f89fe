// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Error kinds raised by the calculation engine, input validation, and report export.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PcrError {
    #[error("Mix concentration must be 2 or 5 (got {0}).")]
    InvalidMixFactor(u32),

    #[error("Computed DDW volume is negative ({0:.2} µL).")]
    NegativeDiluentVolume(f64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Could not write report to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PcrError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        PcrError::InvalidInput(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PcrError>;
