// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Command-line configuration and the defaults shared by both front ends.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::models::MixFactor;

/// Sample count used when none is given.
pub const DEFAULT_SAMPLES: u32 = 8;
/// Excess percentage used when none is given.
pub const DEFAULT_EXCESS: f64 = 10.0;
/// Mix concentration used when none is given.
pub const DEFAULT_MIX: u32 = 2;

#[derive(Debug, Clone, Parser)]
#[command(name = "pcrmix", version, allow_negative_numbers = true)]
#[command(about = "PCR genotyping master mix calculator")]
pub struct CliConfig {
    /// Number of samples
    #[arg(short = 'n', long)]
    pub samples: Option<u32>,

    /// Excess percentage
    #[arg(short = 'e', long, default_value_t = DEFAULT_EXCESS)]
    pub excess: f64,

    /// Mix concentration (2X or 5X)
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIX)]
    pub mix: u32,

    /// Auto-save report to file
    #[arg(short = 's', long)]
    pub save: Option<PathBuf>,

    /// Force command line interface
    #[arg(long)]
    pub no_gui: bool,

    /// Print the result as JSON instead of the text table
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Initial values for the desktop form.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub samples: u32,
    pub excess: f64,
    pub mix: MixFactor,
    pub save_path: Option<PathBuf>,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            excess: DEFAULT_EXCESS,
            mix: MixFactor::default(),
            save_path: None,
        }
    }
}

impl CliConfig {
    /// Seed the desktop form from the command line.
    ///
    /// A missing sample count takes the default; the form itself flags a bad
    /// excess value.
    ///
    /// # Errors
    ///
    /// `InvalidMixFactor` when `--mix` is not 2 or 5, so the program exits
    /// before any window opens.
    pub fn form_defaults(&self) -> Result<FormDefaults> {
        let mix = MixFactor::try_from(self.mix)?;

        Ok(FormDefaults {
            samples: self.samples.filter(|n| *n >= 1).unwrap_or(DEFAULT_SAMPLES),
            excess: self.excess,
            mix,
            save_path: self.save.clone(),
        })
    }
}
