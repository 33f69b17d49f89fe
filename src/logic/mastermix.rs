// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Master-mix volume calculation.
//!
//! Per-sample volumes are derived from a fixed reaction recipe, scaled by the
//! sample count and the excess factor, then rounded to the nearest 0.5 µL per
//! ingredient. The grand total is the sum of those rounded volumes.

use serde::Serialize;

use crate::error::{PcrError, Result};
use crate::models::{CalculationRequest, Ingredient, IngredientAmounts, MixFactor};

/// Total reaction volume per sample (µL).
pub const PER_SAMPLE_TOTAL_UL: f64 = 11.0;
/// Volume of each primer per sample (µL).
pub const PRIMER_PER_SAMPLE_UL: f64 = 0.5;
/// Mix volume per sample at the reference concentration (µL).
pub const MIX_REFERENCE_UL: f64 = 6.0;
/// Concentration the reference mix volume is expressed in.
pub const MIX_REFERENCE_FACTOR: f64 = 2.0;

/// Recipe constants injected into the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReactionConstants {
    pub total_per_sample_ul: f64,
    pub primer_per_sample_ul: f64,
    pub mix_reference_ul: f64,
    pub mix_reference_factor: f64,
}

impl ReactionConstants {
    pub const STANDARD: ReactionConstants = ReactionConstants {
        total_per_sample_ul: PER_SAMPLE_TOTAL_UL,
        primer_per_sample_ul: PRIMER_PER_SAMPLE_UL,
        mix_reference_ul: MIX_REFERENCE_UL,
        mix_reference_factor: MIX_REFERENCE_FACTOR,
    };
}

/// Output of one calculation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculationResult {
    /// Volumes for a single reaction.
    pub per_sample: IngredientAmounts,
    /// Rounded master-mix volumes for all samples plus excess.
    pub scaled: IngredientAmounts,
    /// Sum of the rounded `scaled` volumes.
    pub grand_total: f64,
    /// Per-sample reaction volume the recipe was built for.
    pub reaction_volume: f64,
}

/// Round to the nearest 0.5; exact ties go to the even half-step count.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round_ties_even() / 2.0
}

/// Compute volumes from raw inputs with the standard recipe.
///
/// # Errors
///
/// `InvalidMixFactor` when `mix_factor` is not 2 or 5 (checked first),
/// `InvalidInput` for out-of-range counts or excess.
pub fn compute(sample_count: u32, excess_percent: f64, mix_factor: u32) -> Result<CalculationResult> {
    let request = CalculationRequest::new(sample_count, excess_percent, mix_factor)?;
    compute_request(&request)
}

/// Compute volumes for a validated request with the standard recipe.
pub fn compute_request(request: &CalculationRequest) -> Result<CalculationResult> {
    compute_with(&ReactionConstants::STANDARD, request)
}

/// Compute volumes for a validated request with explicit recipe constants.
///
/// # Errors
///
/// Returns [`PcrError::NegativeDiluentVolume`] when the constants leave no
/// room for water in the reaction, and [`PcrError::InvalidInput`] when the
/// scaled volumes overflow.
pub fn compute_with(
    constants: &ReactionConstants,
    request: &CalculationRequest,
) -> Result<CalculationResult> {
    let per_sample = per_sample_volumes(constants, request.mix_factor())?;

    let factor = request.scale_factor();
    let samples = f64::from(request.sample_count());
    let scaled = per_sample.map_volumes(|volume| round_to_half(volume * samples * factor));
    let grand_total = scaled.total();
    if !grand_total.is_finite() {
        return Err(PcrError::invalid_input(
            "sample count and excess give a volume too large to compute",
        ));
    }

    tracing::debug!(
        samples = request.sample_count(),
        excess = request.excess_percent(),
        mix = %request.mix_factor(),
        factor,
        grand_total,
        "computed master mix"
    );

    Ok(CalculationResult {
        per_sample,
        scaled,
        grand_total,
        reaction_volume: constants.total_per_sample_ul,
    })
}

/// Build the single-reaction recipe for `mix_factor`.
fn per_sample_volumes(constants: &ReactionConstants, mix_factor: MixFactor) -> Result<IngredientAmounts> {
    let mix_volume =
        constants.mix_reference_ul * (constants.mix_reference_factor / f64::from(mix_factor.value()));
    let primers_total = 2.0 * constants.primer_per_sample_ul;
    let ddw_volume = constants.total_per_sample_ul - (mix_volume + primers_total);

    if ddw_volume < 0.0 {
        return Err(PcrError::NegativeDiluentVolume(ddw_volume));
    }

    let mut amounts = IngredientAmounts::default();
    amounts.push(Ingredient::Ddw, ddw_volume);
    amounts.push(Ingredient::Mix(mix_factor), mix_volume);
    amounts.push(Ingredient::PrimerFwd, constants.primer_per_sample_ul);
    amounts.push(Ingredient::PrimerRev, constants.primer_per_sample_ul);
    Ok(amounts)
}
