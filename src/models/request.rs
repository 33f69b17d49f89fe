// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Calculation request value types and their range checks.

use std::fmt;

use serde::Serialize;

use crate::error::{PcrError, Result};

/// Concentration multiple of the supplied mix stock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(into = "u32")]
pub enum MixFactor {
    #[default]
    TwoX,
    FiveX,
}

impl MixFactor {
    /// All supported factors in selector order.
    pub const ALL: [MixFactor; 2] = [MixFactor::TwoX, MixFactor::FiveX];

    /// Numeric concentration multiple (2 or 5).
    pub fn value(self) -> u32 {
        match self {
            MixFactor::TwoX => 2,
            MixFactor::FiveX => 5,
        }
    }
}

impl TryFrom<u32> for MixFactor {
    type Error = PcrError;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            2 => Ok(MixFactor::TwoX),
            5 => Ok(MixFactor::FiveX),
            other => Err(PcrError::InvalidMixFactor(other)),
        }
    }
}

impl From<MixFactor> for u32 {
    fn from(factor: MixFactor) -> Self {
        factor.value()
    }
}

impl fmt::Display for MixFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}X", self.value())
    }
}

/// Validated inputs for one master-mix calculation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CalculationRequest {
    sample_count: u32,
    excess_percent: f64,
    mix_factor: MixFactor,
}

impl CalculationRequest {
    /// Validate raw inputs into a request.
    ///
    /// The mix factor is checked first so an unsupported factor reports
    /// [`PcrError::InvalidMixFactor`] whatever the other values are.
    ///
    /// # Errors
    ///
    /// `InvalidMixFactor` for factors other than 2 or 5, `InvalidInput` for a
    /// sample count below 1 or a negative/non-finite excess.
    pub fn new(sample_count: u32, excess_percent: f64, mix_factor: u32) -> Result<Self> {
        let mix_factor = MixFactor::try_from(mix_factor)?;
        Self::with_factor(sample_count, excess_percent, mix_factor)
    }

    /// Same as [`CalculationRequest::new`] for an already typed factor.
    pub fn with_factor(sample_count: u32, excess_percent: f64, mix_factor: MixFactor) -> Result<Self> {
        if sample_count < 1 {
            return Err(PcrError::invalid_input("sample count must be at least 1"));
        }
        if !excess_percent.is_finite() {
            return Err(PcrError::invalid_input("excess percentage must be a number"));
        }
        if excess_percent < 0.0 {
            return Err(PcrError::invalid_input("excess percentage cannot be negative"));
        }

        Ok(Self {
            sample_count,
            excess_percent,
            mix_factor,
        })
    }

    pub fn sample_count(&self) -> u32 {
        self.sample_count
    }

    pub fn excess_percent(&self) -> f64 {
        self.excess_percent
    }

    pub fn mix_factor(&self) -> MixFactor {
        self.mix_factor
    }

    /// Multiplier applied on top of the sample count (`1 + excess/100`).
    pub fn scale_factor(&self) -> f64 {
        1.0 + self.excess_percent / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_factor_accepts_only_two_and_five() {
        assert_eq!(MixFactor::try_from(2).unwrap(), MixFactor::TwoX);
        assert_eq!(MixFactor::try_from(5).unwrap(), MixFactor::FiveX);
        for bad in [0, 1, 3, 4, 10] {
            assert!(matches!(
                MixFactor::try_from(bad),
                Err(PcrError::InvalidMixFactor(v)) if v == bad
            ));
        }
    }

    #[test]
    fn mix_factor_displays_with_x_suffix() {
        assert_eq!(MixFactor::FiveX.to_string(), "5X");
        assert_eq!(MixFactor::default().to_string(), "2X");
    }

    // An unsupported factor wins over other invalid fields.
    #[test]
    fn new_checks_mix_factor_before_ranges() {
        let err = CalculationRequest::new(0, -5.0, 3).unwrap_err();
        assert!(matches!(err, PcrError::InvalidMixFactor(3)));
    }

    #[test]
    fn new_rejects_zero_samples_and_negative_excess() {
        assert!(matches!(
            CalculationRequest::new(0, 10.0, 2),
            Err(PcrError::InvalidInput(_))
        ));
        assert!(matches!(
            CalculationRequest::new(8, -0.5, 2),
            Err(PcrError::InvalidInput(_))
        ));
        assert!(matches!(
            CalculationRequest::new(8, f64::NAN, 2),
            Err(PcrError::InvalidInput(_))
        ));
    }

    #[test]
    fn scale_factor_adds_excess_fraction() {
        let request = CalculationRequest::new(8, 10.0, 2).unwrap();
        assert!((request.scale_factor() - 1.1).abs() < 1e-12);
        let exact = CalculationRequest::new(8, 0.0, 5).unwrap();
        assert_eq!(exact.scale_factor(), 1.0);
    }

    #[test]
    fn request_serializes_factor_as_number() {
        let request = CalculationRequest::new(4, 12.5, 5).unwrap();
        let json = serde_json::to_value(request).unwrap();
        assert_eq!(json["sample_count"], 4);
        assert_eq!(json["excess_percent"], 12.5);
        assert_eq!(json["mix_factor"], 5);
    }
}
