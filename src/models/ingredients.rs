// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Ordered ingredient volume table.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::request::MixFactor;

/// Reagents making up one reaction, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ingredient {
    Ddw,
    Mix(MixFactor),
    PrimerFwd,
    PrimerRev,
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ingredient::Ddw => f.write_str("DDW"),
            Ingredient::Mix(factor) => write!(f, "Mix ({factor})"),
            Ingredient::PrimerFwd => f.write_str("Primer Fwd"),
            Ingredient::PrimerRev => f.write_str("Primer Rev"),
        }
    }
}

impl Serialize for Ingredient {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of an [`IngredientAmounts`] table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct IngredientVolume {
    pub ingredient: Ingredient,
    /// Volume in microliters.
    pub volume_ul: f64,
}

/// Ingredient volumes keeping insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IngredientAmounts {
    items: Vec<IngredientVolume>,
}

impl IngredientAmounts {
    pub fn push(&mut self, ingredient: Ingredient, volume_ul: f64) {
        self.items.push(IngredientVolume {
            ingredient,
            volume_ul,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &IngredientVolume> {
        self.items.iter()
    }

    /// Volume for the ingredient shown under `label` (e.g. `"Mix (5X)"`).
    pub fn get(&self, label: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.ingredient.to_string() == label)
            .map(|item| item.volume_ul)
    }

    /// Apply `f` to every volume, keeping the order.
    pub fn map_volumes(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| IngredientVolume {
                    ingredient: item.ingredient,
                    volume_ul: f(item.volume_ul),
                })
                .collect(),
        }
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.volume_ul).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_report_names() {
        assert_eq!(Ingredient::Ddw.to_string(), "DDW");
        assert_eq!(Ingredient::Mix(MixFactor::FiveX).to_string(), "Mix (5X)");
        assert_eq!(Ingredient::PrimerFwd.to_string(), "Primer Fwd");
        assert_eq!(Ingredient::PrimerRev.to_string(), "Primer Rev");
    }

    #[test]
    fn map_volumes_preserves_insertion_order() {
        let mut amounts = IngredientAmounts::default();
        amounts.push(Ingredient::PrimerRev, 1.0);
        amounts.push(Ingredient::Ddw, 2.0);

        let doubled = amounts.map_volumes(|v| v * 2.0);
        let order: Vec<String> = doubled.iter().map(|i| i.ingredient.to_string()).collect();

        assert_eq!(order, vec!["Primer Rev", "DDW"]);
        assert_eq!(doubled.get("DDW"), Some(4.0));
        assert_eq!(doubled.total(), 6.0);
    }

    #[test]
    fn get_returns_none_for_unknown_label() {
        let mut amounts = IngredientAmounts::default();
        amounts.push(Ingredient::Mix(MixFactor::TwoX), 6.0);
        assert_eq!(amounts.get("Mix (5X)"), None);
        assert_eq!(amounts.get("Mix (2X)"), Some(6.0));
    }
}
