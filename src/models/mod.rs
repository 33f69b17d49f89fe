// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: immutable value records shared between the engine, the report, and the UIs.

pub mod ingredients;
pub mod request;

pub use ingredients::{Ingredient, IngredientAmounts};
pub use request::{CalculationRequest, MixFactor};
