// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Live ingredient volume table.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::mvu::Calculation;

const ROW_HEIGHT: f32 = 22.0;

/// Render one row per ingredient; an empty table while inputs are invalid.
pub fn view(ui: &mut egui::Ui, calculation: Option<&Calculation>) {
    let rows = calculation.map(table_rows).unwrap_or_default();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::exact(130.0))
        .column(Column::exact(130.0))
        .header(ROW_HEIGHT, |mut header| {
            for title in ["Ingredient", "Per Sample (µL)", "Master Mix (µL)"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for [name, per, scaled] in &rows {
                body.row(ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.label(name);
                    });
                    row.col(|ui| {
                        ui.label(per);
                    });
                    row.col(|ui| {
                        ui.label(scaled);
                    });
                });
            }
        });
}

/// Display strings (name, per sample, master mix) in ingredient order.
fn table_rows(calculation: &Calculation) -> Vec<[String; 3]> {
    calculation
        .result
        .per_sample
        .iter()
        .zip(calculation.result.scaled.iter())
        .map(|(per, scaled)| {
            [
                per.ingredient.to_string(),
                format!("{:.1}", per.volume_ul),
                format!("{:.1}", scaled.volume_ul),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mvu::AppModel;

    #[test]
    fn rows_follow_ingredient_order_with_one_decimal() {
        let model = AppModel::default();
        let rows = table_rows(model.calculation.as_ref().unwrap());

        assert_eq!(
            rows,
            vec![
                ["DDW".to_string(), "4.0".to_string(), "35.0".to_string()],
                ["Mix (2X)".to_string(), "6.0".to_string(), "53.0".to_string()],
                ["Primer Fwd".to_string(), "0.5".to_string(), "4.5".to_string()],
                ["Primer Rev".to_string(), "0.5".to_string(), "4.5".to_string()],
            ]
        );
    }
}
