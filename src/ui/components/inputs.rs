// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Configuration inputs: sample count, excess percentage and mix type.

use eframe::egui;

use crate::models::MixFactor;
use crate::mvu::{AppModel, Msg};

/// Upper end of the quick-adjust sample slider (one 96-well plate).
const SLIDER_MAX_SAMPLES: u32 = 96;

/// Render the input group and return messages for every edited field.
pub fn view(ui: &mut egui::Ui, model: &AppModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new("Configuration").strong());
        ui.add_space(6.0);

        egui::Grid::new("inputs_grid")
            .num_columns(3)
            .spacing(egui::vec2(10.0, 10.0))
            .min_col_width(90.0)
            .show(ui, |ui| {
                ui.label("Samples:");
                render_samples(ui, model, &mut msgs);
                ui.end_row();

                ui.label("Excess (%):");
                let mut excess = model.excess_text.clone();
                if ui
                    .add(egui::TextEdit::singleline(&mut excess).desired_width(60.0))
                    .changed()
                {
                    msgs.push(Msg::ExcessChanged(excess));
                }
                ui.label(
                    egui::RichText::new("Extra volume to cover pipetting loss.")
                        .small()
                        .color(egui::Color32::from_gray(110)),
                );
                ui.end_row();

                ui.label("Mix Type:");
                ui.horizontal(|ui| {
                    let mut choice = model.mix;
                    for factor in MixFactor::ALL {
                        ui.selectable_value(&mut choice, factor, factor.to_string());
                    }
                    if choice != model.mix {
                        msgs.push(Msg::MixChanged(choice));
                    }
                });
                ui.end_row();
            });
    });

    msgs
}

/// Text field plus a slider for quick adjustment of the sample count.
fn render_samples(ui: &mut egui::Ui, model: &AppModel, msgs: &mut Vec<Msg>) {
    let mut text = model.samples_text.clone();
    if ui
        .add(egui::TextEdit::singleline(&mut text).desired_width(60.0))
        .changed()
    {
        msgs.push(Msg::SamplesChanged(text));
    }

    let mut slider_value = slider_position(&model.samples_text);
    if ui
        .add(egui::Slider::new(&mut slider_value, 1..=SLIDER_MAX_SAMPLES).show_value(false))
        .changed()
    {
        msgs.push(Msg::SamplesChanged(slider_value.to_string()));
    }
}

/// Slider position for the current text; unparsable text parks it at 1.
fn slider_position(text: &str) -> u32 {
    text.trim()
        .parse::<u32>()
        .unwrap_or(1)
        .clamp(1, SLIDER_MAX_SAMPLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_position_clamps_to_plate_size() {
        assert_eq!(slider_position("24"), 24);
        assert_eq!(slider_position("384"), 96);
        assert_eq!(slider_position("0"), 1);
        assert_eq!(slider_position("many"), 1);
    }
}
