// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the master-mix calculator.
//! Handles layout, form controls, and wiring to report export.

pub mod components;

use eframe::egui;

use crate::config::FormDefaults;
use crate::logic::report::{ensure_extension, suggested_report_name};
use crate::mvu::{self, AppModel, Msg};
use crate::ui::components::{inputs, volume_table};

/// Stateful egui application for calculating and exporting master mixes.
pub struct PcrMixApp {
    model: AppModel,
    inbox: Vec<Msg>,
}

impl PcrMixApp {
    pub fn new(defaults: &FormDefaults) -> Self {
        Self {
            model: AppModel::from_defaults(defaults),
            inbox: Vec::new(),
        }
    }
}

impl eframe::App for PcrMixApp {
    /// Required by eframe 0.34; all rendering happens in `update`, which
    /// eframe still invokes before this method each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drives a single UI frame: applies queued messages to the model, runs
    /// the resulting commands, then renders the top bar, status line and form.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Process pending messages until exhausted.
        let mut clipboard = ctx.clone();
        while !self.inbox.is_empty() {
            let msgs = std::mem::take(&mut self.inbox);
            for msg in msgs {
                let mut commands = Vec::new();
                mvu::update(&mut self.model, msg, &mut commands);
                for cmd in commands {
                    if let Some(reply) = mvu::run_command(cmd, &mut clipboard) {
                        self.inbox.push(reply);
                    }
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("PCR Master Mix Calculator");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);

            egui::ScrollArea::vertical().show(ui, |ui| {
                let input_msgs = inputs::view(ui, &self.model);
                self.inbox.extend(input_msgs);
                ui.add_space(16.0);

                volume_table::view(ui, self.model.calculation.as_ref());
                ui.add_space(16.0);

                self.render_grand_total(ui);
                ui.add_space(12.0);

                self.render_action_buttons(ui);
                ui.add_space(8.0);
            });
        });

        // Messages raised while rendering are applied on the next frame.
        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl PcrMixApp {
    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Prominent total volume, or an invalid-input marker with its reason.
    fn render_grand_total(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new("Total Master Mix Volume:").strong());
            match (&self.model.calculation, &self.model.input_error) {
                (Some(calc), _) => {
                    ui.label(
                        egui::RichText::new(format!("{:.1} µL", calc.result.grand_total))
                            .size(22.0)
                            .strong()
                            .color(egui::Color32::from_rgb(0, 85, 170)),
                    );
                }
                (None, reason) => {
                    ui.label(
                        egui::RichText::new("Invalid Input")
                            .size(22.0)
                            .strong()
                            .color(egui::Color32::RED),
                    );
                    ui.label(
                        egui::RichText::new("Please check your input values.")
                            .color(egui::Color32::RED),
                    );
                    if let Some(reason) = reason {
                        ui.label(
                            egui::RichText::new(reason)
                                .small()
                                .color(egui::Color32::from_gray(110)),
                        );
                    }
                }
            }
        });
    }

    /// Copy and save buttons; both need a valid result.
    fn render_action_buttons(&mut self, ui: &mut egui::Ui) {
        let enabled = self.model.calculation.is_some();

        ui.horizontal(|ui| {
            let copy = egui::Button::new(format!(
                "{} Copy to Clipboard",
                egui_phosphor::regular::COPY
            ));
            if ui
                .add_enabled(enabled, copy)
                .on_disabled_hover_text("Please fix the input values first")
                .clicked()
            {
                self.inbox.push(Msg::CopyRequested);
            }

            let save = egui::Button::new(format!(
                "{} Save Report",
                egui_phosphor::regular::FLOPPY_DISK
            ));
            if ui
                .add_enabled(enabled, save)
                .on_disabled_hover_text("Please fix the input values first")
                .clicked()
            {
                self.request_save();
            }
        });
    }

    /// Save to the configured path, or ask for one with a native dialog.
    fn request_save(&mut self) {
        if let Some(path) = self.model.save_path.clone() {
            self.inbox.push(Msg::SaveRequested(path));
            return;
        }

        let default_name = self
            .model
            .calculation
            .as_ref()
            .map(|calc| suggested_report_name(&calc.request))
            .unwrap_or_else(|| "pcr_mastermix.txt".to_string());
        let dialog = rfd::FileDialog::new()
            .set_title("Save PCR Report")
            .add_filter("Text Files", &["txt"])
            .set_file_name(&default_name);

        if let Some(path) = dialog.save_file() {
            self.inbox.push(Msg::SaveRequested(ensure_extension(path, "txt")));
        } else {
            self.inbox.push(Msg::SaveCancelled);
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        if let Some(text) = &self.model.status {
            ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
        }
    }
}
