// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Front-end entry points: the egui desktop form and the terminal flow.

pub mod cli;

use eframe::egui;
use egui_phosphor::Variant;

use crate::config::FormDefaults;
use crate::ui::PcrMixApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run_gui(defaults: FormDefaults) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 550.0])
            .with_min_inner_size([500.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PCR Master Mix Calculator",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(PcrMixApp::new(&defaults)))
        }),
    )
}
