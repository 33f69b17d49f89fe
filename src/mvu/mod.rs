// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel for the calculator form.
//!
//! Every input message is followed by an explicit [`recalculate`], so the
//! table, total and report always reflect the current field contents.

use std::path::PathBuf;

use crate::config::FormDefaults;
use crate::logic::mastermix::{CalculationResult, compute_request};
use crate::logic::report::{export_report, format_report};
use crate::models::{CalculationRequest, MixFactor};
use crate::utils::{parse_excess, parse_samples};

/// Latest successful calculation, kept for display and export.
#[derive(Clone, Debug, PartialEq)]
pub struct Calculation {
    pub request: CalculationRequest,
    pub result: CalculationResult,
    /// Formatted report text used for clipboard and file export.
    pub report: String,
}

/// Top-level application state.
#[derive(Clone, Debug, PartialEq)]
pub struct AppModel {
    /// Raw text of the sample count field.
    pub samples_text: String,
    /// Raw text of the excess percentage field.
    pub excess_text: String,
    /// Selected mix concentration.
    pub mix: MixFactor,
    /// Fixed export destination given on the command line.
    pub save_path: Option<PathBuf>,
    /// Current result; `None` while the inputs are invalid.
    pub calculation: Option<Calculation>,
    /// Inline validation message shown under the total.
    pub input_error: Option<String>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
}

impl Default for AppModel {
    fn default() -> Self {
        Self::from_defaults(&FormDefaults::default())
    }
}

impl AppModel {
    /// Build a model seeded with `defaults` and run the first calculation.
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        let mut model = Self {
            samples_text: defaults.samples.to_string(),
            excess_text: defaults.excess.to_string(),
            mix: defaults.mix,
            save_path: defaults.save_path.clone(),
            calculation: None,
            input_error: None,
            status: None,
            error: None,
        };
        recalculate(&mut model);
        model
    }

    /// Report text of the current result, if any.
    pub fn report(&self) -> Option<&str> {
        self.calculation.as_ref().map(|c| c.report.as_str())
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq)]
pub enum Msg {
    SamplesChanged(String),
    ExcessChanged(String),
    MixChanged(MixFactor),
    CopyRequested,
    SaveRequested(PathBuf),
    SaveCancelled,
    SaveCompleted(Result<PathBuf, String>),
    DismissError,
}

/// Commands represent side-effects executed between frames.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    CopyToClipboard(String),
    SaveReport { path: PathBuf, report: String },
}

/// Destination for copied report text.
pub trait Clipboard {
    fn set_text(&mut self, text: String);
}

impl Clipboard for eframe::egui::Context {
    fn set_text(&mut self, text: String) {
        self.copy_text(text);
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::SamplesChanged(text) => {
            model.samples_text = text;
            recalculate(model);
        }
        Msg::ExcessChanged(text) => {
            model.excess_text = text;
            recalculate(model);
        }
        Msg::MixChanged(mix) => {
            model.mix = mix;
            recalculate(model);
        }
        Msg::CopyRequested => match model.report() {
            Some(report) => {
                cmds.push(Command::CopyToClipboard(report.to_string()));
                surface_event(model, "Report copied to clipboard.".to_string(), false);
            }
            None => surface_event(model, "Nothing to copy: fix the inputs first.".to_string(), true),
        },
        Msg::SaveRequested(path) => match model.report() {
            Some(report) => cmds.push(Command::SaveReport {
                path,
                report: report.to_string(),
            }),
            None => surface_event(model, "Nothing to save: fix the inputs first.".to_string(), true),
        },
        Msg::SaveCancelled => surface_event(model, "Save cancelled.".to_string(), false),
        Msg::SaveCompleted(result) => match result {
            Ok(path) => surface_event(model, format!("Saved to {}", path.display()), false),
            Err(err) => surface_event(model, format!("Could not save file:\n\n{err}"), true),
        },
        Msg::DismissError => model.error = None,
    }
}

/// Execute a command synchronously and return a resulting message, if any.
pub fn run_command(cmd: Command, clipboard: &mut impl Clipboard) -> Option<Msg> {
    match cmd {
        Command::CopyToClipboard(text) => {
            clipboard.set_text(text);
            None
        }
        Command::SaveReport { path, report } => {
            let res = export_report(&path, &report).map(|_| path);
            if let Err(err) = &res {
                tracing::error!("{err}");
            }
            Some(Msg::SaveCompleted(res.map_err(|e| e.to_string())))
        }
    }
}

/// Recompute the result from the current field contents.
///
/// Invalid inputs clear the previous result so stale numbers are never shown.
pub fn recalculate(model: &mut AppModel) {
    let outcome = parse_samples(&model.samples_text)
        .and_then(|samples| {
            let excess = parse_excess(&model.excess_text)?;
            CalculationRequest::with_factor(samples, excess, model.mix)
        })
        .and_then(|request| {
            let result = compute_request(&request)?;
            let report = format_report(&request, &result);
            Ok(Calculation {
                request,
                result,
                report,
            })
        });

    match outcome {
        Ok(calculation) => {
            model.calculation = Some(calculation);
            model.input_error = None;
        }
        Err(err) => {
            tracing::debug!("recalculation rejected: {err}");
            model.calculation = None;
            model.input_error = Some(err.to_string());
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn set_text(&mut self, text: String) {
            self.copied.push(text);
        }
    }

    #[test]
    fn default_model_starts_with_a_result() {
        let model = AppModel::default();

        let calc = model.calculation.expect("defaults should compute");
        assert_eq!(calc.request.sample_count(), 8);
        assert_eq!(calc.result.grand_total, 97.0);
        assert!(model.input_error.is_none());
    }

    #[test]
    fn every_input_change_recomputes() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::SamplesChanged("1".into()), &mut cmds);
        update(&mut model, Msg::ExcessChanged("0".into()), &mut cmds);
        update(&mut model, Msg::MixChanged(MixFactor::FiveX), &mut cmds);

        assert!(cmds.is_empty());
        let calc = model.calculation.as_ref().unwrap();
        assert_eq!(calc.result.grand_total, 11.0);
        assert!(calc.report.contains("Mix (5X)"));
    }

    #[test]
    fn invalid_input_clears_previous_result() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::SamplesChanged("abc".into()), &mut cmds);

        assert!(model.calculation.is_none());
        assert!(model.report().is_none());
        assert!(model.input_error.as_deref().unwrap().contains("abc"));
    }

    #[test]
    fn fixing_input_restores_result() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::ExcessChanged("-3".into()), &mut cmds);
        assert!(model.calculation.is_none());

        update(&mut model, Msg::ExcessChanged("10".into()), &mut cmds);
        assert!(model.calculation.is_some());
        assert!(model.input_error.is_none());
    }

    #[test]
    fn copy_enqueues_clipboard_command() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::CopyRequested, &mut cmds);

        assert_eq!(cmds.len(), 1);
        let mut clipboard = RecordingClipboard::default();
        let msg = run_command(cmds.pop().unwrap(), &mut clipboard);

        assert!(msg.is_none());
        assert_eq!(clipboard.copied, vec![model.report().unwrap().to_string()]);
        assert!(model.error.is_none());
    }

    #[test]
    fn copy_without_result_sets_error() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::SamplesChanged("0".into()), &mut cmds);
        update(&mut model, Msg::CopyRequested, &mut cmds);

        assert!(cmds.is_empty());
        assert!(model.error.is_some());
    }

    #[test]
    fn save_request_enqueues_and_completes() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("report.txt");

        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(&mut model, Msg::SaveRequested(output.clone()), &mut cmds);

        assert_eq!(cmds.len(), 1, "save should enqueue command");

        let msg = run_command(cmds.pop().unwrap(), &mut RecordingClipboard::default())
            .expect("save should report completion");
        let mut cmds2 = Vec::new();
        update(&mut model, msg, &mut cmds2);

        assert!(model.error.is_none());
        assert!(model.status.as_deref().unwrap().starts_with("Saved to"));
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            model.report().unwrap()
        );
    }

    // The result survives a failed save so the user can retry elsewhere.
    #[test]
    fn failed_save_keeps_result_and_shows_error() {
        let tmp = TempDir::new().unwrap();
        let output = tmp.path().join("missing").join("report.txt");

        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(&mut model, Msg::SaveRequested(output), &mut cmds);
        let msg = run_command(cmds.pop().unwrap(), &mut RecordingClipboard::default()).unwrap();
        update(&mut model, msg, &mut cmds);

        assert!(model.error.as_deref().unwrap().contains("Could not save file"));
        assert!(model.calculation.is_some());

        update(&mut model, Msg::DismissError, &mut cmds);
        assert!(model.error.is_none());
    }

    #[test]
    fn save_cancelled_sets_status() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        update(&mut model, Msg::SaveCancelled, &mut cmds);

        assert!(cmds.is_empty());
        assert_eq!(model.status.as_deref(), Some("Save cancelled."));
        assert!(model.error.is_none());
    }

    #[test]
    fn from_defaults_keeps_save_path() {
        let defaults = FormDefaults {
            samples: 24,
            excess: 5.0,
            mix: MixFactor::FiveX,
            save_path: Some(PathBuf::from("/tmp/fixed.txt")),
        };

        let model = AppModel::from_defaults(&defaults);

        assert_eq!(model.samples_text, "24");
        assert_eq!(model.excess_text, "5");
        assert_eq!(model.save_path, Some(PathBuf::from("/tmp/fixed.txt")));
        assert!(model.calculation.is_some());
    }
}
