// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Confirmation dialog gating an action behind explicit user approval.

use eframe::egui;

use crate::models::config::{Priority, RemoveConfirmSpec};

/// Result of one render pass of a [`Confirm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// Nothing decided this pass (closed, or open and waiting).
    Idle,
    Confirmed,
    Dismissed,
}

/// Fill color of the confirm button for a priority, if it differs from the default button.
pub fn confirm_fill(priority: Priority, visuals: &egui::Visuals) -> Option<egui::Color32> {
    match priority {
        Priority::Default => None,
        Priority::Primary => Some(visuals.selection.bg_fill),
        Priority::Danger => Some(visuals.error_fg_color),
    }
}

/// Wraps a trigger; clicking it opens a modal asking for confirmation.
pub struct Confirm<'a> {
    id: egui::Id,
    spec: &'a RemoveConfirmSpec,
}

impl<'a> Confirm<'a> {
    pub fn new(id: egui::Id, spec: &'a RemoveConfirmSpec) -> Self {
        Self { id, spec }
    }

    pub fn show(
        self,
        ui: &mut egui::Ui,
        trigger: impl FnOnce(&mut egui::Ui) -> egui::Response,
    ) -> ConfirmOutcome {
        let mut open = ui.data(|d| d.get_temp::<bool>(self.id)).unwrap_or(false);
        if trigger(ui).clicked() {
            open = true;
        }

        let mut outcome = ConfirmOutcome::Idle;
        if open {
            egui::Window::new("Confirm")
                .id(self.id.with("window"))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ui.ctx(), |ui| {
                    ui.label(self.spec.message.as_str());
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        let mut button = egui::Button::new(self.spec.confirm_text.as_str());
                        if let Some(fill) = confirm_fill(self.spec.priority, ui.visuals()) {
                            button = egui::Button::new(
                                egui::RichText::new(self.spec.confirm_text.as_str())
                                    .color(egui::Color32::WHITE),
                            )
                            .fill(fill);
                        }
                        if ui.add(button).clicked() {
                            outcome = ConfirmOutcome::Confirmed;
                        }
                        if ui.button(self.spec.cancel_text.as_str()).clicked() {
                            outcome = ConfirmOutcome::Dismissed;
                        }
                    });
                });

            if outcome == ConfirmOutcome::Idle && ui.input(|inp| inp.key_pressed(egui::Key::Escape))
            {
                outcome = ConfirmOutcome::Dismissed;
            }
            if outcome != ConfirmOutcome::Idle {
                open = false;
            }
        }

        ui.data_mut(|d| d.insert_temp(self.id, open));
        outcome
    }
}
