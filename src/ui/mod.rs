// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell hosting one rich list field.
//! Owns the notification queues and the parked edit continuation.

pub mod components;

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use eframe::egui;

use crate::models::config::FormDefinition;
use crate::models::interceptors::{EditProceed, FieldNotifier, Interceptor, Proceed};
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::field::{FieldInbox, FieldMsg, FieldSignals, field_channel};
use crate::ui::components::rich_list::RichListConfig;
use crate::ui::components::rich_list_field::RichListField;

/// Form definition bundled with the binary.
pub const DEMO_FORM: &str = include_str!("demo_form.json");

/// Stateful egui application demonstrating a rich list field.
pub struct RichListApp {
    model: AppModel,
    config: RichListConfig<String>,
    signals: FieldSignals<String>,
    field_inbox: FieldInbox<String>,
    msg_tx: crossbeam_channel::Sender<Msg>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
    parked_edit: Rc<RefCell<Option<EditProceed<String>>>>,
    mounted: bool,
}

impl RichListApp {
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(Self::new(FormDefinition::from_json_str(content)?))
    }

    pub fn new(definition: FormDefinition<String>) -> Self {
        let (model, settings) = AppModel::from_definition(definition);
        let (signals, field_inbox) = field_channel();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();
        let parked_edit: Rc<RefCell<Option<EditProceed<String>>>> = Rc::default();

        let add_tx = msg_tx.clone();
        let edit_tx = msg_tx.clone();
        let edit_slot = Rc::clone(&parked_edit);

        let config = RichListConfig::from_settings(settings)
            .render_item(|ui, item: &String| {
                ui.label(format!("{} {item}", egui_phosphor::regular::BELL_SIMPLE));
            })
            .on_add_item(Interceptor::deferred(move |candidate: &String, cont: Proceed<String>| {
                let existing = &cont.next()[..cont.next().len() - 1];
                if existing.iter().any(|s| s.eq_ignore_ascii_case(candidate)) {
                    let _ = add_tx.send(Msg::AddRejected(candidate.clone()));
                } else {
                    cont.proceed();
                }
            }))
            .on_edit_item(Interceptor::deferred(move |item: &String, cont: EditProceed<String>| {
                // Replacing an older parked edit drops it, which vetoes that edit.
                *edit_slot.borrow_mut() = Some(cont);
                let _ = edit_tx.send(Msg::EditRequested(item.clone()));
            }));

        Self {
            model,
            config,
            signals,
            field_inbox,
            msg_tx,
            msg_rx,
            parked_edit,
            mounted: false,
        }
    }

    fn run_command(&self, cmd: Command) {
        let parked = self.parked_edit.borrow_mut().take();
        match (cmd, parked) {
            (Command::CommitEdit(data), Some(cont)) => cont.commit(data),
            (Command::CommitEdit(_), None) => {
                tracing::warn!("edit saved without a pending edit continuation");
            }
            (Command::DiscardEdit, _) => {}
        }
    }

    fn process_messages(&mut self) -> bool {
        let mut msgs: Vec<Msg> = self
            .field_inbox
            .drain()
            .into_iter()
            .map(Msg::Field)
            .collect();
        msgs.extend(self.msg_rx.try_iter());
        let processed = !msgs.is_empty();

        for msg in msgs {
            // A parked edit holds the list it was requested on; any other
            // change to the value makes that list stale.
            let changes_value = matches!(msg, Msg::Field(FieldMsg::Changed(..)) | Msg::ResetField);
            if changes_value && self.parked_edit.borrow().is_some() {
                tracing::debug!("list changed under a pending edit");
                self.dispatch(Msg::EditInvalidated);
            }
            self.dispatch(msg);
        }
        processed
    }

    fn dispatch(&mut self, msg: Msg) {
        let mut commands = Vec::new();
        mvu::update(&mut self.model, msg, &mut commands);
        for cmd in commands {
            self.run_command(cmd);
        }
    }
}

impl eframe::App for RichListApp {
    /// Required by eframe 0.34; rendering happens in `update`, which eframe
    /// still calls immediately before `ui` each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    /// Drain queued notifications into the model, then render the form.
    ///
    /// The initial value is applied one frame after the field first renders,
    /// so the first pass shows the field with its list hidden.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.process_messages() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Rich list");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    self.render_field_controls(ui);
                });
            });
            ui.add_space(4.0);
        });

        self.render_edit_modal(ctx);
        self.render_error_modal(ctx);

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(text) = &self.model.status {
                    ui.label(egui::RichText::new(text.as_str()).color(egui::Color32::from_gray(68)));
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            let notifier: Rc<dyn FieldNotifier<String>> = Rc::new(self.signals.clone());
            RichListField::new(&self.model.props, &self.config)
                .error(self.model.field.error())
                .show(ui, self.model.field.value(), notifier);
        });

        if !self.mounted {
            self.mounted = true;
            let _ = self.msg_tx.send(Msg::Mounted);
        }
        if !self.field_inbox.is_empty() || !self.msg_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl RichListApp {
    fn render_field_controls(&self, ui: &mut egui::Ui) {
        if ui
            .add_enabled(
                self.model.field.dirty(),
                egui::Button::new(format!(
                    "{} Reset",
                    egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE
                )),
            )
            .clicked()
        {
            let _ = self.msg_tx.send(Msg::ResetField);
        }

        let mut disabled = self.model.props.disabled;
        if ui.checkbox(&mut disabled, "Disabled").changed() {
            let _ = self.msg_tx.send(Msg::SetDisabled(disabled));
        }
    }

    /// Modal dialog driving the deferred edit continuation.
    ///
    /// The backdrop blocks the list while the edit is pending.
    fn render_edit_modal(&self, ctx: &egui::Context) {
        let Some(draft) = &self.model.edit else {
            return;
        };
        let mut buffer = draft.buffer.clone();
        let original = draft.original.clone();

        let modal = egui::Modal::new(egui::Id::new("edit_item")).show(ctx, |ui| {
            ui.heading("Edit item");
            ui.label(format!("Rename '{original}'"));
            let resp = ui.add(egui::TextEdit::singleline(&mut buffer).hint_text("Item name"));
            if resp.changed() {
                let _ = self.msg_tx.send(Msg::EditBufferChanged(buffer.clone()));
            }
            if resp.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter)) {
                let _ = self.msg_tx.send(Msg::EditSaved);
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    let _ = self.msg_tx.send(Msg::EditSaved);
                }
                if ui.button("Cancel").clicked() {
                    let _ = self.msg_tx.send(Msg::EditCancelled);
                }
            });
        });
        if modal.should_close() {
            let _ = self.msg_tx.send(Msg::EditCancelled);
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 80.0))
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        let _ = self.msg_tx.send(Msg::DismissError);
                    }
                });
        }
    }
}
