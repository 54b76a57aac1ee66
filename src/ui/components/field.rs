// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Generic field wrapper: label, help, validation display, and the value/notifier
//! contract handed to the control rendered in its slot.

use std::rc::Rc;

use eframe::egui;

use crate::models::config::FieldProps;
use crate::models::interceptors::{ChangeMeta, FieldNotifier};
use crate::models::item_list::FieldValue;

/// Messages consumed by a field model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldMsg<T> {
    /// Apply the initial value once the field has mounted.
    SetValue(FieldValue<T>),
    Changed(Vec<T>, ChangeMeta),
    Blurred(Vec<T>, ChangeMeta),
    /// Restore the initial value and clear interaction flags.
    Reset,
}

/// State of record for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldModel<T> {
    value: FieldValue<T>,
    initial: FieldValue<T>,
    touched: bool,
    dirty: bool,
    error: Option<String>,
}

impl<T> Default for FieldModel<T> {
    fn default() -> Self {
        Self {
            value: FieldValue::Unset,
            initial: FieldValue::Unset,
            touched: false,
            dirty: false,
            error: None,
        }
    }
}

impl<T> FieldModel<T> {
    pub fn value(&self) -> &FieldValue<T> {
        &self.value
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Apply a message to the field model, re-validating against `props`.
pub fn update<T: Clone + PartialEq>(model: &mut FieldModel<T>, props: &FieldProps, msg: FieldMsg<T>) {
    match msg {
        FieldMsg::SetValue(value) => {
            model.initial = value.clone();
            model.value = value;
            model.dirty = false;
        }
        FieldMsg::Changed(items, _meta) => {
            model.value = FieldValue::List(items);
            model.dirty = model.value != model.initial;
        }
        FieldMsg::Blurred(items, _meta) => {
            model.touched = true;
            // Blur carries the committed value too; keep them in step.
            model.value = FieldValue::List(items);
            model.dirty = model.value != model.initial;
        }
        FieldMsg::Reset => {
            model.value = model.initial.clone();
            model.touched = false;
            model.dirty = false;
        }
    }
    model.error = validate(model, props);
}

/// Validation error shown below the control. Only reported once the field was touched.
pub fn validate<T>(model: &FieldModel<T>, props: &FieldProps) -> Option<String> {
    if !model.touched || !props.required {
        return None;
    }
    match &model.value {
        FieldValue::List(items) if !items.is_empty() => None,
        _ => Some("This field is required.".to_string()),
    }
}

/// Sending half of a field's notification queue.
pub struct FieldSignals<T> {
    tx: crossbeam_channel::Sender<FieldMsg<T>>,
}

impl<T> Clone for FieldSignals<T> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

/// Receiving half, drained by the owner of the field model between frames.
pub struct FieldInbox<T> {
    rx: crossbeam_channel::Receiver<FieldMsg<T>>,
}

/// Create a connected notifier/inbox pair.
pub fn field_channel<T>() -> (FieldSignals<T>, FieldInbox<T>) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (FieldSignals { tx }, FieldInbox { rx })
}

impl<T> FieldInbox<T> {
    /// Take every queued message in arrival order.
    pub fn drain(&self) -> Vec<FieldMsg<T>> {
        self.rx.try_iter().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl<T> FieldNotifier<T> for FieldSignals<T> {
    fn on_change(&self, value: Vec<T>, meta: ChangeMeta) {
        if self.tx.send(FieldMsg::Changed(value, meta)).is_err() {
            tracing::warn!("field inbox disconnected; change dropped");
        }
    }

    fn on_blur(&self, value: Vec<T>, meta: ChangeMeta) {
        if self.tx.send(FieldMsg::Blurred(value, meta)).is_err() {
            tracing::warn!("field inbox disconnected; blur dropped");
        }
    }
}

/// What the wrapper hands to the control in its slot.
pub struct FieldRenderProps<'v, S: ?Sized, T> {
    pub value: &'v S,
    pub notifier: Rc<dyn FieldNotifier<T>>,
    pub disabled: bool,
}

/// Field chrome around a caller-supplied control.
pub struct InputField<'a> {
    props: &'a FieldProps,
    error: Option<&'a str>,
}

impl<'a> InputField<'a> {
    pub fn new(props: &'a FieldProps) -> Self {
        Self { props, error: None }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Render label and help, then `field` in the control slot, then the error line.
    ///
    /// Inline fields put the label beside the slot and the help below it.
    pub fn show<S: ?Sized, T, R>(
        self,
        ui: &mut egui::Ui,
        value: &S,
        notifier: Rc<dyn FieldNotifier<T>>,
        field: impl FnOnce(&mut egui::Ui, FieldRenderProps<'_, S, T>) -> R,
    ) -> R {
        let render_props = FieldRenderProps {
            value,
            notifier,
            disabled: self.props.disabled,
        };

        let slot = |ui: &mut egui::Ui| {
            ui.add_enabled_ui(!self.props.disabled, |ui| field(ui, render_props))
                .inner
        };

        let result = if self.props.inline {
            let result = ui
                .horizontal(|ui| {
                    self.render_label(ui);
                    slot(ui)
                })
                .inner;
            self.render_help(ui);
            result
        } else {
            ui.vertical(|ui| {
                self.render_label(ui);
                self.render_help(ui);
                ui.add_space(4.0);
                slot(ui)
            })
            .inner
        };

        if let Some(error) = self.error {
            ui.label(
                egui::RichText::new(error)
                    .small()
                    .color(ui.visuals().error_fg_color),
            );
        }

        result
    }

    fn render_label(&self, ui: &mut egui::Ui) {
        let Some(label) = &self.props.label else {
            return;
        };
        let text = if self.props.required {
            format!("{label} *")
        } else {
            label.clone()
        };
        ui.label(egui::RichText::new(text).strong());
    }

    fn render_help(&self, ui: &mut egui::Ui) {
        if let Some(help) = &self.props.help {
            ui.label(
                egui::RichText::new(help.as_str())
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        }
    }
}
