// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel for the demo form.

use crate::models::config::{FieldProps, FormDefinition, RichListSettings};
use crate::models::item_list::FieldValue;
use crate::ui::components::field::{self, FieldModel, FieldMsg};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Wrapper props of the rich list field.
    pub props: FieldProps,
    /// Field state of record.
    pub field: FieldModel<String>,
    /// Initial value, applied once the field has mounted.
    pub pending_initial: Option<FieldValue<String>>,
    /// Open edit dialog, if an edit is waiting for the user.
    pub edit: Option<EditDraft>,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
}

/// Buffer of the edit dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditDraft {
    pub original: String,
    pub buffer: String,
}

/// Application messages routed through the update function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    Mounted,
    Field(FieldMsg<String>),
    EditRequested(String),
    EditBufferChanged(String),
    EditSaved,
    EditCancelled,
    /// The list changed under an open edit; its continuation is stale.
    EditInvalidated,
    AddRejected(String),
    SetDisabled(bool),
    ResetField,
    DismissError,
}

/// Commands resolve the edit continuation parked by the app shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    CommitEdit(String),
    DiscardEdit,
}

impl AppModel {
    /// Build the model from a definition, returning the list settings for the view layer.
    pub fn from_definition(definition: FormDefinition<String>) -> (Self, RichListSettings<String>) {
        let model = Self {
            props: definition.field,
            pending_initial: Some(definition.initial),
            ..Default::default()
        };
        (model, definition.list)
    }
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Mounted => {
            if let Some(initial) = model.pending_initial.take() {
                field::update(&mut model.field, &model.props, FieldMsg::SetValue(initial));
            }
        }
        Msg::Field(m) => {
            let blurred = matches!(m, FieldMsg::Blurred(..));
            field::update(&mut model.field, &model.props, m);
            if blurred && let FieldValue::List(items) = model.field.value() {
                let message = format!("{} service(s) configured.", items.len());
                surface_event(model, message, false);
            }
        }
        Msg::EditRequested(original) => {
            model.edit = Some(EditDraft {
                buffer: original.clone(),
                original,
            });
        }
        Msg::EditBufferChanged(text) => {
            if let Some(draft) = model.edit.as_mut() {
                draft.buffer = text;
            }
        }
        Msg::EditSaved => {
            let Some(draft) = model.edit.take() else {
                return;
            };
            let value = draft.buffer.trim().to_string();
            if value.is_empty() {
                model.edit = Some(draft);
                surface_event(model, "Item name cannot be empty.".to_string(), true);
                return;
            }
            let message = format!("Renamed '{}' to '{value}'.", draft.original);
            cmds.push(Command::CommitEdit(value));
            surface_event(model, message, false);
        }
        Msg::EditCancelled => {
            if model.edit.take().is_some() {
                cmds.push(Command::DiscardEdit);
                surface_event(model, "Edit cancelled.".to_string(), false);
            }
        }
        Msg::EditInvalidated => {
            cmds.push(Command::DiscardEdit);
            if model.edit.take().is_some() {
                surface_event(model, "Edit discarded: the list changed.".to_string(), false);
            }
        }
        Msg::AddRejected(item) => {
            surface_event(model, format!("'{item}' is already in the list."), false);
        }
        Msg::SetDisabled(disabled) => model.props.disabled = disabled,
        Msg::ResetField => {
            field::update(&mut model.field, &model.props, FieldMsg::Reset);
            surface_event(model, "Field reset.".to_string(), false);
        }
        Msg::DismissError => model.error = None,
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, message: String, is_error: bool) {
    if is_error {
        model.error = Some(message.clone());
    }
    model.status = Some(message);
}
