// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Editable rich-list form control for egui.
//!
//! A [`RichListField`] renders a list of tagged items inside a form field.
//! Items are added from a searchable dropdown, edited, and removed. Every
//! action produces a new list that is handed back to the field model through
//! change and blur notifications; the control itself keeps no copy.

pub mod app;
pub mod models;
pub mod mvu;
pub mod ui;
pub mod utils;

pub use models::config::{
    AddDropdownConfig, DropdownItem, FieldProps, FormDefinition, Priority, RemoveConfirmSpec,
    RichListKey, RichListSettings, pick_list_props,
};
pub use models::interceptors::{
    ChangeMeta, CommitSink, EditProceed, FieldNotifier, Interceptor, InterceptorSet, Proceed,
};
pub use models::item_list::{FieldValue, SequenceLike};
pub use ui::components::field::{FieldModel, FieldMsg, InputField, field_channel};
pub use ui::components::rich_list::{ListAction, ListController, RichListConfig, RichListDefaults};
pub use ui::components::rich_list_field::RichListField;
