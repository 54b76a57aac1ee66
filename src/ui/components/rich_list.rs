// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Rich list controller: renders items as chips and reduces add/edit/remove
//! actions into a replacement list handed to the commit sink.
//!
//! The controller holds no value state. It is rebuilt every frame from the
//! field's current value, so indices never outlive one render pass.

use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use eframe::egui;

use crate::models::config::{
    AddDropdownConfig, DEFAULT_ADD_BUTTON_TEXT, RemoveConfirmSpec, RichListSettings,
};
use crate::models::interceptors::{
    AddInterceptor, CommitSink, EditInterceptor, EditProceed, InterceptorSet, Proceed,
    RemoveInterceptor,
};
use crate::models::item_list::{appended, removed};
use crate::ui::components::confirm::{Confirm, ConfirmOutcome};
use crate::ui::components::dropdown::{DropdownAutoComplete, dropdown_button};

/// Renders the presentation of one item inside its chip.
pub type ItemRenderer<T> = Rc<dyn Fn(&mut egui::Ui, &T)>;

/// The named defaults merged with caller configuration.
pub struct RichListDefaults<T> {
    pub add_button_text: String,
    pub render_item: ItemRenderer<T>,
    pub interceptors: InterceptorSet<T>,
}

impl<T: fmt::Display + 'static> Default for RichListDefaults<T> {
    fn default() -> Self {
        Self {
            add_button_text: DEFAULT_ADD_BUTTON_TEXT.to_string(),
            render_item: Rc::new(|ui: &mut egui::Ui, item: &T| {
                ui.label(item.to_string());
            }),
            interceptors: InterceptorSet::default(),
        }
    }
}

/// Everything a rich list understands; nothing else is forwarded to it.
pub struct RichListConfig<T> {
    pub add_button_text: String,
    pub add_dropdown: AddDropdownConfig<T>,
    pub render_item: ItemRenderer<T>,
    pub interceptors: InterceptorSet<T>,
    pub remove_confirm: Option<RemoveConfirmSpec>,
}

impl<T: fmt::Display + 'static> RichListConfig<T> {
    pub fn new(add_dropdown: AddDropdownConfig<T>) -> Self {
        Self::with_defaults(RichListDefaults::default(), add_dropdown)
    }

    pub fn from_settings(settings: RichListSettings<T>) -> Self {
        Self::from_settings_with(RichListDefaults::default(), settings)
    }
}

impl<T> RichListConfig<T> {
    pub fn with_defaults(defaults: RichListDefaults<T>, add_dropdown: AddDropdownConfig<T>) -> Self {
        Self {
            add_button_text: defaults.add_button_text,
            add_dropdown,
            render_item: defaults.render_item,
            interceptors: defaults.interceptors,
            remove_confirm: None,
        }
    }

    pub fn from_settings_with(defaults: RichListDefaults<T>, settings: RichListSettings<T>) -> Self {
        let mut config = Self::with_defaults(defaults, settings.add_dropdown);
        if let Some(text) = settings.add_button_text {
            config.add_button_text = text;
        }
        config.remove_confirm = settings.remove_confirm;
        config
    }

    pub fn add_button_text(mut self, text: impl Into<String>) -> Self {
        self.add_button_text = text.into();
        self
    }

    pub fn render_item(mut self, render: impl Fn(&mut egui::Ui, &T) + 'static) -> Self {
        self.render_item = Rc::new(render);
        self
    }

    pub fn on_add_item(mut self, interceptor: AddInterceptor<T>) -> Self {
        self.interceptors.on_add_item = interceptor;
        self
    }

    pub fn on_edit_item(mut self, interceptor: EditInterceptor<T>) -> Self {
        self.interceptors.on_edit_item = interceptor;
        self
    }

    pub fn on_remove_item(mut self, interceptor: RemoveInterceptor<T>) -> Self {
        self.interceptors.on_remove_item = interceptor;
        self
    }

    pub fn remove_confirm(mut self, spec: Option<RemoveConfirmSpec>) -> Self {
        self.remove_confirm = spec;
        self
    }
}

/// User gestures collected during a render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListAction<T> {
    /// An entry was selected in the add dropdown.
    Add(T),
    /// The edit icon of the item at this index was clicked.
    Edit(usize),
    /// Removal of the item at this index passed the confirmation (if any).
    Remove(usize),
}

/// Map a confirmation outcome to the remove action it releases.
pub fn remove_after_confirm<T>(outcome: ConfirmOutcome, index: usize) -> Option<ListAction<T>> {
    match outcome {
        ConfirmOutcome::Confirmed => Some(ListAction::Remove(index)),
        ConfirmOutcome::Idle | ConfirmOutcome::Dismissed => None,
    }
}

pub struct ListController<'a, T> {
    id: egui::Id,
    items: Vec<T>,
    config: &'a RichListConfig<T>,
    sink: CommitSink<T>,
    disabled: bool,
}

impl<'a, T: Clone + 'static> ListController<'a, T> {
    pub fn new(
        id_salt: impl Hash,
        items: Vec<T>,
        config: &'a RichListConfig<T>,
        sink: CommitSink<T>,
    ) -> Self {
        Self {
            id: egui::Id::new(id_salt),
            items,
            config,
            sink,
            disabled: false,
        }
    }

    /// Render the items without edit, remove, or add affordances.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Append `candidate`, subject to the add interceptor.
    pub fn add_candidate(&self, candidate: T) {
        tracing::trace!(len = self.items.len(), "rich list add requested");
        let next = appended(&self.items, candidate.clone());
        self.config
            .interceptors
            .on_add_item
            .intercept(&candidate, Proceed::new(next, self.sink.clone()));
    }

    /// Replace position `index` with `data`, subject to the edit interceptor.
    pub fn edit_at(&self, index: usize, data: T) {
        debug_assert!(index < self.items.len(), "edit index {index} out of range");
        let Some(item) = self.items.get(index) else {
            return;
        };
        tracing::trace!(index, "rich list edit requested");
        let cont = EditProceed::new(self.items.clone(), index, data, self.sink.clone());
        self.config.interceptors.on_edit_item.intercept(item, cont);
    }

    /// Delete position `index`, subject to the remove interceptor.
    pub fn remove_at(&self, index: usize) {
        debug_assert!(index < self.items.len(), "remove index {index} out of range");
        let Some(item) = self.items.get(index) else {
            return;
        };
        tracing::trace!(index, "rich list remove requested");
        let next = removed(&self.items, index);
        self.config
            .interceptors
            .on_remove_item
            .intercept(item, Proceed::new(next, self.sink.clone()));
    }

    pub fn dispatch(&self, action: ListAction<T>) {
        match action {
            ListAction::Add(candidate) => self.add_candidate(candidate),
            ListAction::Edit(index) => {
                if let Some(item) = self.items.get(index) {
                    self.edit_at(index, item.clone());
                }
            }
            ListAction::Remove(index) => self.remove_at(index),
        }
    }

    /// Render and apply the gesture of this frame.
    pub fn show(&self, ui: &mut egui::Ui) {
        // One gesture per frame; every action is computed from the same list.
        if let Some(action) = self.view(ui).into_iter().next() {
            self.dispatch(action);
        }
    }

    /// Render the chips and the add dropdown, returning the gestures without applying them.
    pub fn view(&self, ui: &mut egui::Ui) -> Vec<ListAction<T>> {
        let mut actions = Vec::new();
        self.forget_stale_confirmations(ui);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = egui::vec2(8.0, 6.0);

            for (index, item) in self.items.iter().enumerate() {
                ui.push_id(index, |ui| {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            (self.config.render_item)(ui, item);
                            if !self.disabled {
                                self.render_item_actions(ui, index, &mut actions);
                            }
                        });
                    });
                });
            }

            if !self.disabled {
                let dropdown =
                    DropdownAutoComplete::new(self.id.with("add"), &self.config.add_dropdown);
                let picked = dropdown.show(ui, |ui, is_open| {
                    dropdown_button(ui, &self.config.add_button_text, is_open)
                });
                if let Some(candidate) = picked {
                    actions.push(ListAction::Add(candidate));
                }
            }
        });

        actions
    }

    /// Id of the remove confirmation for position `index`.
    fn confirm_id(&self, index: usize) -> egui::Id {
        self.id.with(("remove", index))
    }

    /// Confirmations are keyed by position and all close when the length changes.
    fn forget_stale_confirmations(&self, ui: &egui::Ui) {
        let len_id = self.id.with("rendered_len");
        let len = self.items.len();
        let previous = ui.data(|d| d.get_temp::<usize>(len_id));
        if previous == Some(len) {
            return;
        }
        ui.data_mut(|d| {
            for index in 0..previous.unwrap_or(0) {
                d.remove::<bool>(self.confirm_id(index));
            }
            d.insert_temp(len_id, len);
        });
    }

    fn render_item_actions(
        &self,
        ui: &mut egui::Ui,
        index: usize,
        actions: &mut Vec<ListAction<T>>,
    ) {
        if icon_button(ui, egui_phosphor::regular::GEAR, "Edit item").clicked() {
            actions.push(ListAction::Edit(index));
        }

        let trash = |ui: &mut egui::Ui| {
            icon_button(ui, egui_phosphor::regular::TRASH_SIMPLE, "Remove item")
        };
        match &self.config.remove_confirm {
            None => {
                if trash(ui).clicked() {
                    actions.push(ListAction::Remove(index));
                }
            }
            Some(spec) => {
                let outcome = Confirm::new(self.confirm_id(index), spec).show(ui, trash);
                actions.extend(remove_after_confirm(outcome, index));
            }
        }
    }
}

fn icon_button(ui: &mut egui::Ui, icon: &str, hover: &str) -> egui::Response {
    ui.add(
        egui::Button::new(egui::RichText::new(icon).color(egui::Color32::from_gray(140)))
            .frame(false),
    )
    .on_hover_text(hover)
}
