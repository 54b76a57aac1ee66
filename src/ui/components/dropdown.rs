// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Searchable dropdown ("autocomplete") that emits a single selected item.

use eframe::egui;

use crate::models::config::{AddDropdownConfig, DropdownItem};
use crate::utils::matches_query;

/// Open flag and search text, kept in egui's temporary memory per dropdown id.
#[derive(Clone, Debug, Default)]
struct DropdownState {
    open: bool,
    query: String,
}

/// Entries matching `query`, paired with their index in `items`.
pub fn filter_items<'a, T>(
    items: &'a [DropdownItem<T>],
    query: &str,
) -> Vec<(usize, &'a DropdownItem<T>)> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches_query(&item.label, query))
        .collect()
}

/// Labeled trigger button reflecting the open/closed state of its menu.
pub fn dropdown_button(ui: &mut egui::Ui, label: &str, is_open: bool) -> egui::Response {
    let caret = if is_open {
        egui_phosphor::regular::CARET_UP
    } else {
        egui_phosphor::regular::CARET_DOWN
    };
    ui.add(
        egui::Button::new(format!(
            "{} {label} {caret}",
            egui_phosphor::regular::PLUS_CIRCLE
        ))
        .selected(is_open),
    )
}

pub struct DropdownAutoComplete<'a, T> {
    id: egui::Id,
    config: &'a AddDropdownConfig<T>,
}

impl<'a, T: Clone> DropdownAutoComplete<'a, T> {
    pub fn new(id: egui::Id, config: &'a AddDropdownConfig<T>) -> Self {
        Self { id, config }
    }

    /// Render the trigger (and the menu when open). Returns the selected value, if any.
    ///
    /// `trigger` receives the current open state and must return the clickable response.
    pub fn show(
        self,
        ui: &mut egui::Ui,
        trigger: impl FnOnce(&mut egui::Ui, bool) -> egui::Response,
    ) -> Option<T> {
        let mut state = ui
            .data(|d| d.get_temp::<DropdownState>(self.id))
            .unwrap_or_default();

        let response = trigger(ui, state.open);
        let just_opened = response.clicked() && !state.open;
        if response.clicked() {
            state.open = !state.open;
            state.query.clear();
        }

        let mut selected = None;
        if state.open {
            let menu = egui::Area::new(self.id.with("menu"))
                .order(egui::Order::Foreground)
                .fixed_pos(response.rect.left_bottom() + egui::vec2(0.0, 4.0))
                .show(ui.ctx(), |ui| {
                    egui::Frame::popup(ui.style()).show(ui, |ui| {
                        ui.set_width(self.config.menu_width);
                        if self.config.allow_search {
                            let search = ui.add(
                                egui::TextEdit::singleline(&mut state.query)
                                    .hint_text(self.config.search_placeholder.as_str())
                                    .desired_width(f32::INFINITY),
                            );
                            if just_opened {
                                search.request_focus();
                            }
                            ui.separator();
                        }
                        selected = self.render_entries(ui, &state.query);
                    });
                });

            let dismissed = ui.input(|inp| inp.key_pressed(egui::Key::Escape))
                || (response.clicked_elsewhere() && !menu.response.contains_pointer());
            if dismissed {
                state.open = false;
                state.query.clear();
            }
        }

        if selected.is_some() && self.config.close_on_select {
            state.open = false;
            state.query.clear();
        }

        ui.data_mut(|d| d.insert_temp(self.id, state));
        selected
    }

    fn render_entries(&self, ui: &mut egui::Ui, query: &str) -> Option<T> {
        let matches = filter_items(&self.config.items, query);
        if matches.is_empty() {
            ui.label(
                egui::RichText::new(self.config.empty_message.as_str())
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
            return None;
        }

        let mut picked = None;
        egui::ScrollArea::vertical()
            .max_height(240.0)
            .show(ui, |ui| {
                for (index, item) in matches {
                    let entry = egui::Button::new(item.label.as_str())
                        .frame(false)
                        .min_size(egui::vec2(ui.available_width(), 0.0));
                    if ui.add(entry).clicked() {
                        picked = Some(index);
                    }
                }
            });

        picked.map(|index| self.config.items[index].value.clone())
    }
}
