// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Headless egui frames driven by injected pointer and key events.

use eframe::egui;

/// A context rendering into a fixed 800x600 screen.
pub(crate) struct Headless {
    pub ctx: egui::Context,
}

impl Headless {
    pub fn new() -> Self {
        let ctx = egui::Context::default();
        // Keeps labels out of the clickable widget lists.
        ctx.all_styles_mut(|style| style.interaction.selectable_labels = false);
        Self { ctx }
    }

    pub fn frame(&self, events: Vec<egui::Event>, run: impl FnMut(&mut egui::Ui)) {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run_ui(input, run);
    }

    pub fn idle(&self, run: impl FnMut(&mut egui::Ui)) {
        self.frame(Vec::new(), run);
    }

    /// Press and release the primary button at `pos` over two frames.
    pub fn click(&self, pos: egui::Pos2, mut run: impl FnMut(&mut egui::Ui)) {
        self.frame(
            vec![egui::Event::PointerMoved(pos), button(pos, true)],
            &mut run,
        );
        self.frame(vec![button(pos, false)], &mut run);
    }

    pub fn press_key(&self, key: egui::Key, run: impl FnMut(&mut egui::Ui)) {
        let event = egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        };
        self.frame(vec![event], run);
    }

    /// Rects of the enabled, click-sensing widgets of `layer` from the last
    /// frame, in registration order. The layer's own area is left out.
    pub fn clickable(&self, layer: egui::LayerId) -> Vec<egui::Rect> {
        self.ctx.viewport(|viewport| {
            viewport
                .prev_pass
                .widgets
                .get_layer(layer)
                .filter(|w| w.enabled && w.sense.senses_click() && w.id != layer.id)
                .map(|w| w.rect)
                .collect()
        })
    }

    /// Rect of the bottom-right clickable widget of `layer`: the last button of
    /// a dialog's button row.
    pub fn last_button(&self, layer: egui::LayerId) -> Option<egui::Rect> {
        self.clickable(layer).into_iter().max_by(|a, b| {
            a.center()
                .y
                .total_cmp(&b.center().y)
                .then(a.center().x.total_cmp(&b.center().x))
        })
    }

    pub fn temp<T: Clone + 'static>(&self, id: egui::Id) -> Option<T> {
        self.ctx.data(|d| d.get_temp::<T>(id))
    }
}

fn button(pos: egui::Pos2, pressed: bool) -> egui::Event {
    egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    }
}
