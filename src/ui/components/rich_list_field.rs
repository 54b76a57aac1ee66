// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Rich list as a form field: bridges the field wrapper and the list controller.

use std::rc::Rc;

use eframe::egui;

use crate::models::config::FieldProps;
use crate::models::interceptors::{CommitSink, FieldNotifier};
use crate::models::item_list::{SequenceLike, is_ready, normalize};
use crate::ui::components::field::{FieldRenderProps, InputField};
use crate::ui::components::rich_list::{ListController, RichListConfig};

/// Wrapper props plus the list configuration. Only `config` reaches the controller.
pub struct RichListField<'a, T> {
    props: &'a FieldProps,
    config: &'a RichListConfig<T>,
    error: Option<&'a str>,
}

impl<'a, T: Clone + 'static> RichListField<'a, T> {
    pub fn new(props: &'a FieldProps, config: &'a RichListConfig<T>) -> Self {
        Self {
            props,
            config,
            error: None,
        }
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Render through the field wrapper. Returns whether the list was rendered,
    /// which is `false` until the value is a real sequence.
    pub fn show<S: SequenceLike<T> + ?Sized>(
        self,
        ui: &mut egui::Ui,
        value: &S,
        notifier: Rc<dyn FieldNotifier<T>>,
    ) -> bool {
        InputField::new(self.props)
            .error(self.error)
            .show(ui, value, notifier, |ui, field_props| {
                self.render_rich_list(ui, field_props)
            })
    }

    fn render_rich_list<S: SequenceLike<T> + ?Sized>(
        &self,
        ui: &mut egui::Ui,
        field_props: FieldRenderProps<'_, S, T>,
    ) -> bool {
        // The model applies the initial value only after the first mount.
        if !is_ready(field_props.value) {
            tracing::trace!(field = %self.props.name, "rich list value not ready");
            return false;
        }
        let Some(items) = normalize(field_props.value) else {
            tracing::warn!(field = %self.props.name, "sequence length not backed by items");
            return false;
        };

        ListController::new(
            self.props.name.as_str(),
            items,
            self.config,
            CommitSink::new(field_props.notifier),
        )
        .disabled(field_props.disabled)
        .show(ui);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::config::{AddDropdownConfig, DropdownItem};
    use crate::models::interceptors::testing::RecordingNotifier;
    use crate::models::item_list::FieldValue;

    fn render(value: &FieldValue<String>) -> (bool, Rc<RecordingNotifier<String>>) {
        let props = FieldProps {
            label: Some("Services".into()),
            ..FieldProps::new("services")
        };
        let config = RichListConfig::new(AddDropdownConfig::new(vec![DropdownItem::new(
            "Slack",
            "slack".to_string(),
        )]));
        let notifier = Rc::new(RecordingNotifier::default());
        let ctx = egui::Context::default();
        let mut rendered = false;

        let _ = ctx.run_ui(egui::RawInput::default(), |ui| {
            rendered = RichListField::new(&props, &config).show(
                ui,
                value,
                notifier.clone() as Rc<dyn FieldNotifier<String>>,
            );
        });

        (rendered, notifier)
    }

    #[test]
    fn unset_value_renders_nothing() {
        let (rendered, notifier) = render(&FieldValue::Unset);

        assert!(!rendered);
        assert_eq!(notifier.commits(), 0);
    }

    #[test]
    fn text_placeholder_renders_nothing() {
        let (rendered, notifier) = render(&FieldValue::Text(String::new()));

        assert!(!rendered);
        assert_eq!(notifier.commits(), 0);
    }

    #[test]
    fn empty_list_is_ready_and_renders() {
        let (rendered, notifier) = render(&FieldValue::List(Vec::new()));

        assert!(rendered);
        assert_eq!(notifier.commits(), 0);
    }

    #[test]
    fn list_value_renders_controller() {
        let (rendered, notifier) = render(&FieldValue::List(vec!["jira".into()]));

        assert!(rendered);
        assert_eq!(notifier.commits(), 0);
    }
}
