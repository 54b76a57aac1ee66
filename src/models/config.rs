// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Declarative configuration for rich list fields.
//! Kept UI-agnostic so forms can be described in JSON and loaded from disk.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::item_list::FieldValue;

/// Fallback label of the add button.
pub const DEFAULT_ADD_BUTTON_TEXT: &str = "Add Item";

/// Keys a rich list understands. Shared by the field composer and the list
/// controller; any prop outside this set stays with the field wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RichListKey {
    AddButtonText,
    AddDropdown,
    RenderItem,
    OnAddItem,
    OnEditItem,
    OnRemoveItem,
    RemoveConfirm,
}

impl RichListKey {
    pub const ALL: [RichListKey; 7] = [
        Self::AddButtonText,
        Self::AddDropdown,
        Self::RenderItem,
        Self::OnAddItem,
        Self::OnEditItem,
        Self::OnRemoveItem,
        Self::RemoveConfirm,
    ];

    /// Prop name as written in form definitions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddButtonText => "addButtonText",
            Self::AddDropdown => "addDropdown",
            Self::RenderItem => "renderItem",
            Self::OnAddItem => "onAddItem",
            Self::OnEditItem => "onEditItem",
            Self::OnRemoveItem => "onRemoveItem",
            Self::RemoveConfirm => "removeConfirm",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Keep only the props whose keys belong to [`RichListKey::ALL`].
pub fn pick_list_props(props: &Map<String, Value>) -> Map<String, Value> {
    props
        .iter()
        .filter(|(key, _)| RichListKey::from_key(key).is_some())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Visual weight of the confirm button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Default,
    Primary,
    #[default]
    Danger,
}

/// Settings for the remove confirmation. Its presence turns on confirmation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveConfirmSpec {
    #[serde(default = "default_confirm_message")]
    pub message: String,
    #[serde(default = "default_confirm_text")]
    pub confirm_text: String,
    #[serde(default = "default_cancel_text")]
    pub cancel_text: String,
    #[serde(default)]
    pub priority: Priority,
}

impl Default for RemoveConfirmSpec {
    fn default() -> Self {
        Self {
            message: default_confirm_message(),
            confirm_text: default_confirm_text(),
            cancel_text: default_cancel_text(),
            priority: Priority::default(),
        }
    }
}

impl RemoveConfirmSpec {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

fn default_confirm_message() -> String {
    "Are you sure you want to remove this item?".to_string()
}

fn default_confirm_text() -> String {
    "Remove".to_string()
}

fn default_cancel_text() -> String {
    "Cancel".to_string()
}

/// One selectable entry of the add dropdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownItem<T> {
    pub label: String,
    pub value: T,
}

impl<T> DropdownItem<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Options for the searchable add dropdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDropdownConfig<T> {
    pub items: Vec<DropdownItem<T>>,
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
    #[serde(default = "default_true")]
    pub allow_search: bool,
    #[serde(default = "default_true")]
    pub close_on_select: bool,
    #[serde(default = "default_menu_width")]
    pub menu_width: f32,
}

impl<T> AddDropdownConfig<T> {
    pub fn new(items: Vec<DropdownItem<T>>) -> Self {
        Self {
            items,
            search_placeholder: default_search_placeholder(),
            empty_message: default_empty_message(),
            allow_search: true,
            close_on_select: true,
            menu_width: default_menu_width(),
        }
    }
}

fn default_search_placeholder() -> String {
    "Filter search".to_string()
}

fn default_empty_message() -> String {
    "No items".to_string()
}

fn default_true() -> bool {
    true
}

fn default_menu_width() -> f32 {
    220.0
}

/// The serializable part of a rich list configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichListSettings<T> {
    #[serde(default)]
    pub add_button_text: Option<String>,
    pub add_dropdown: AddDropdownConfig<T>,
    #[serde(default)]
    pub remove_confirm: Option<RemoveConfirmSpec>,
}

/// Props owned by the field wrapper.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldProps {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub help: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub inline: bool,
}

impl FieldProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// A rich list field described as one flat JSON object.
#[derive(Clone, Debug, PartialEq)]
pub struct FormDefinition<T> {
    pub field: FieldProps,
    pub list: RichListSettings<T>,
    pub initial: FieldValue<T>,
}

impl<T: for<'de> Deserialize<'de>> FormDefinition<T> {
    /// Parse a definition. Wrapper props are read from the whole object,
    /// list settings only from the recognized keys.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content).context("Invalid form definition JSON")?;
        let Value::Object(props) = root else {
            anyhow::bail!("Form definition must be a JSON object");
        };

        let field: FieldProps = serde_json::from_value(Value::Object(props.clone()))
            .context("Invalid field props in form definition")?;
        let list: RichListSettings<T> =
            serde_json::from_value(Value::Object(pick_list_props(&props)))
                .with_context(|| format!("Invalid rich list settings for field '{}'", field.name))?;
        let initial = match props.get("value") {
            Some(value) => serde_json::from_value(value.clone())
                .with_context(|| format!("Invalid initial value for field '{}'", field.name))?,
            None => FieldValue::Unset,
        };

        Ok(Self {
            field,
            list,
            initial,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read form definition: {}", path.display()))?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;

    const DEFINITION: &str = r#"{
        "name": "integrations",
        "label": "Integrations",
        "help": "Services notified on new issues",
        "required": true,
        "addButtonText": "Add Service",
        "addDropdown": {
            "items": [
                {"label": "Slack", "value": "slack"},
                {"label": "Jira", "value": "jira"}
            ]
        },
        "removeConfirm": {"message": "Remove this service?"},
        "value": ["slack"]
    }"#;

    #[test]
    fn pick_list_props_drops_wrapper_keys() {
        let props = json!({
            "name": "items",
            "label": "Items",
            "addButtonText": "Add",
            "removeConfirm": {},
            "unknown": 1
        });
        let Value::Object(map) = props else {
            unreachable!()
        };

        let picked = pick_list_props(&map);

        let mut keys: Vec<&str> = picked.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["addButtonText", "removeConfirm"]);
    }

    #[test]
    fn every_key_round_trips_through_its_name() {
        for key in RichListKey::ALL {
            assert_eq!(RichListKey::from_key(key.as_str()), Some(key));
        }
        assert_eq!(RichListKey::from_key("value"), None);
    }

    #[test]
    fn definition_splits_field_and_list_props() {
        let def = FormDefinition::<String>::from_json_str(DEFINITION).unwrap();

        assert_eq!(def.field.name, "integrations");
        assert_eq!(def.field.label.as_deref(), Some("Integrations"));
        assert!(def.field.required);
        assert_eq!(def.list.add_button_text.as_deref(), Some("Add Service"));
        assert_eq!(def.list.add_dropdown.items.len(), 2);
        assert_eq!(def.list.add_dropdown.search_placeholder, "Filter search");
        assert!(def.list.add_dropdown.close_on_select);

        let confirm = def.list.remove_confirm.expect("confirm configured");
        assert_eq!(confirm.message, "Remove this service?");
        assert_eq!(confirm.confirm_text, "Remove");
        assert_eq!(confirm.priority, Priority::Danger);

        assert_eq!(def.initial, FieldValue::List(vec!["slack".to_string()]));
    }

    #[test]
    fn missing_value_leaves_field_unset() {
        let def = FormDefinition::<String>::from_json_str(
            r#"{"name": "tags", "addDropdown": {"items": []}}"#,
        )
        .unwrap();

        assert_eq!(def.initial, FieldValue::Unset);
        assert!(def.list.remove_confirm.is_none());
        assert!(def.list.add_button_text.is_none());
    }

    #[test]
    fn missing_dropdown_is_rejected() {
        let err = FormDefinition::<String>::from_json_str(r#"{"name": "tags"}"#).unwrap_err();

        assert!(err.to_string().contains("tags"));
    }

    #[test]
    fn non_object_definition_is_rejected() {
        assert!(FormDefinition::<String>::from_json_str("[1, 2]").is_err());
    }

    #[test]
    fn definition_loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DEFINITION.as_bytes()).unwrap();

        let def = FormDefinition::<String>::from_path(file.path()).unwrap();

        assert_eq!(def.field.name, "integrations");
    }
}
