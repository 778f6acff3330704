//! What a content pane receives from its tab's configuration.
//!
//! Style pairs, class pairs, label, identifier and loading state are consumed
//! by the nav strip and the pane wrapper; owner-managed directives never reach
//! the markup. Only the remainder is forwarded.

use super::style::{join_classes, style_text};
use contracts::shared::tabs::{LoadingState, TabProps};

/// Attributes only the owner acts on.
pub const OWNER_MANAGED_ATTRIBUTES: [&str; 4] =
    ["setProps", "persistence", "persisted_props", "persistence_type"];

/// Value of the pane's loading marker: present only while loading.
pub fn loading_marker(state: Option<&LoadingState>) -> Option<&'static str> {
    state.filter(|s| s.is_loading).map(|_| "true")
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaneAttributes {
    pub id: Option<String>,
    pub style: Option<String>,
    pub class_name: Option<String>,
    /// Extra authored attributes as `(name, value)`, in name order.
    pub extra: Vec<(String, String)>,
}

fn attribute_value(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

pub fn pane_attributes(props: &TabProps) -> PaneAttributes {
    let extra = props
        .extra
        .iter()
        .filter(|(name, _)| !OWNER_MANAGED_ATTRIBUTES.contains(&name.as_str()))
        .filter_map(|(name, value)| attribute_value(value).map(|v| (name.clone(), v)))
        .collect();

    PaneAttributes {
        id: props.id.clone().filter(|id| !id.is_empty()),
        style: props.style.as_ref().and_then(style_text),
        class_name: join_classes([props.class()]),
        extra,
    }
}
