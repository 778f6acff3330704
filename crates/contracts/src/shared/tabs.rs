//! Declared configuration surface of the tabs widget.
//!
//! These are plain data: the owner (or an external binding layer) fills them
//! in and the frontend resolves them into rendered tabs.

use crate::enums::PersistenceType;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Inline style declaration, property name → value.
///
/// Keys may be written in camelCase (`fontWeight`) or CSS form (`font-weight`).
pub type StyleMap = BTreeMap<String, String>;

/// Loading descriptor attached by the owner while a component is being updated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingState {
    #[serde(default)]
    pub is_loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prop_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
}

impl LoadingState {
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }
}

/// Properties authored for a single tab.
///
/// `Default` leaves every field unset, including `disabled`. Use
/// [`TabProps::new`] for a declaration that carries the declared defaults.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TabProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name_legacy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_label_style: Option<StyleMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_class_name: Option<String>,
    #[serde(default, rename = "tabClassName", skip_serializing_if = "Option::is_none")]
    pub tab_class_name_legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab_class_name: Option<String>,
    #[serde(
        default,
        rename = "activeTabClassName",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_tab_class_name_legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_class_name: Option<String>,
    #[serde(
        default,
        rename = "labelClassName",
        skip_serializing_if = "Option::is_none"
    )]
    pub label_class_name_legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_label_class_name: Option<String>,
    #[serde(
        default,
        rename = "activeLabelClassName",
        skip_serializing_if = "Option::is_none"
    )]
    pub active_label_class_name_legacy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_state: Option<LoadingState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Any other authored attribute; forwarded onto the content pane.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn pick<'a>(primary: &'a Option<String>, legacy: &'a Option<String>) -> Option<&'a str> {
    primary
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| legacy.as_deref().filter(|s| !s.is_empty()))
}

impl TabProps {
    /// A declaration as authored, with `disabled` carrying its declared default.
    pub fn new() -> Self {
        Self {
            disabled: Some(false),
            ..Self::default()
        }
    }

    pub fn with_tab_id(mut self, tab_id: impl Into<String>) -> Self {
        self.tab_id = Some(tab_id.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// The explicit identifier, if one was authored and is non-empty.
    pub fn explicit_tab_id(&self) -> Option<&str> {
        self.tab_id.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.unwrap_or(false)
    }

    pub fn is_loading(&self) -> bool {
        self.loading_state.as_ref().is_some_and(|s| s.is_loading)
    }

    pub fn class(&self) -> Option<&str> {
        pick(&self.class_name, &self.class_name_legacy)
    }

    pub fn tab_class(&self) -> Option<&str> {
        pick(&self.tab_class_name, &self.tab_class_name_legacy)
    }

    pub fn active_tab_class(&self) -> Option<&str> {
        pick(&self.active_tab_class_name, &self.active_tab_class_name_legacy)
    }

    pub fn label_class(&self) -> Option<&str> {
        pick(&self.label_class_name, &self.label_class_name_legacy)
    }

    pub fn active_label_class(&self) -> Option<&str> {
        pick(
            &self.active_label_class_name,
            &self.active_label_class_name_legacy,
        )
    }
}

impl AsRef<TabProps> for TabProps {
    fn as_ref(&self) -> &TabProps {
        self
    }
}

/// Persistence switch as the owner declares it: a flag, or any string/number
/// that changes when persisted values should be discarded.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Persistence {
    Flag(bool),
    Number(f64),
    Text(String),
}

impl Persistence {
    pub fn is_enabled(&self) -> bool {
        match self {
            Persistence::Flag(flag) => *flag,
            Persistence::Number(n) => *n != 0.0 && !n.is_nan(),
            Persistence::Text(s) => !s.is_empty(),
        }
    }
}

pub const ACTIVE_TAB_PROP: &str = "active_tab";

fn default_persisted_props() -> Vec<String> {
    vec![ACTIVE_TAB_PROP.to_string()]
}

/// Properties of the tabs container itself.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TabsProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_tab: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, rename = "className", skip_serializing_if = "Option::is_none")]
    pub class_name_legacy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_state: Option<LoadingState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persistence: Option<Persistence>,
    #[serde(default = "default_persisted_props")]
    pub persisted_props: Vec<String>,
    /// Unknown codes fall back to the default rather than failing the parse.
    #[serde(default, deserialize_with = "lenient_persistence_type")]
    pub persistence_type: PersistenceType,
}

fn lenient_persistence_type<'de, D>(deserializer: D) -> Result<PersistenceType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_str()
        .and_then(PersistenceType::from_code)
        .unwrap_or_default())
}

impl Default for TabsProps {
    fn default() -> Self {
        Self {
            id: None,
            active_tab: None,
            style: None,
            class_name: None,
            class_name_legacy: None,
            key: None,
            loading_state: None,
            persistence: None,
            persisted_props: default_persisted_props(),
            persistence_type: PersistenceType::default(),
        }
    }
}

impl TabsProps {
    pub fn class(&self) -> Option<&str> {
        pick(&self.class_name, &self.class_name_legacy)
    }

    pub fn is_loading(&self) -> bool {
        self.loading_state.as_ref().is_some_and(|s| s.is_loading)
    }

    /// True when the owner asked for `active_tab` to be persisted.
    pub fn persists_active_tab(&self) -> bool {
        self.persistence.as_ref().is_some_and(Persistence::is_enabled)
            && self.persisted_props.iter().any(|p| p == ACTIVE_TAB_PROP)
    }
}

/// Authored properties relocated one level deeper by an external binding layer.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AuthoredLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub props: Option<TabProps>,
}

/// One tab as it appears in a serialized layout.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TabLayout {
    /// Outer attributes; a missing object means nothing was declared here.
    #[serde(default)]
    pub props: TabProps,
    #[serde(
        default,
        rename = "authored_layout",
        skip_serializing_if = "Option::is_none"
    )]
    pub authored: Option<AuthoredLayout>,
}

/// Children as declared: a bare item or a list of items.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum DeclaredChildren<T> {
    Many(Vec<T>),
    One(T),
}

/// A tabs container with its declared children.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TabsLayout {
    #[serde(default)]
    pub props: TabsProps,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<DeclaredChildren<TabLayout>>,
}

pub fn parse_tabs_layout(json: &str) -> anyhow::Result<TabsLayout> {
    serde_json::from_str(json).context("parse tabs layout")
}

pub fn parse_tabs_props(json: &str) -> anyhow::Result<TabsProps> {
    serde_json::from_str(json).context("parse tabs props")
}
