use crate::shared::components::tabs::{
    declarations_from_layout, strip_attributes, TabChildren, TabConfig, TabDeclaration, Tabs,
};
use contracts::shared::tabs::{
    parse_tabs_layout, LoadingState, StyleMap, TabProps, TabsLayout, TabsProps,
};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance, Space};

/// Owner of the active tab shown on the demo page.
#[derive(Clone, Copy)]
pub struct ActiveTabStore {
    pub active: RwSignal<Option<String>>,
}

impl ActiveTabStore {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
        }
    }

    pub fn activate_tab(&self, key: &str) {
        leptos::logging::log!("activate_tab: key='{}'", key);
        self.active.set(Some(key.to_string()));
    }

    pub fn clear(&self) {
        self.active.set(None);
    }
}

impl Default for ActiveTabStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings section as an external binding layer would hand it over: the
/// second child has its authored props moved under `authored_layout`.
const SETTINGS_LAYOUT: &str = r#"{
    "props": {
        "id": "settings-tabs",
        "className": "nav-compact",
        "active_tab": "advanced",
        "persistence": true,
        "persistence_type": "session"
    },
    "children": [
        {"props": {"label": "General", "disabled": false, "title": "General settings"}},
        {"props": {"label": "…"}, "authored_layout": {"props": {"tab_id": "advanced", "label": "Advanced"}}},
        {"props": {"label": "Experimental", "disabled": true}}
    ]
}"#;

fn accent_style() -> StyleMap {
    StyleMap::from([("fontWeight".to_string(), "600".to_string())])
}

fn demo_tabs() -> TabChildren<TabDeclaration> {
    vec![
        TabConfig::new(TabProps {
            active_label_style: Some(accent_style()),
            active_tab_class_name: Some("nav-item--current".into()),
            ..TabProps::new().with_label("Overview")
        })
        .with_content(|| view! { <p>"Summary of the current workspace."</p> })
        .into(),
        TabConfig::new(TabProps::new().with_tab_id("reports").with_label("Reports"))
            .with_content(|| view! { <p>"Saved reports."</p> })
            .into(),
        TabDeclaration::relocated(
            TabProps::default().with_label("…"),
            TabConfig::new(TabProps::new().with_tab_id("wrapped").with_label("Wrapped"))
                .with_content(|| view! { <p>"Authored one level deeper."</p> }),
        ),
        TabConfig::new(TabProps {
            loading_state: Some(LoadingState::loading()),
            ..TabProps::new()
                .with_tab_id("archive")
                .with_label("Archive")
                .with_disabled(true)
        })
        .with_content(|| view! { <p>"Archived items."</p> })
        .into(),
    ]
    .into()
}

#[component]
pub fn App() -> impl IntoView {
    let store = ActiveTabStore::new();

    let (settings_props, settings_tabs) = match parse_tabs_layout(SETTINGS_LAYOUT) {
        Ok(TabsLayout { props, children }) => (props, declarations_from_layout(children)),
        Err(err) => {
            log::error!("Failed to load settings layout: {:#}", err);
            (TabsProps::default(), TabChildren::Absent)
        }
    };
    if settings_props.persists_active_tab() {
        // Storage itself is left to whoever owns the value.
        log::debug!(
            "settings tabs request {} persistence of active_tab",
            settings_props.persistence_type
        );
    }
    let settings_strip = strip_attributes(&settings_props);

    let active_tab = Signal::derive(move || store.active.get());

    view! {
        <Space vertical=true>
            <Tabs
                tabs=demo_tabs()
                active_tab=active_tab
                set_active_tab=Callback::new(move |key: String| store.activate_tab(&key))
                class="demo-tabs"
            />
            <Space>
                // The archive tab is disabled, but the owner may still select it.
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| store.activate_tab("archive")>
                    "Open archive"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| store.clear()>
                    "Clear selection"
                </Button>
                <span>{move || store.active.get().unwrap_or_else(|| "(none)".to_string())}</span>
            </Space>
            // Read-only: no owner callback.
            <Tabs
                tabs=settings_tabs
                active_tab=settings_props.active_tab
                id=settings_strip.id
                class=settings_strip.class
                style=settings_strip.style
                loading_state=settings_strip.loading_state
            />
        </Space>
    }
}
