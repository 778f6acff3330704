//! Tabs component: nav strip plus content area over owner-held selection.

use super::children::{normalize_children, TabChildren};
use super::content::{TabContent, TabPane};
use super::declaration::{TabConfig, TabDeclaration};
use super::nav::{Nav, NavItem};
use super::pane::{loading_marker, pane_attributes};
use super::reconcile::{
    active_index, click_tab, compute_identifier, first_identifier, resolve_tabs, MountDefault,
};
use super::resolve::resolve_effective_config;
use super::style::{join_classes, style_text};
use contracts::shared::tabs::{DeclaredChildren, LoadingState, TabLayout, TabsProps as LayoutTabsProps};
use leptos::logging::log;
use leptos::prelude::*;

/// Effective configuration of every declared child, in declaration order.
pub fn effective_configs(children: Option<TabChildren<TabDeclaration>>) -> Vec<TabConfig> {
    normalize_children(children)
        .iter()
        .map(|child| resolve_effective_config(child).clone())
        .collect()
}

/// Children of a serialized layout as tab declarations.
pub fn declarations_from_layout(
    children: Option<DeclaredChildren<TabLayout>>,
) -> TabChildren<TabDeclaration> {
    TabChildren::from(children).map(TabDeclaration::from)
}

/// Container attributes of a serialized layout, as `Tabs` props.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StripAttributes {
    pub id: Option<String>,
    pub class: Option<String>,
    pub style: Option<String>,
    pub loading_state: Option<LoadingState>,
}

pub fn strip_attributes(props: &LayoutTabsProps) -> StripAttributes {
    StripAttributes {
        id: props.id.clone().filter(|id| !id.is_empty()),
        class: join_classes([props.class()]),
        style: props.style.as_ref().and_then(style_text),
        loading_state: props.loading_state.clone(),
    }
}

fn with_owner_setter<R>(
    set_active_tab: Option<Callback<String>>,
    f: impl FnOnce(Option<&dyn Fn(String)>) -> R,
) -> R {
    match set_active_tab {
        Some(callback) => {
            let send = move |value: String| callback.run(value);
            f(Some(&send))
        }
        None => f(None),
    }
}

/// One-shot default selection, cancelled when the owning scope is cleaned up.
fn install_mount_default() -> StoredValue<MountDefault> {
    let mount_default = StoredValue::new(MountDefault::new());
    on_cleanup(move || {
        mount_default.try_update_value(|mount| mount.cancel());
    });
    mount_default
}

/// Body of the mount effect. Reads everything untracked; returns whether the
/// owner was asked to adopt the first tab.
fn request_mount_default(
    mount_default: StoredValue<MountDefault>,
    tabs: MaybeProp<TabChildren<TabDeclaration>>,
    active_tab: MaybeProp<String>,
    set_active_tab: Option<Callback<String>>,
) -> bool {
    let configs = effective_configs(untrack(move || tabs.get()));
    let first = first_identifier(configs.iter().map(|c| &c.props));
    let fired = mount_default
        .try_update_value(|mount| {
            with_owner_setter(set_active_tab, |setter| {
                mount.fire(|| untrack(move || active_tab.get()), first, setter)
            })
        })
        .unwrap_or(false);
    if fired {
        log!("Tabs: default active tab requested ({} tabs)", configs.len());
    }
    fired
}

/// Tab strip with a content area showing one child at a time.
///
/// The active identifier belongs to the caller: it is read from `active_tab`
/// and changes are requested through `set_active_tab`. Without a callback the
/// component is read-only.
#[component]
pub fn Tabs(
    /// Declared tabs: none, one, or many
    #[prop(optional, into)]
    tabs: MaybeProp<TabChildren<TabDeclaration>>,
    /// Identifier of the active tab, owned by the caller
    #[prop(optional, into)]
    active_tab: MaybeProp<String>,
    /// Requests a new active tab from the owner
    #[prop(optional)]
    set_active_tab: Option<Callback<String>>,
    #[prop(optional, into)] id: MaybeProp<String>,
    /// Additional CSS classes for the strip
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Inline style for the strip
    #[prop(optional, into)]
    style: MaybeProp<String>,
    #[prop(optional, into)] loading_state: MaybeProp<LoadingState>,
) -> impl IntoView {
    let mount_default = install_mount_default();

    // Tracks nothing, so it runs once after the first render.
    Effect::new(move |_| {
        request_mount_default(mount_default, tabs, active_tab, set_active_tab);
    });

    let nav_items = move || {
        let active = active_tab.get();
        let configs = effective_configs(tabs.get());
        let resolved = resolve_tabs(configs.iter().map(|c| &c.props), active.as_deref());

        resolved
            .into_iter()
            .zip(configs)
            .map(|(tab, config)| {
                let clicked = tab.clone();
                let on_select = Callback::new(move |_: ()| {
                    let current = untrack(move || active_tab.get());
                    with_owner_setter(set_active_tab, |setter| {
                        click_tab(&clicked, current.as_deref(), setter)
                    });
                });
                view! {
                    <NavItem
                        tab=tab
                        label=config.label
                        label_text=config.props.label
                        on_select=Some(on_select)
                    />
                }
            })
            .collect_view()
    };

    let panes = move || {
        effective_configs(tabs.get())
            .into_iter()
            .enumerate()
            .map(|(index, config)| {
                let identifier = compute_identifier(&config.props, index);
                let attributes = pane_attributes(&config.props);
                let loading = loading_marker(config.props.loading_state.as_ref());
                view! {
                    <TabPane
                        index=index
                        identifier=identifier
                        attributes=attributes
                        loading=loading
                        content=config.content
                    />
                }
            })
            .collect_view()
    };

    // Same resolution as the strip: at most one pane shows.
    let shown_index = Signal::derive(move || {
        let active = active_tab.get();
        let configs = effective_configs(tabs.get());
        active_index(configs.iter().map(|c| &c.props), active.as_deref())
    });

    view! {
        <div data-loading=move || loading_marker(loading_state.get().as_ref())>
            <Nav id=id class=class style=style>
                {nav_items}
            </Nav>
            <TabContent shown_index=shown_index>
                {panes}
            </TabContent>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::tabs::{parse_tabs_layout, TabProps, TabsProps};
    use std::sync::{Arc, Mutex};

    fn recorder() -> (Arc<Mutex<Vec<String>>>, Callback<String>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = calls.clone();
        let callback = Callback::new(move |value: String| sink.lock().unwrap().push(value));
        (calls, callback)
    }

    fn two_tabs() -> MaybeProp<TabChildren<TabDeclaration>> {
        MaybeProp::from(TabChildren::from(vec![
            TabDeclaration::from(TabProps::new().with_tab_id("x")),
            TabDeclaration::from(TabProps::new()),
        ]))
    }

    #[test]
    fn test_effective_configs_of_absent_children() {
        assert!(effective_configs(None).is_empty());
        assert!(effective_configs(Some(TabChildren::Absent)).is_empty());
    }

    #[test]
    fn test_effective_configs_mix_wrapped_and_plain() {
        let children = TabChildren::from(vec![
            TabDeclaration::from(TabProps::new().with_label("Plain")),
            TabDeclaration::relocated(
                TabProps::default().with_label("rewritten"),
                TabConfig::new(TabProps::new().with_tab_id("w").with_label("Wrapped")),
            ),
        ]);
        let configs = effective_configs(Some(children));
        let labels: Vec<_> = configs.iter().map(|c| c.props.label.as_deref()).collect();
        assert_eq!(labels, vec![Some("Plain"), Some("Wrapped")]);

        let ids: Vec<_> = configs
            .iter()
            .enumerate()
            .map(|(i, c)| compute_identifier(&c.props, i))
            .collect();
        assert_eq!(ids, vec!["tab-0", "w"]);
    }

    #[test]
    fn test_declarations_from_layout() {
        let layout = parse_tabs_layout(
            r#"{"children": [
                {"props": {"label": "A", "disabled": false}},
                {"props": {}, "authored_layout": {"props": {"tab_id": "b", "disabled": true}}}
            ]}"#,
        )
        .unwrap();
        let configs = effective_configs(Some(declarations_from_layout(layout.children)));
        let resolved = resolve_tabs(configs.iter().map(|c| &c.props), Some("b"));
        assert_eq!(resolved[0].identifier, "tab-0");
        assert!(resolved[1].is_active);
        assert!(resolved[1].disabled);
    }

    #[test]
    fn test_duplicate_identifier_shows_one_pane() {
        let children = TabChildren::from(vec![
            TabDeclaration::from(TabProps::new().with_tab_id("tab-1")),
            TabDeclaration::from(TabProps::new()),
        ]);
        let configs = effective_configs(Some(children));
        let props = || configs.iter().map(|c| &c.props);

        let nav_active: Vec<_> = resolve_tabs(props(), Some("tab-1"))
            .iter()
            .map(|t| t.is_active)
            .collect();
        let shown = active_index(props(), Some("tab-1"));
        let pane_visible: Vec<_> = (0..configs.len()).map(|i| shown == Some(i)).collect();

        assert_eq!(nav_active, vec![true, false]);
        assert_eq!(pane_visible, vec![true, false]);
    }

    #[test]
    fn test_strip_attributes_from_layout() {
        let layout = parse_tabs_layout(
            r#"{"props": {"id": "settings-tabs", "className": "compact", "style": {"marginTop": "4px"},
                "loading_state": {"is_loading": true}}}"#,
        )
        .unwrap();
        let strip = strip_attributes(&layout.props);
        assert_eq!(strip.id.as_deref(), Some("settings-tabs"));
        assert_eq!(strip.class.as_deref(), Some("compact"));
        assert_eq!(strip.style.as_deref(), Some("margin-top: 4px;"));
        assert_eq!(loading_marker(strip.loading_state.as_ref()), Some("true"));

        assert_eq!(strip_attributes(&TabsProps::default()), StripAttributes::default());
    }

    #[test]
    fn test_mount_default_requested_once_across_renders() {
        let owner = Owner::new();
        owner.with(|| {
            let (calls, set_active_tab) = recorder();
            let tabs = two_tabs();
            let mount_default = install_mount_default();

            assert!(request_mount_default(
                mount_default,
                tabs,
                MaybeProp::default(),
                Some(set_active_tab)
            ));
            // The owner has not adopted the value yet; a later run still does nothing.
            assert!(!request_mount_default(
                mount_default,
                tabs,
                MaybeProp::default(),
                Some(set_active_tab)
            ));
            assert_eq!(*calls.lock().unwrap(), vec!["x".to_string()]);
        });
    }

    #[test]
    fn test_mount_default_skipped_when_owner_already_set() {
        let owner = Owner::new();
        owner.with(|| {
            let (calls, set_active_tab) = recorder();
            let mount_default = install_mount_default();

            assert!(!request_mount_default(
                mount_default,
                two_tabs(),
                MaybeProp::from("y".to_string()),
                Some(set_active_tab)
            ));
            assert!(calls.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn test_mount_default_not_sent_after_cleanup() {
        let owner = Owner::new();
        owner.with(|| {
            let (calls, set_active_tab) = recorder();
            let tabs = two_tabs();

            let component_scope = Owner::new();
            let mount_default = component_scope.with(install_mount_default);
            component_scope.cleanup();

            assert!(!request_mount_default(
                mount_default,
                tabs,
                MaybeProp::default(),
                Some(set_active_tab)
            ));
            assert!(calls.lock().unwrap().is_empty());
        });
    }
}
