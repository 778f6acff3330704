//! Active-tab reconciliation.
//!
//! The active identifier is owned outside the tabs container. Everything here
//! reads it by value and only ever asks the owner to change it through the
//! `set_active_tab` callback; with no callback the container is read-only.

use super::style::{merge_class, merge_style};
use contracts::shared::tabs::{StyleMap, TabProps};

pub const FALLBACK_ID_PREFIX: &str = "tab-";

/// Explicit `tab_id` when set and non-empty, otherwise `tab-{index}`.
pub fn compute_identifier(props: &TabProps, index: usize) -> String {
    match props.explicit_tab_id() {
        Some(id) => id.to_string(),
        None => format!("{}{}", FALLBACK_ID_PREFIX, index),
    }
}

/// Per-render view of one tab.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedTab {
    pub index: usize,
    pub identifier: String,
    pub is_active: bool,
    pub disabled: bool,
    pub style: StyleMap,
    pub label_style: StyleMap,
    pub class_name: Option<String>,
    pub label_class_name: Option<String>,
}

impl ResolvedTab {
    fn new(props: &TabProps, index: usize, identifier: String, is_active: bool) -> Self {
        Self {
            index,
            identifier,
            is_active,
            disabled: props.is_disabled(),
            style: merge_style(
                props.tab_style.as_ref(),
                props.active_tab_style.as_ref(),
                is_active,
            ),
            label_style: merge_style(
                props.label_style.as_ref(),
                props.active_label_style.as_ref(),
                is_active,
            ),
            class_name: merge_class(props.tab_class(), props.active_tab_class(), is_active),
            label_class_name: merge_class(
                props.label_class(),
                props.active_label_class(),
                is_active,
            ),
        }
    }
}

/// Resolves every tab against the current active value.
///
/// At most one tab comes out active: when several tabs share the active
/// identifier only the first in declaration order is marked. No match at all
/// leaves every tab inactive.
pub fn resolve_tabs<'a, I>(configs: I, active_tab: Option<&str>) -> Vec<ResolvedTab>
where
    I: IntoIterator<Item = &'a TabProps>,
{
    let mut claimed = false;
    configs
        .into_iter()
        .enumerate()
        .map(|(index, props)| {
            let identifier = compute_identifier(props, index);
            let is_active = !claimed && active_tab == Some(identifier.as_str());
            claimed |= is_active;
            ResolvedTab::new(props, index, identifier, is_active)
        })
        .collect()
}

/// Position of the single active tab, the one the content area shows.
pub fn active_index<'a, I>(configs: I, active_tab: Option<&str>) -> Option<usize>
where
    I: IntoIterator<Item = &'a TabProps>,
{
    resolve_tabs(configs, active_tab)
        .iter()
        .position(|tab| tab.is_active)
}

/// Identifier the owner is asked to adopt on mount.
pub fn first_identifier<'a, I>(configs: I) -> Option<String>
where
    I: IntoIterator<Item = &'a TabProps>,
{
    configs
        .into_iter()
        .next()
        .map(|props| compute_identifier(props, 0))
}

/// Asks the owner to make `requested` active. Returns whether the owner was
/// called; re-selecting the current tab is a no-op.
pub fn toggle(
    active_tab: Option<&str>,
    requested: &str,
    set_active_tab: Option<&dyn Fn(String)>,
) -> bool {
    let Some(set_active_tab) = set_active_tab else {
        log::debug!("toggle to '{}' ignored: no owner callback", requested);
        return false;
    };
    if active_tab == Some(requested) {
        return false;
    }
    log::debug!("toggle: {:?} -> '{}'", active_tab, requested);
    set_active_tab(requested.to_string());
    true
}

/// Click on a nav item. Disabled tabs never reach [`toggle`].
pub fn click_tab(
    tab: &ResolvedTab,
    active_tab: Option<&str>,
    set_active_tab: Option<&dyn Fn(String)>,
) -> bool {
    if tab.disabled {
        log::debug!("click on disabled tab '{}' ignored", tab.identifier);
        return false;
    }
    toggle(active_tab, &tab.identifier, set_active_tab)
}

/// One-shot default selection, scheduled after the first render commits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MountDefault {
    #[default]
    Pending,
    Done,
    Cancelled,
}

impl MountDefault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, MountDefault::Pending)
    }

    /// The container went away before the default was sent.
    pub fn cancel(&mut self) {
        if self.is_pending() {
            *self = MountDefault::Cancelled;
        }
    }

    /// Sends `first_identifier` to the owner if the active value is still
    /// unset. `read_active` is called right before sending so a value the
    /// owner supplied in the meantime is never overwritten.
    ///
    /// Whatever the outcome, later calls do nothing.
    pub fn fire<R>(
        &mut self,
        read_active: R,
        first_identifier: Option<String>,
        set_active_tab: Option<&dyn Fn(String)>,
    ) -> bool
    where
        R: FnOnce() -> Option<String>,
    {
        if !self.is_pending() {
            return false;
        }
        *self = MountDefault::Done;

        let (Some(set_active_tab), Some(first)) = (set_active_tab, first_identifier) else {
            return false;
        };
        if let Some(current) = read_active() {
            log::debug!("mount default skipped: owner already set '{}'", current);
            return false;
        }
        log::debug!("mount default: requesting active tab '{}'", first);
        set_active_tab(first);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn tab(id: Option<&str>) -> TabProps {
        let props = TabProps::new();
        match id {
            Some(id) => props.with_tab_id(id),
            None => props,
        }
    }

    fn style(pairs: &[(&str, &str)]) -> StyleMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_identifier_fallback_follows_position() {
        let tabs = [tab(None), tab(Some("named")), tab(None), tab(Some(""))];
        let ids: Vec<_> = tabs
            .iter()
            .enumerate()
            .map(|(i, t)| compute_identifier(t, i))
            .collect();
        assert_eq!(ids, vec!["tab-0", "named", "tab-2", "tab-3"]);
    }

    #[test]
    fn test_active_exclusivity() {
        let tabs = [tab(None), tab(Some("x")), tab(None)];
        for active in [None, Some("tab-0"), Some("x"), Some("tab-2"), Some("tab-1"), Some("zzz")] {
            let resolved = resolve_tabs(&tabs, active);
            let active_ids: Vec<_> = resolved
                .iter()
                .filter(|t| t.is_active)
                .map(|t| t.identifier.as_str())
                .collect();
            match active {
                Some(id) if resolved.iter().any(|t| t.identifier == id) => {
                    assert_eq!(active_ids, vec![id])
                }
                _ => assert!(active_ids.is_empty(), "{:?} -> {:?}", active, active_ids),
            }
        }
    }

    #[test]
    fn test_duplicate_identifier_marks_first_only() {
        let tabs = [tab(Some("tab-1")), tab(None)];
        let resolved = resolve_tabs(&tabs, Some("tab-1"));
        assert!(resolved[0].is_active);
        assert!(!resolved[1].is_active);
    }

    #[test]
    fn test_active_index_matches_nav_with_duplicate_identifier() {
        let tabs = [tab(Some("tab-1")), tab(None)];
        let nav_active: Vec<_> = resolve_tabs(&tabs, Some("tab-1"))
            .iter()
            .map(|t| t.is_active)
            .collect();
        let shown = active_index(&tabs, Some("tab-1"));
        let pane_visible: Vec<_> = (0..tabs.len()).map(|i| shown == Some(i)).collect();

        assert_eq!(nav_active, vec![true, false]);
        assert_eq!(pane_visible, nav_active);
    }

    #[test]
    fn test_active_index_none_without_match() {
        let tabs = [tab(None), tab(Some("x"))];
        assert_eq!(active_index(&tabs, Some("x")), Some(1));
        assert_eq!(active_index(&tabs, Some("missing")), None);
        assert_eq!(active_index(&tabs, None), None);
    }

    #[test]
    fn test_active_tab_visuals() {
        let props = TabProps {
            tab_style: Some(style(&[("color", "grey"), ("padding", "4px")])),
            active_tab_style: Some(style(&[("color", "black")])),
            label_style: Some(style(&[("fontSize", "12px")])),
            active_label_style: Some(style(&[("fontWeight", "bold")])),
            tab_class_name: Some("tab".into()),
            active_tab_class_name: Some("tab--active".into()),
            label_class_name: Some("lbl".into()),
            active_label_class_name: Some("lbl--active".into()),
            ..TabProps::new().with_tab_id("a")
        };
        let tabs = [props];

        let active = &resolve_tabs(&tabs, Some("a"))[0];
        assert!(active.is_active);
        assert_eq!(active.style, style(&[("color", "black"), ("padding", "4px")]));
        assert_eq!(
            active.label_style,
            style(&[("fontSize", "12px"), ("fontWeight", "bold")])
        );
        assert_eq!(active.class_name.as_deref(), Some("tab tab--active"));
        assert_eq!(active.label_class_name.as_deref(), Some("lbl lbl--active"));

        let inactive = &resolve_tabs(&tabs, Some("b"))[0];
        assert!(!inactive.is_active);
        assert_eq!(inactive.style, style(&[("color", "grey"), ("padding", "4px")]));
        assert_eq!(inactive.class_name.as_deref(), Some("tab"));
        assert_eq!(inactive.label_class_name.as_deref(), Some("lbl"));
    }

    #[test]
    fn test_first_identifier() {
        assert_eq!(first_identifier(&[tab(Some("x")), tab(None)]), Some("x".into()));
        assert_eq!(first_identifier(&[tab(None), tab(Some("y"))]), Some("tab-0".into()));
        assert_eq!(first_identifier(&[] as &[TabProps]), None);
    }

    #[test]
    fn test_toggle_calls_owner_once_for_new_tab() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);

        assert!(toggle(Some("a"), "b", Some(&set)));
        assert_eq!(*calls.borrow(), vec!["b".to_string()]);
    }

    #[test]
    fn test_toggle_current_tab_is_noop() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);

        assert!(!toggle(Some("a"), "a", Some(&set)));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_toggle_without_owner_is_read_only() {
        assert!(!toggle(None, "a", None));
    }

    #[test]
    fn test_toggle_from_unset_active() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);

        assert!(toggle(None, "tab-0", Some(&set)));
        assert_eq!(*calls.borrow(), vec!["tab-0".to_string()]);
    }

    #[test]
    fn test_click_on_disabled_tab_is_noop() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);
        let tabs = [tab(Some("a")), tab(Some("b")).with_disabled(true)];
        let resolved = resolve_tabs(&tabs, Some("a"));

        assert!(!click_tab(&resolved[1], Some("a"), Some(&set)));
        assert!(calls.borrow().is_empty());

        assert!(click_tab(&resolved[0], Some("b"), Some(&set)));
        assert_eq!(*calls.borrow(), vec!["a".to_string()]);
    }

    #[test]
    fn test_disabled_tab_can_be_active_when_owner_sets_it() {
        let tabs = [tab(Some("a")), tab(Some("b")).with_disabled(true)];
        let resolved = resolve_tabs(&tabs, Some("b"));
        assert!(resolved[1].is_active);
        assert!(resolved[1].disabled);
    }

    #[test]
    fn test_mount_default_fires_once_with_first_identifier() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);
        let tabs = [tab(Some("x")), tab(None)];

        let mut mount = MountDefault::new();
        assert!(mount.fire(|| None, first_identifier(&tabs), Some(&set)));
        assert!(!mount.fire(|| None, first_identifier(&tabs), Some(&set)));
        assert_eq!(*calls.borrow(), vec!["x".to_string()]);
        assert_eq!(mount, MountDefault::Done);
    }

    #[test]
    fn test_mount_default_falls_back_to_tab_0() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);

        let mut mount = MountDefault::new();
        mount.fire(|| None, first_identifier(&[tab(None)]), Some(&set));
        assert_eq!(*calls.borrow(), vec!["tab-0".to_string()]);
    }

    #[test]
    fn test_mount_default_skipped_when_owner_supplied_value() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);
        let tabs = [tab(Some("x")), tab(None)];

        let mut mount = MountDefault::new();
        assert!(!mount.fire(|| Some("y".into()), first_identifier(&tabs), Some(&set)));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_mount_default_rechecks_right_before_sending() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);
        // Unset when scheduled, set by the owner by the time the effect runs.
        let owner_value = RefCell::new(None::<String>);
        let mut mount = MountDefault::new();
        *owner_value.borrow_mut() = Some("late".into());

        assert!(!mount.fire(
            || owner_value.borrow().clone(),
            Some("tab-0".into()),
            Some(&set)
        ));
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_mount_default_cancelled_never_fires() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);

        let mut mount = MountDefault::new();
        mount.cancel();
        assert!(!mount.fire(|| None, Some("tab-0".into()), Some(&set)));
        assert!(calls.borrow().is_empty());
        assert_eq!(mount, MountDefault::Cancelled);
    }

    #[test]
    fn test_mount_default_without_children_or_owner() {
        let calls = RefCell::new(Vec::new());
        let set = |v: String| calls.borrow_mut().push(v);

        assert!(!MountDefault::new().fire(|| None, None, Some(&set)));
        assert!(!MountDefault::new().fire(|| None, Some("tab-0".into()), None));
        assert!(calls.borrow().is_empty());
    }
}
