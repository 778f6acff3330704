//! Navigation strip primitives.

use super::reconcile::ResolvedTab;
use super::style::{join_classes, style_text};
use leptos::prelude::*;

/// Tab strip container
#[component]
pub fn Nav(
    #[prop(optional, into)] id: MaybeProp<String>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    #[prop(optional, into)] style: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let nav_class = move || {
        join_classes([Some("nav nav-tabs"), class.get().as_deref()]).unwrap_or_default()
    };

    view! {
        <ul id=move || id.get() class=nav_class style=move || style.get()>
            {children()}
        </ul>
    }
}

/// One clickable entry of the strip.
///
/// The click is always reported through `on_select`; whether it has any
/// effect (disabled tabs) is decided by the caller.
#[component]
pub fn NavItem(
    tab: ResolvedTab,
    /// Rendered label; falls back to `label_text`
    label: Option<ViewFn>,
    label_text: Option<String>,
    on_select: Option<Callback<()>>,
) -> impl IntoView {
    let item_class = join_classes([Some("nav-item"), tab.class_name.as_deref()]);
    let link_class = join_classes([
        Some("nav-link"),
        tab.label_class_name.as_deref(),
        tab.is_active.then_some("active"),
        tab.disabled.then_some("disabled"),
    ]);
    let label_view = match label {
        Some(label) => label.run(),
        None => label_text.unwrap_or_default().into_any(),
    };

    view! {
        <li class=item_class style=style_text(&tab.style) data-tab-id=tab.identifier.clone()>
            <a
                href="#"
                class=link_class
                style=style_text(&tab.label_style)
                aria-disabled=tab.disabled.then_some("true")
                on:click=move |ev| {
                    ev.prevent_default();
                    if let Some(handler) = on_select {
                        handler.run(());
                    }
                }
            >
                {label_view}
            </a>
        </li>
    }
}
