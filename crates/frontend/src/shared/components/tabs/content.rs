//! Content switcher primitives.

use super::pane::PaneAttributes;
use leptos::prelude::*;

#[derive(Clone, Copy)]
struct ShownPane(Signal<Option<usize>>);

/// Holds the panes; only the one at `shown_index` shows.
///
/// The index comes from the same resolution as the nav strip, so the strip
/// and the content area never disagree on duplicate identifiers.
#[component]
pub fn TabContent(
    #[prop(into)] shown_index: Signal<Option<usize>>,
    children: Children,
) -> impl IntoView {
    provide_context(ShownPane(shown_index));

    view! {
        <div class="tab-content">
            {children()}
        </div>
    }
}

#[component]
pub fn TabPane(
    /// Position in declaration order
    index: usize,
    identifier: String,
    attributes: PaneAttributes,
    /// Loading marker, absent unless loading
    loading: Option<&'static str>,
    content: Option<ViewFn>,
) -> impl IntoView {
    let shown = use_context::<ShownPane>();
    let is_active =
        Signal::derive(move || shown.is_some_and(|ShownPane(shown)| shown.get() == Some(index)));

    let PaneAttributes {
        id,
        style,
        class_name,
        extra,
    } = attributes;

    // Extra attribute names are only known at runtime.
    let pane_ref = NodeRef::<leptos::html::Div>::new();
    Effect::new(move |_| {
        if let Some(el) = pane_ref.get() {
            for (name, value) in &extra {
                if let Err(err) = el.set_attribute(name, value) {
                    log::warn!("cannot set pane attribute '{}': {:?}", name, err);
                }
            }
        }
    });

    view! {
        <div
            class="tab-pane"
            class:active=move || is_active.get()
            style=move || if is_active.get() { "" } else { "display: none;" }
            data-tab-id=identifier
        >
            <div node_ref=pane_ref id=id class=class_name style=style data-loading=loading>
                {content.map(|content| content.run())}
            </div>
        </div>
    }
}
