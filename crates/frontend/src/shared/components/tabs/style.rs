//! Visual attribute derivation for active and inactive tabs.

use contracts::shared::tabs::StyleMap;

/// Base style, with the active override merged on top when `is_active`.
/// On a key collision the override wins.
pub fn merge_style(
    base: Option<&StyleMap>,
    active_override: Option<&StyleMap>,
    is_active: bool,
) -> StyleMap {
    let mut merged = base.cloned().unwrap_or_default();
    if is_active {
        if let Some(overrides) = active_override {
            merged.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
    }
    merged
}

/// Space-joins the non-empty class names; `None` when nothing is left.
pub fn join_classes<'a, I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let joined = parts
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

/// Base class followed by the active class when `is_active`. Appended, never
/// substituted.
pub fn merge_class(base: Option<&str>, active_extra: Option<&str>, is_active: bool) -> Option<String> {
    join_classes([base, active_extra.filter(|_| is_active)])
}

/// `fontWeight` → `font-weight`; names already in CSS form pass through.
fn css_property_name(key: &str) -> String {
    if key.starts_with("--") {
        return key.to_string();
    }
    let mut name = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}

/// Inline `style` attribute text; `None` for an empty map.
pub fn style_text(style: &StyleMap) -> Option<String> {
    if style.is_empty() {
        return None;
    }
    let text = style
        .iter()
        .map(|(k, v)| format!("{}: {};", css_property_name(k), v))
        .collect::<Vec<_>>()
        .join(" ");
    Some(text)
}
