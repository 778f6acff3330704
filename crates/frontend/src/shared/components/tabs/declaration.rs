use contracts::shared::tabs::{TabLayout, TabProps};
use leptos::prelude::*;
use std::fmt;

/// Effective configuration of one tab: authored props plus renderable parts.
#[derive(Clone, Default)]
pub struct TabConfig {
    pub props: TabProps,
    /// Rendered instead of `props.label` when set.
    pub label: Option<ViewFn>,
    pub content: Option<ViewFn>,
}

impl TabConfig {
    pub fn new(props: TabProps) -> Self {
        Self {
            props,
            label: None,
            content: None,
        }
    }

    pub fn with_label_view<F, C>(mut self, label: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: IntoView + 'static,
    {
        self.label = Some(ViewFn::from(label));
        self
    }

    pub fn with_content<F, C>(mut self, content: F) -> Self
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: IntoView + 'static,
    {
        self.content = Some(ViewFn::from(content));
        self
    }
}

impl AsRef<TabProps> for TabConfig {
    fn as_ref(&self) -> &TabProps {
        &self.props
    }
}

impl fmt::Debug for TabConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabConfig")
            .field("props", &self.props)
            .field("label", &self.label.is_some())
            .field("content", &self.content.is_some())
            .finish()
    }
}

/// Configuration an external binding layer moved one level below the
/// declared attributes.
#[derive(Clone, Debug, Default)]
pub struct AuthoredConfig {
    pub props: Option<TabConfig>,
}

/// A declared child of the tabs container.
#[derive(Clone, Debug, Default)]
pub struct TabDeclaration {
    pub declared: TabConfig,
    pub authored: Option<AuthoredConfig>,
}

impl TabDeclaration {
    pub fn new(config: TabConfig) -> Self {
        Self {
            declared: config,
            authored: None,
        }
    }

    /// A child whose visible attributes were rewritten, with the authored
    /// configuration kept in the nested wrapper.
    pub fn relocated(outer: TabProps, authored: TabConfig) -> Self {
        Self {
            declared: TabConfig::new(outer),
            authored: Some(AuthoredConfig {
                props: Some(authored),
            }),
        }
    }
}

impl From<TabConfig> for TabDeclaration {
    fn from(config: TabConfig) -> Self {
        Self::new(config)
    }
}

impl From<TabProps> for TabDeclaration {
    fn from(props: TabProps) -> Self {
        Self::new(TabConfig::new(props))
    }
}

impl From<TabLayout> for TabDeclaration {
    fn from(layout: TabLayout) -> Self {
        Self {
            declared: TabConfig::new(layout.props),
            authored: layout.authored.map(|a| AuthoredConfig {
                props: a.props.map(TabConfig::new),
            }),
        }
    }
}
