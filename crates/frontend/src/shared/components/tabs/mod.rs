//! Tabs widget
//!
//! - `children` - normalization of declared children
//! - `resolve` - effective configuration of a possibly wrapped child
//! - `reconcile` - identifiers, active state, owner updates
//! - `style` - style and class merging for active tabs
//! - `pane` - attributes forwarded onto content panes
//! - `nav`, `content` - rendering primitives
//! - `component` - the `Tabs` component

pub mod children;
pub mod component;
pub mod content;
pub mod declaration;
pub mod nav;
pub mod pane;
pub mod reconcile;
pub mod resolve;
pub mod style;

pub use children::{normalize_children, TabChildren};
pub use component::{
    declarations_from_layout, effective_configs, strip_attributes, StripAttributes, Tabs,
};
pub use declaration::{AuthoredConfig, TabConfig, TabDeclaration};
pub use reconcile::{
    active_index, click_tab, compute_identifier, resolve_tabs, toggle, MountDefault, ResolvedTab,
};
pub use resolve::{resolve_effective_config, HasNestedAuthoredConfig};
