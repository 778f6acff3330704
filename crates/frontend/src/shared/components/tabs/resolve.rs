//! Resolution of a child's effective configuration.
//!
//! An external binding layer may rewrite the attributes a child shows while
//! keeping the authored ones in a nested wrapper. The outer `disabled`
//! attribute always carries a declared default, so when it is unset the outer
//! attributes are not the authored ones and the nested wrapper wins.

use super::declaration::TabDeclaration;
use contracts::shared::tabs::{TabLayout, TabProps};

/// A child that may carry its authored configuration one level deeper.
pub trait HasNestedAuthoredConfig {
    type Config: AsRef<TabProps>;

    /// Attributes as they appear on the child itself.
    fn declared_config(&self) -> &Self::Config;

    /// The nested wrapper's properties object, if both exist.
    fn nested_authored_config(&self) -> Option<&Self::Config>;
}

pub fn resolve_effective_config<C>(child: &C) -> &C::Config
where
    C: HasNestedAuthoredConfig + ?Sized,
{
    let declared = child.declared_config();
    if declared.as_ref().disabled.is_none() {
        if let Some(nested) = child.nested_authored_config() {
            log::trace!("tab attributes relocated, using nested authored config");
            return nested;
        }
    }
    declared
}

impl HasNestedAuthoredConfig for TabDeclaration {
    type Config = super::declaration::TabConfig;

    fn declared_config(&self) -> &Self::Config {
        &self.declared
    }

    fn nested_authored_config(&self) -> Option<&Self::Config> {
        self.authored.as_ref().and_then(|a| a.props.as_ref())
    }
}

impl HasNestedAuthoredConfig for TabLayout {
    type Config = TabProps;

    fn declared_config(&self) -> &TabProps {
        &self.props
    }

    fn nested_authored_config(&self) -> Option<&TabProps> {
        self.authored.as_ref().and_then(|a| a.props.as_ref())
    }
}
