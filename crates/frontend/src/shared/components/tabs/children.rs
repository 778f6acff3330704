//! Normalization of declared children into an ordered sequence.

use contracts::shared::tabs::DeclaredChildren;

/// Children as handed to the tabs container: nothing, a bare item, or a list.
#[derive(Clone, Debug, PartialEq)]
pub enum TabChildren<T> {
    Absent,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for TabChildren<T> {
    fn default() -> Self {
        TabChildren::Absent
    }
}

impl<T> TabChildren<T> {
    pub fn one(item: T) -> Self {
        TabChildren::One(item)
    }

    pub fn map<U, F>(self, mut f: F) -> TabChildren<U>
    where
        F: FnMut(T) -> U,
    {
        match self {
            TabChildren::Absent => TabChildren::Absent,
            TabChildren::One(item) => TabChildren::One(f(item)),
            TabChildren::Many(items) => TabChildren::Many(items.into_iter().map(f).collect()),
        }
    }

    /// Declaration order is kept as is: no filtering, reordering or dedup.
    pub fn normalize(self) -> Vec<T> {
        match self {
            TabChildren::Absent => Vec::new(),
            TabChildren::One(item) => vec![item],
            TabChildren::Many(items) => items,
        }
    }
}

impl<T> From<Vec<T>> for TabChildren<T> {
    fn from(items: Vec<T>) -> Self {
        TabChildren::Many(items)
    }
}

impl<T> From<DeclaredChildren<T>> for TabChildren<T> {
    fn from(children: DeclaredChildren<T>) -> Self {
        match children {
            DeclaredChildren::One(item) => TabChildren::One(item),
            DeclaredChildren::Many(items) => TabChildren::Many(items),
        }
    }
}

impl<T> From<Option<DeclaredChildren<T>>> for TabChildren<T> {
    fn from(children: Option<DeclaredChildren<T>>) -> Self {
        children.map(TabChildren::from).unwrap_or_default()
    }
}

/// An unset children prop behaves like [`TabChildren::Absent`].
pub fn normalize_children<T>(children: Option<TabChildren<T>>) -> Vec<T> {
    children.map(TabChildren::normalize).unwrap_or_default()
}
