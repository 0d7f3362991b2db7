use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemId(String);

crate::impl_string_newtype!(ItemId);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// What to draw in an item's chip. Resolution of names and paths is up to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemIcon {
    /// A short piece of text, usually a single symbol such as `♠`.
    Glyph(String),
    /// A freedesktop icon theme name.
    Named(String),
    /// An image file on disk.
    Image(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: ItemId,
    pub label: String,
    #[serde(default)]
    pub icon: Option<ItemIcon>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    #[error("Duplicate item id '{0}'")]
    DuplicateId(ItemId),
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: ItemIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// An item with a blank id cannot be selected or confirmed by the host.
    pub fn is_blank(&self) -> bool {
        self.id.trim().is_empty()
    }

    /// Drops blank entries, keeping order.
    pub fn clean(items: impl IntoIterator<Item = NavItem>) -> Vec<NavItem> {
        items.into_iter().filter(|item| !item.is_blank()).collect()
    }

    pub fn validate_unique(items: &[NavItem]) -> Result<(), ItemError> {
        let mut seen = HashSet::new();
        items
            .iter()
            .find(|item| !seen.insert(&item.id))
            .map_or(Ok(()), |dup| Err(ItemError::DuplicateId(dup.id.clone())))
    }
}
