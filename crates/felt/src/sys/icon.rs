use chipwheel::ItemIcon;
use derive_more::{AsRef, Deref, Display, From, Into};
use freedesktop_icons::lookup;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Lookup size for theme icons; pixbufs are scaled down when drawn.
pub const LOOKUP_SIZE: u16 = 128;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct IconName(String);

chipwheel::impl_string_newtype!(IconName);

pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.trim().is_empty() {
        return None;
    }

    let path = Path::new(icon_name.as_str());
    if path.is_absolute() {
        return path.exists().then(|| path.to_path_buf());
    }

    lookup(icon_name.as_str())
        .with_size(LOOKUP_SIZE)
        .with_scale(1)
        .find()
}

static RESOLVED: OnceLock<RwLock<HashMap<IconName, Option<PathBuf>>>> = OnceLock::new();

/// Theme lookups walk the icon directories; remember every answer, misses included.
pub fn cached_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    let lock = RESOLVED.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(hit) = lock.read().get(icon_name) {
        return hit.clone();
    }

    let found = find_icon_path(icon_name);
    if found.is_none() {
        log::warn!("No icon found for '{}'", icon_name);
    }
    lock.write().insert(icon_name.clone(), found.clone());
    found
}

/// File to load a pixbuf from, `None` for glyphs and unresolvable icons.
pub fn image_path(icon: &ItemIcon) -> Option<PathBuf> {
    match icon {
        ItemIcon::Glyph(_) => None,
        ItemIcon::Named(name) => cached_icon_path(&IconName::new(name.as_str())),
        ItemIcon::Image(path) if path.exists() => Some(path.clone()),
        ItemIcon::Image(path) => {
            log::warn!("Icon image {} does not exist", path.display());
            None
        }
    }
}
