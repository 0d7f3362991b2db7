use crate::events::AppEvent;
use async_channel::Sender;
use chipwheel::item::ItemError;
use chipwheel::options::OptionsError;
use chipwheel::{ItemIcon, ItemId, NavItem, WheelOptions};
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One panel of the page and its chip on the wheel.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SectionConfig {
    pub id: ItemId,
    pub label: String,
    #[serde(default)]
    pub icon: Option<ItemIcon>,
    #[serde(default)]
    pub blurb: String,
}

impl SectionConfig {
    pub fn nav_item(&self) -> NavItem {
        NavItem {
            id: self.id.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub wheel: WheelOptions,
}

impl Config {
    pub fn nav_items(&self) -> Vec<NavItem> {
        NavItem::clean(self.sections.iter().map(SectionConfig::nav_item))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wheel.validate()?;
        NavItem::validate_unique(&self.nav_items())?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid wheel options: {0}")]
    Options(#[from] OptionsError),
    #[error("Invalid sections: {0}")]
    Sections(#[from] ItemError),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "felt", "felt").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// `--config` wins over the per-user location.
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    explicit
        .map(Path::to_path_buf)
        .map_or_else(get_config_path, Ok)
}

fn parse(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Config, ConfigError> {
    let config: Config = builder
        .add_source(
            config::Environment::with_prefix("FELT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    parse(config::Config::builder().add_source(config::File::from(path).required(false)))
}

/// The bundled configuration, still subject to `FELT_*` overrides.
pub fn default_config() -> Result<Config, ConfigError> {
    parse(config::Config::builder().add_source(config::File::from_str(
        DEFAULT_CONFIG,
        config::FileFormat::Toml,
    )))
}

/// Never fails: a missing file is created from the bundled default, a broken
/// one is reported and replaced by the default for this run.
pub fn load_or_default(path: &Path) -> Config {
    if !path.exists() {
        match write_default_config(path) {
            Ok(path) => log::info!("Wrote default configuration to {}", path.display()),
            Err(e) => log::warn!("Could not write default configuration: {}", e),
        }
    }

    match load_config(path) {
        Ok(c) if !c.sections.is_empty() => c,
        Ok(c) => {
            log::warn!("{} lists no sections, using the bundled ones", path.display());
            Config {
                sections: bundled_sections(),
                ..c
            }
        }
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            default_config().unwrap_or_else(|e| {
                log::error!("Environment overrides rejected: {}", e);
                Config {
                    sections: bundled_sections(),
                    ..Default::default()
                }
            })
        }
    }
}

fn bundled_sections() -> Vec<SectionConfig> {
    config::Config::builder()
        .add_source(config::File::from_str(
            DEFAULT_CONFIG,
            config::FileFormat::Toml,
        ))
        .build()
        .and_then(|c| c.try_deserialize::<Config>())
        .map(|c| c.sections)
        .unwrap_or_default()
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

type WatchEvents = async_channel::Receiver<notify::Result<Event>>;

/// Watches the directory rather than the file so that editors replacing the
/// file on save are still seen.
fn watch_config_dir(config_path: &Path) -> Result<(RecommendedWatcher, WatchEvents), ConfigError> {
    let dir = config_path.parent().ok_or(ConfigError::ConfigDirNotFound)?;
    fs_err::create_dir_all(dir)?;

    let (events_tx, events_rx) = async_channel::unbounded();
    let mut watcher = notify::recommended_watcher(move |res| {
        let _ = events_tx.send_blocking(res);
    })?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok((watcher, events_rx))
}

fn is_config_change(event: &Event, config_path: &Path) -> bool {
    let changed = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    changed && event.paths.iter().any(|p| p == config_path)
}

/// Sends one `ConfigReload` per burst of changes to `config_path`.
pub async fn run_async_watcher(tx: Sender<AppEvent>, config_path: PathBuf) {
    let (_watcher, events) = match watch_config_dir(&config_path) {
        Ok(watching) => watching,
        Err(e) => {
            log::error!("Config reload disabled: {}", e);
            return;
        }
    };
    log::debug!("Watching {}", config_path.display());

    while let Ok(res) = events.recv().await {
        let mut reload = false;
        // a single save often arrives as several events
        for res in std::iter::once(res).chain(std::iter::from_fn(|| events.try_recv().ok())) {
            match res {
                Ok(event) => reload |= is_config_change(&event, &config_path),
                Err(e) => log::warn!("Watch error: {}", e),
            }
        }
        if reload && tx.send(AppEvent::ConfigReload).await.is_err() {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipwheel::{Dock, SkinKind};

    #[test]
    fn bundled_config_is_valid() {
        let config: Config = config::Config::builder()
            .add_source(config::File::from_str(
                DEFAULT_CONFIG,
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert!(config.validate().is_ok());
        let ids: Vec<_> = config.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["hero", "about", "calendar", "rating", "gallery"]);
        assert_eq!(config.wheel.dock, Dock::BottomRight);
        assert_eq!(config.wheel.skin, SkinKind::Poker);
        assert_eq!(config.wheel.size, 230.0);
        assert_eq!(config.wheel.tuning.lock_timeout_ms, 1200);
        assert_eq!(
            config.sections[0].icon,
            Some(ItemIcon::Glyph("♠".to_string()))
        );
    }

    #[test]
    fn test_section_deserialization() {
        let section: SectionConfig = serde_json::from_str(
            r#"{"id":"gallery","label":"Gallery","icon":{"named":"image-x-generic"}}"#,
        )
        .unwrap();
        assert_eq!(section.id, ItemId::from("gallery"));
        assert!(section.blurb.is_empty());
        assert_eq!(
            section.nav_item().icon,
            Some(ItemIcon::Named("image-x-generic".to_string()))
        );
    }

    #[test]
    fn blank_and_duplicate_sections() {
        let section = |id: &str| SectionConfig {
            id: ItemId::from(id),
            label: id.to_uppercase(),
            icon: None,
            blurb: String::new(),
        };

        let config = Config {
            sections: vec![section("a"), section("  "), section("b")],
            ..Default::default()
        };
        assert_eq!(config.nav_items().len(), 2);
        assert!(config.validate().is_ok());

        let config = Config {
            sections: vec![section("a"), section("b"), section("a")],
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Sections(ItemError::DuplicateId(_)))
        ));
    }

    #[test]
    fn explicit_path_wins() {
        let explicit = Path::new("/tmp/felt-test/config.toml");
        assert_eq!(resolve_path(Some(explicit)).unwrap(), explicit);
    }

    #[test]
    fn first_run_writes_the_default_file() {
        let dir = std::env::temp_dir().join(format!("felt-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        assert!(!path.exists());

        let config = load_or_default(&path);
        assert!(path.exists());
        assert_eq!(config.sections.len(), 5);

        fs_err::write(&path, "[wheel]\ndock = \"tl\"\n").unwrap();
        let config = load_or_default(&path);
        assert_eq!(config.wheel.dock, Dock::TopLeft);
        assert_eq!(config.sections.len(), 5);

        fs_err::write(&path, "[wheel]\nsize = -3.0\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Options(_))));

        fs_err::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn only_changes_to_the_config_file_reload() {
        use notify::event::{AccessKind, CreateKind, DataChange, ModifyKind};

        let path = Path::new("/tmp/felt/config.toml");
        let write = Event::new(EventKind::Modify(ModifyKind::Data(DataChange::Content)))
            .add_path(path.to_path_buf());
        assert!(is_config_change(&write, path));

        let replaced = Event::new(EventKind::Create(CreateKind::File)).add_path(path.to_path_buf());
        assert!(is_config_change(&replaced, path));

        let read = Event::new(EventKind::Access(AccessKind::Read)).add_path(path.to_path_buf());
        assert!(!is_config_change(&read, path));

        let sibling = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/felt/config.toml.swp"));
        assert!(!is_config_change(&sibling, path));
    }
}
