use crate::events::AppEvent;
use async_channel::Sender;
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use radial::{IconName, ItemSource, ItemTemplate, Label, MenuItem};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use std::path::{Path, PathBuf};
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

/// How the demo hands its items to the menu.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum SourceMode {
    #[default]
    #[strum(to_string = "adapter")]
    Adapter,
    #[strum(to_string = "arrays", serialize = "array")]
    Arrays,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemConfig {
    pub label: Option<Label>,
    pub icon: Option<IconName>,
}

impl ItemConfig {
    fn new(label: &str, icon: &str) -> Self {
        Self {
            label: Some(Label::from(label)),
            icon: Some(IconName::from(icon)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub template: ItemTemplate,
    #[serde(default)]
    pub start_angle: f64,
    #[serde(default)]
    pub mode: SourceMode,
    #[serde(default = "default_items")]
    pub items: Vec<ItemConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: ItemTemplate::default(),
            start_angle: 0.0,
            mode: SourceMode::default(),
            items: default_items(),
        }
    }
}

fn default_items() -> Vec<ItemConfig> {
    vec![
        ItemConfig::new("Chair", "applications-office"),
        ItemConfig::new("Baloons", "applications-games"),
        ItemConfig::new("Baby", "face-smile"),
        ItemConfig::new("Swingset", "applications-science"),
        ItemConfig::new("Autumn", "weather-few-clouds"),
        ItemConfig::new("Gun", "applications-system"),
    ]
}

impl Config {
    /// Icon column for the parallel-array mode. `None` unless every item has
    /// an icon, so indices stay aligned with the labels.
    pub fn icons(&self) -> Option<Vec<IconName>> {
        self.items.iter().map(|item| item.icon.clone()).collect()
    }

    pub fn labels(&self) -> Option<Vec<Label>> {
        self.items.iter().map(|item| item.label.clone()).collect()
    }

    pub fn label_at(&self, index: usize) -> Option<&Label> {
        self.items.get(index).and_then(|item| item.label.as_ref())
    }
}

/// Adapter handing the configured items to the menu one by one.
#[derive(Debug, Clone)]
pub struct ItemsAdapter {
    items: Vec<ItemConfig>,
}

impl ItemsAdapter {
    pub fn new(items: Vec<ItemConfig>) -> Self {
        Self { items }
    }
}

impl ItemSource for ItemsAdapter {
    fn count(&self) -> usize {
        self.items.len()
    }

    fn item_at(&self, index: usize) -> Option<MenuItem> {
        self.items
            .get(index)
            .map(|item| MenuItem::new(item.icon.clone(), item.label.clone()))
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
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "silion", "circlemenu").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// Absolute form of a user-supplied config path, so the watcher has a real
/// directory to watch and event paths compare equal.
pub fn resolve_config_path(path: &Path) -> Result<PathBuf, ConfigError> {
    Ok(std::path::absolute(path)?)
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("CIRCLEMENU"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default(path: &Path) -> Config {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Using default menu, failed to load {}: {}", path.display(), e);
            Config::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> Result<PathBuf, ConfigError> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_path = match resolve_config_path(&config_path) {
        Ok(p) => p,
        Err(e) => {
            log::error!("Failed to resolve {}: {}", config_path.display(), e);
            return;
        }
    };
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
