use crate::events::AppEvent;
use async_channel::{Receiver, Sender};
use directories::ProjectDirs;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use target_rings::config::TargetConfig;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let proj_dirs = ProjectDirs::from("org", "targetview", "target-view")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config(path: &Path) -> Result<TargetConfig, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix("TARGET_VIEW").separator("__"))
        .build()?;

    Ok(s.try_deserialize()?)
}

/// Falls back to the built-in target when the file is missing or unreadable.
pub fn load_or_default(path: &Path) -> TargetConfig {
    match load_config(path) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Failed to load {}: {}", path.display(), e);
            TargetConfig::default()
        }
    }
}

pub fn write_default_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(())
}

pub const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Modifications, creations and removals of the config file itself; other files in the
/// directory and plain reads are ignored.
fn is_config_change(event: &Event, config_path: &Path) -> bool {
    let relevant_kind = matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    );
    relevant_kind
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == config_path.file_name())
}

fn watch_dir(
    dir: &Path,
) -> Result<(RecommendedWatcher, Receiver<notify::Result<Event>>), ConfigError> {
    let (bridge_tx, bridge_rx) = async_channel::unbounded();
    let mut watcher = RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    )?;
    watcher.watch(dir, RecursiveMode::NonRecursive)?;
    Ok((watcher, bridge_rx))
}

/// Sends `ConfigReload` whenever the config file changes, until the receiver goes away.
pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let Some(config_dir) = config_path.parent() else {
        return;
    };
    if let Err(e) = fs_err::create_dir_all(config_dir) {
        log::error!("Cannot watch {}: {}", config_dir.display(), e);
        return;
    }

    // dropping the watcher stops the event stream
    let (_watcher, events) = match watch_dir(config_dir) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Config reload disabled: {}", e);
            return;
        }
    };
    log::debug!("Watching {} for changes", config_path.display());

    while let Ok(res) = events.recv().await {
        match res {
            Ok(event) if is_config_change(&event, &config_path) => {
                if tx.send(AppEvent::ConfigReload).await.is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("Config watch error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use target_rings::ring::RingKind;
    use target_rings::{Color, SegmentStore};

    fn parse(toml: &str) -> TargetConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_default_config_matches_builtin_target() {
        let config = parse(DEFAULT_CONFIG);
        assert_eq!(config.build_store().unwrap(), SegmentStore::new());
        assert_eq!(config.stroke, TargetConfig::default().stroke);
        assert_eq!(config.label, TargetConfig::default().label);
    }

    #[test]
    fn test_explicit_segments_from_toml() {
        let config = parse(
            r##"
[stroke]
color = "#333333"
width = 2.0

[[rings]]
ring = "Center"
segments = [
    { id = 7, value = 3.0, color = "magenta" },
    { id = 8 },
]
"##,
        );
        let store = config.build_store().unwrap();
        let center = &store.ring(RingKind::Center).segments;
        assert_eq!(center.len(), 2);
        assert_eq!(*center[0].reference_id, 7);
        assert_eq!(center[0].value, 3.0);
        assert_eq!(center[0].color, "magenta".parse::<Color>().unwrap());
        assert_eq!(center[1].color, Color::cyan());
        assert_eq!(config.stroke.width, 2.0);
    }

    #[test]
    fn test_only_config_file_changes_trigger_reload() {
        use notify::event::{AccessKind, CreateKind, ModifyKind};

        let config_path = PathBuf::from("/tmp/target-view/config.toml");
        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(config_path.clone());
        assert!(is_config_change(&modify, &config_path));

        let create = Event::new(EventKind::Create(CreateKind::File))
            .add_path(PathBuf::from("/tmp/target-view/config.toml"));
        assert!(is_config_change(&create, &config_path));

        let other = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(PathBuf::from("/tmp/target-view/notes.txt"));
        assert!(!is_config_change(&other, &config_path));

        let read = Event::new(EventKind::Access(AccessKind::Any)).add_path(config_path.clone());
        assert!(!is_config_change(&read, &config_path));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("target-view-missing").join("config.toml");
        let config = load_or_default(&path);
        assert_eq!(config.build_store().unwrap(), SegmentStore::new());
    }
}
