use super::{Config, HostConfig, PathsConfig, ThemeConfig, WatchConfig};
use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

pub const HASS_URL: &str = "http://homeassistant.local:8123";
pub const THEME_FILENAME: &str = "frosted_glass.yaml";

pub fn defaults() -> Config {
    Config {
        host: HostConfig::default(),
        theme: ThemeConfig::default(),
        paths: PathsConfig::default(),
        watch: WatchConfig::default(),
    }
}

/// `~/.homeassistant` for core installs, `/config` inside the HA container.
pub fn hass_config_dir() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().join(".homeassistant"))
        .unwrap_or_else(|| PathBuf::from("/config"))
}

pub fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "frosted-glass", "frosted-glass")
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("frosted-glass"))
}
