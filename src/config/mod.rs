use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: HostConfig,
    pub theme: ThemeConfig,
    pub paths: PathsConfig,
    pub watch: WatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Home Assistant configuration directory; themes go to `<config_dir>/themes`.
    pub config_dir: PathBuf,
    /// Base URL of the Home Assistant instance.
    pub url: String,
    /// Long-lived access token (overridden by `HASS_TOKEN`).
    pub token: Option<String>,
    /// Call `frontend.reload_themes` after writing.
    pub reload: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// File name inside the themes directory
    pub filename: String,
    /// Custom template replacing the built-in one
    pub template: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Theme options record (colors, backgrounds, reset flag)
    pub options: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        defaults::defaults()
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            config_dir: defaults::hass_config_dir(),
            url: defaults::HASS_URL.to_string(),
            token: None,
            reload: true,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            filename: defaults::THEME_FILENAME.to_string(),
            template: None,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            options: defaults::data_dir().join("options.toml"),
        }
    }
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

impl Config {
    /// Token from the environment wins over the config file.
    pub fn token(&self) -> Option<String> {
        std::env::var("HASS_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| self.host.token.clone())
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    // The access token may live in here.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let _ = fs::set_permissions(&path, fs::Permissions::from_mode(0o600));
    }
    Ok(())
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "frosted-glass", "frosted-glass")
        .context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        save(&cfg, Some(path.as_path()))?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg").join("config.toml");
        let cfg = load(Some(path.as_path())).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.theme.filename, "frosted_glass.yaml");
        assert!(cfg.host.reload);

        let again = load(Some(path.as_path())).unwrap();
        assert_eq!(again.host.url, cfg.host.url);
        assert_eq!(again.paths.options, cfg.paths.options);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[host]
config_dir = "/config"
reload = false

[watch]
poll_interval_ms = 250
"#,
        )
        .unwrap();

        let cfg = load(Some(path.as_path())).unwrap();
        assert_eq!(cfg.host.config_dir, PathBuf::from("/config"));
        assert!(!cfg.host.reload);
        assert_eq!(cfg.host.url, defaults::HASS_URL);
        assert_eq!(cfg.watch.poll_interval_ms, 250);
        assert_eq!(cfg.theme.filename, defaults::THEME_FILENAME);
        assert!(cfg.theme.template.is_none());
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[host\n").unwrap();
        assert!(load(Some(path.as_path())).is_err());
    }
}
