use super::ThemeOptions;
use crate::storage;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Where the host keeps the options record of the theme entry
pub trait OptionsStore {
    /// Current raw record; an absent record is an empty table.
    fn load(&self) -> anyhow::Result<toml::Table>;
    /// Replace the whole record.
    fn save(&self, options: &ThemeOptions) -> anyhow::Result<()>;
}

/// Options kept as a TOML file
#[derive(Debug, Clone)]
pub struct FileOptionsStore {
    path: PathBuf,
}

impl FileOptionsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Modification time of the record, `None` while it does not exist
    pub fn fingerprint(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).and_then(|m| m.modified()).ok()
    }
}

impl OptionsStore for FileOptionsStore {
    fn load(&self) -> anyhow::Result<toml::Table> {
        if !self.path.exists() {
            return Ok(toml::Table::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("read {}", self.path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parse {}", self.path.display()))
    }

    fn save(&self, options: &ThemeOptions) -> anyhow::Result<()> {
        let raw = toml::to_string_pretty(options).context("serialize options")?;
        storage::write_atomic(&self.path, &raw)
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryOptionsStore;

#[cfg(test)]
mod memory {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// In-memory store that counts write-backs
    #[derive(Debug, Default)]
    pub(crate) struct MemoryOptionsStore {
        raw: Mutex<toml::Table>,
        saves: AtomicUsize,
    }

    impl MemoryOptionsStore {
        pub(crate) fn with_raw(raw: &str) -> Self {
            Self {
                raw: Mutex::new(raw.parse().unwrap()),
                saves: AtomicUsize::new(0),
            }
        }

        pub(crate) fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl OptionsStore for MemoryOptionsStore {
        fn load(&self) -> anyhow::Result<toml::Table> {
            Ok(self.raw.lock().unwrap().clone())
        }

        fn save(&self, options: &ThemeOptions) -> anyhow::Result<()> {
            *self.raw.lock().unwrap() = options.to_table()?;
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Rgb;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileOptionsStore::new(dir.path().join("options.toml"));
        assert!(store.load().unwrap().is_empty());
        assert!(store.fingerprint().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileOptionsStore::new(dir.path().join("nested").join("options.toml"));
        let options = ThemeOptions {
            light_primary: Rgb(9, 8, 7),
            ..ThemeOptions::default()
        };
        store.save(&options).unwrap();

        let raw = store.load().unwrap();
        assert_eq!(ThemeOptions::from_raw(&raw), options);
        assert!(store.fingerprint().is_some());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.toml");
        fs::write(&path, "light_primary = [").unwrap();
        let err = FileOptionsStore::new(&path).load().unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }
}
