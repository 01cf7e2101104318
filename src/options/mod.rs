//! Theme options as delivered by the host's options form.
//!
//! The raw record is loosely typed; every field falls back to its built-in
//! default when missing or malformed.

pub mod store;

use crate::palette::Rgb;
use serde::Serialize;

pub use store::{FileOptionsStore, OptionsStore};

pub const DEFAULT_LIGHT_PRIMARY: Rgb = Rgb(106, 116, 211);
pub const DEFAULT_DARK_PRIMARY: Rgb = Rgb(138, 148, 232);
pub const DEFAULT_LIGHT_BG: &str = "/local/frosted_glass/light.jpg";
pub const DEFAULT_DARK_BG: &str = "/local/frosted_glass/dark.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOptions {
    pub light_primary: Rgb,
    pub light_bg: String,
    pub dark_primary: Rgb,
    pub dark_bg: String,
    pub reset_defaults: bool,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            light_primary: DEFAULT_LIGHT_PRIMARY,
            light_bg: DEFAULT_LIGHT_BG.to_string(),
            dark_primary: DEFAULT_DARK_PRIMARY,
            dark_bg: DEFAULT_DARK_BG.to_string(),
            reset_defaults: false,
        }
    }
}

impl ThemeOptions {
    /// Decode the raw options record. Unknown keys are ignored.
    pub fn from_raw(raw: &toml::Table) -> Self {
        let color = |key: &str, fallback: Rgb| {
            raw.get(key)
                .map(|v| Rgb::from_toml_or(v, fallback))
                .unwrap_or(fallback)
        };
        let text = |key: &str, fallback: &str| {
            raw.get(key)
                .and_then(|v| v.as_str())
                .unwrap_or(fallback)
                .to_string()
        };

        Self {
            light_primary: color("light_primary", DEFAULT_LIGHT_PRIMARY),
            light_bg: text("light_bg", DEFAULT_LIGHT_BG),
            dark_primary: color("dark_primary", DEFAULT_DARK_PRIMARY),
            dark_bg: text("dark_bg", DEFAULT_DARK_BG),
            reset_defaults: raw
                .get("reset_defaults")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        }
    }

    pub fn to_table(&self) -> anyhow::Result<toml::Table> {
        let raw = toml::to_string(self)?;
        Ok(toml::from_str(&raw)?)
    }
}

/// Read the current options, applying a pending reset.
///
/// A reset replaces every field with its default and writes the cleared record
/// back to the store before it is used.
pub fn resolve(store: &impl OptionsStore) -> anyhow::Result<ThemeOptions> {
    let raw = store.load()?;
    let options = ThemeOptions::from_raw(&raw);
    if !options.reset_defaults {
        return Ok(options);
    }

    let defaults = ThemeOptions::default();
    store.save(&defaults)?;
    tracing::info!("Theme options reset to defaults");
    Ok(defaults)
}
