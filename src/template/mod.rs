//! Theme file rendering.
//!
//! The template is a finished theme file written for the default options. It
//! is split into its light and dark halves at a marker line, and in each half
//! the literal default values (RGB string, background, palette hexes) are
//! swapped for the ones generated from the current options.

pub mod builtin;

use crate::options::{self, ThemeOptions};
use crate::palette::{Level, Rgb, generate_palette};
use anyhow::Context;
use std::borrow::Cow;
use std::path::Path;

/// Values a template half was written with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeDefaults {
    pub primary: Rgb,
    pub background: String,
}

#[derive(Debug, Clone)]
pub struct Template {
    text: Cow<'static, str>,
    marker: Cow<'static, str>,
    pub light: ModeDefaults,
    pub dark: ModeDefaults,
}

impl Template {
    pub fn builtin() -> Self {
        Self::with_text(builtin::THEME)
    }

    /// A template text that follows the stock marker and defaults
    pub fn with_text(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            marker: Cow::Borrowed(builtin::MARKER),
            light: ModeDefaults {
                primary: options::DEFAULT_LIGHT_PRIMARY,
                background: options::DEFAULT_LIGHT_BG.to_string(),
            },
            dark: ModeDefaults {
                primary: options::DEFAULT_DARK_PRIMARY,
                background: options::DEFAULT_DARK_BG.to_string(),
            },
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read template {}", path.display()))?;
        Ok(Self::with_text(raw))
    }

    /// Light half and dark half; the dark half starts with the marker.
    pub fn split(&self) -> anyhow::Result<(&str, &str)> {
        let marker: &str = &self.marker;
        match self.text.matches(marker).count() {
            1 => {}
            0 => anyhow::bail!("template has no {marker:?} marker"),
            n => anyhow::bail!("template marker {marker:?} appears {n} times"),
        }
        let at = self
            .text
            .find(marker)
            .context("template marker vanished")?;
        Ok(self.text.split_at(at))
    }
}

/// Literal replacements that turn a half written for `defaults` into one for
/// `primary` and `background`.
fn substitutions(defaults: &ModeDefaults, primary: Rgb, background: &str) -> Vec<(String, String)> {
    let old = generate_palette(defaults.primary);
    let new = generate_palette(primary);

    let mut pairs = vec![
        (defaults.primary.to_rgb_string(), primary.to_rgb_string()),
        (defaults.background.clone(), background.to_string()),
    ];
    pairs.extend(Level::ALL.map(|level| (old.hex(level), new.hex(level))));
    pairs
}

/// Replace every occurrence of each `from` with its `to` in a single scan.
///
/// Output of one replacement is never matched again, and where several
/// literals start at the same position the longest one wins.
pub fn replace_literals(text: &str, pairs: &[(String, String)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let hit = pairs
            .iter()
            .filter(|(from, _)| !from.is_empty() && rest.starts_with(from.as_str()))
            .max_by_key(|(from, _)| from.len());
        match hit {
            Some((from, to)) => {
                out.push_str(to);
                rest = &rest[from.len()..];
            }
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out
}

/// Render the theme file for `options`.
pub fn materialize(template: &Template, options: &ThemeOptions) -> anyhow::Result<String> {
    let (light, dark) = template.split()?;

    let light_pairs = substitutions(&template.light, options.light_primary, &options.light_bg);
    let dark_pairs = substitutions(&template.dark, options.dark_primary, &options.dark_bg);

    let mut out = replace_literals(light, &light_pairs);
    out.push_str(&replace_literals(dark, &dark_pairs));
    Ok(out)
}
