//! The dashboard host: where theme files live and how it is told to reload them.

pub mod hass;

use std::future::Future;
use std::path::Path;

pub use hass::HassClient;

pub trait ThemeHost {
    /// Directory the host loads theme files from
    fn themes_dir(&self) -> &Path;

    /// Ask the host to re-read its theme files.
    fn reload_themes(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}
