pub mod events;
pub mod watch;

use crate::host::ThemeHost;
use crate::options::{self, OptionsStore};
use crate::storage;
use crate::template::{self, Template};
use events::Event;
use std::path::PathBuf;
use tokio::sync::mpsc;

/// How one regeneration ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Written { path: PathBuf, reloaded: bool },
    Failed,
}

/// Regenerates the theme file from the options record and has the host reload it.
pub struct ThemeManager<S, H> {
    store: S,
    host: H,
    template: Template,
    filename: String,
}

impl<S: OptionsStore, H: ThemeHost> ThemeManager<S, H> {
    pub fn new(store: S, host: H, template: Template, filename: impl Into<String>) -> Self {
        Self {
            store,
            host,
            template,
            filename: filename.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn theme_path(&self) -> PathBuf {
        self.host.themes_dir().join(&self.filename)
    }

    /// Render, write and reload. Failures are logged and leave any previous
    /// theme file in place.
    pub async fn update_theme(&self) -> UpdateOutcome {
        let content = match self.render() {
            Ok(c) => c,
            Err(e) => {
                tracing::error!("Theme not updated: {e:#}");
                return UpdateOutcome::Failed;
            }
        };

        let path = self.theme_path();
        if let Err(e) = storage::write_atomic_blocking(path.clone(), content).await {
            tracing::error!("Theme not updated: {e:#}");
            return UpdateOutcome::Failed;
        }
        tracing::info!("Wrote {}", path.display());

        let reloaded = match self.host.reload_themes().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Theme written but reload failed: {e:#}");
                false
            }
        };
        UpdateOutcome::Written { path, reloaded }
    }

    fn render(&self) -> anyhow::Result<String> {
        let options = options::resolve(&self.store)?;
        tracing::info!(
            "Updating theme. Light: {}, Dark: {}",
            options.light_primary,
            options.dark_primary
        );
        template::materialize(&self.template, &options)
    }

    /// Handle events one at a time until every sender is gone.
    pub async fn run(&self, mut rx: mpsc::Receiver<Event>) {
        while let Some(ev) = rx.recv().await {
            tracing::debug!("Handling {ev:?}");
            self.update_theme().await;
        }
    }
}
