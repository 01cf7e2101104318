//! Home Assistant REST client
//!
//! Only the `frontend.reload_themes` service is needed.
//! API Documentation: https://developers.home-assistant.io/docs/api/rest/

use super::ThemeHost;
use anyhow::Context;
use serde_json::json;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct HassClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    themes_dir: PathBuf,
    reload: bool,
}

impl HassClient {
    const USER_AGENT: &'static str = concat!("frosted-glass/", env!("CARGO_PKG_VERSION"));

    pub fn new(
        config_dir: &Path,
        base_url: &str,
        token: Option<String>,
        reload: bool,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("build reqwest client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
            themes_dir: config_dir.join("themes"),
            reload,
        })
    }

    fn service_url(&self, domain: &str, service: &str) -> String {
        format!("{}/api/services/{domain}/{service}", self.base_url)
    }
}

impl ThemeHost for HassClient {
    fn themes_dir(&self) -> &Path {
        &self.themes_dir
    }

    async fn reload_themes(&self) -> anyhow::Result<()> {
        if !self.reload {
            tracing::debug!("Theme reload disabled");
            return Ok(());
        }
        let token = self
            .token
            .as_deref()
            .context("no Home Assistant access token configured")?;

        let url = self.service_url("frontend", "reload_themes");
        self.client
            .post(&url)
            .bearer_auth(token)
            .json(&json!({}))
            .send()
            .await
            .with_context(|| format!("send {url}"))?
            .error_for_status()
            .context("reload_themes http status")?;

        tracing::info!("Requested theme reload");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let c = HassClient::new(
            Path::new("/config"),
            "http://homeassistant.local:8123/",
            Some("t".into()),
            true,
        )
        .unwrap();
        assert_eq!(c.themes_dir(), Path::new("/config/themes"));
        assert_eq!(
            c.service_url("frontend", "reload_themes"),
            "http://homeassistant.local:8123/api/services/frontend/reload_themes"
        );
    }

    #[tokio::test]
    async fn test_disabled_reload_is_a_no_op() {
        let c = HassClient::new(Path::new("/config"), "http://127.0.0.1:9", None, false).unwrap();
        assert!(c.reload_themes().await.is_ok());
    }

    #[tokio::test]
    async fn test_missing_token() {
        let c = HassClient::new(Path::new("/config"), "http://127.0.0.1:9", Some(String::new()), true)
            .unwrap();
        let err = c.reload_themes().await.unwrap_err();
        assert!(err.to_string().contains("token"));
    }
}
