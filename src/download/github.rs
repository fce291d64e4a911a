//! GitHub release API interaction

use std::time::Duration;

use log::debug;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::{ARCHIVE_EXTENSION, GITHUB_ACCEPT, InstallerConfig};
use crate::error::{InstallError, Result};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// GitHub release metadata from API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<Asset>,
}

/// GitHub release asset metadata
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub name: String,
    pub browser_download_url: String,
}

/// Client for the fixed release repository
///
/// The underlying HTTP client carries the `uipro-cli` user agent and is shared
/// with the archive download.
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    http: reqwest::Client,
    config: InstallerConfig,
}

impl ReleaseClient {
    pub fn new(config: InstallerConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| InstallError::network("build HTTP client", e))?;

        Ok(Self { http, config })
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// All releases of the repository, newest first as GitHub returns them
    pub async fn list_releases(&self) -> Result<Vec<Release>> {
        self.get_json(&self.config.releases_url(), "fetch releases")
            .await
    }

    pub async fn get_latest_release(&self) -> Result<Release> {
        self.get_json(&self.config.latest_release_url(), "fetch latest release")
            .await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, action: &'static str) -> Result<T> {
        debug!("GET {url}");

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| InstallError::network(action, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(InstallError::network(action, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| InstallError::network(action, e))?;

        serde_json::from_slice(&body).map_err(|e| InstallError::network(action, e))
    }
}

/// URL of the first asset, in list order, whose name ends with `.zip`
pub fn resolve_asset_url(release: &Release) -> Option<&str> {
    release
        .assets
        .iter()
        .find(|a| a.name.ends_with(ARCHIVE_EXTENSION))
        .map(|a| a.browser_download_url.as_str())
}

/// Exact tag match, no normalization
pub fn find_release_by_tag<'a>(releases: &'a [Release], tag: &str) -> Option<&'a Release> {
    releases.iter().find(|r| r.tag_name == tag)
}
