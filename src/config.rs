//! Provider identity and client constants.
//!
//! These are fixed for the shipped binary; the struct exists so the library can
//! be pointed at another API base (tests use a local mock server).

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const REPO_OWNER: &str = "nextlevelbuilder";
pub const REPO_NAME: &str = "ui-ux-pro-max-skill";
pub const USER_AGENT: &str = "uipro-cli";
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
/// Suffix identifying an installable release asset
pub const ARCHIVE_EXTENSION: &str = ".zip";

/// Release source and HTTP client settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallerConfig {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub user_agent: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            owner: REPO_OWNER.to_string(),
            repo: REPO_NAME.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl InstallerConfig {
    /// Same provider identity against a different API base
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            ..Self::default()
        }
    }

    /// `{api_base}/repos/{owner}/{repo}/releases`
    pub fn releases_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            self.api_base.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }

    pub fn latest_release_url(&self) -> String {
        format!("{}/latest", self.releases_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_github() {
        let config = InstallerConfig::default();
        assert_eq!(
            config.releases_url(),
            "https://api.github.com/repos/nextlevelbuilder/ui-ux-pro-max-skill/releases"
        );
        assert_eq!(
            config.latest_release_url(),
            "https://api.github.com/repos/nextlevelbuilder/ui-ux-pro-max-skill/releases/latest"
        );
    }

    #[test]
    fn trailing_slash_on_base_is_ignored() {
        let config = InstallerConfig::with_api_base("http://127.0.0.1:1234/");
        assert_eq!(
            config.releases_url(),
            "http://127.0.0.1:1234/repos/nextlevelbuilder/ui-ux-pro-max-skill/releases"
        );
    }
}
