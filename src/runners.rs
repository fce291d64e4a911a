//! Top-level runners for each subcommand

use log::debug;

use crate::cli::Cmd;
use crate::config::InstallerConfig;
use crate::download::ReleaseClient;
use crate::error::Result;
use crate::orchestration::{self, InstallContext, InstallOutcome, InstallRequest};
use crate::wizard::{self, InteractivePrompter};

/// Dispatch a parsed subcommand
pub async fn run(cmd: &Cmd) -> Result<()> {
    match cmd.install_request() {
        Some(request) => run_init(&request).await,
        None => run_versions(InstallerConfig::default()).await,
    }
}

/// `uipro init`: install into the current working directory
pub async fn run_init(request: &InstallRequest) -> Result<()> {
    wizard::show_welcome();

    let ctx = InstallContext::from_env()?;
    debug!(
        "installing into {} (temp base {})",
        ctx.cwd.display(),
        ctx.temp_base.display()
    );

    match orchestration::run_install(request, &ctx, &InteractivePrompter).await? {
        InstallOutcome::Installed(summary) => wizard::show_completion(&summary),
        InstallOutcome::Cancelled => wizard::show_cancelled(),
    }

    Ok(())
}

/// `uipro versions`: list release tags
pub async fn run_versions(config: InstallerConfig) -> Result<()> {
    let client = ReleaseClient::new(config)?;
    let tags = release_tags(&client).await?;
    wizard::show_versions(&tags);
    Ok(())
}

async fn release_tags(client: &ReleaseClient) -> Result<Vec<String>> {
    let releases = client.list_releases().await?;
    Ok(releases.into_iter().map(|r| r.tag_name).collect())
}
