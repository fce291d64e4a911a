//! Install workflow
//!
//! `ResolveTarget → ResolveRelease → Download → Extract → Install → Cleanup → Done`,
//! with any error ending the run in `Failed`. Steps run strictly one after the
//! other. The work directory is created at `Download` and is removed on every
//! exit path after that point: explicitly on success, by its drop guard on error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};

use crate::config::InstallerConfig;
use crate::detection;
use crate::download::{self, Release, ReleaseClient};
use crate::error::{InstallError, Result};
use crate::folders;
use crate::target::TargetType;
use crate::wizard::{self, TargetPrompter};
use crate::workdirs::WorkDirs;

/// What the user asked for on the command line
#[derive(Debug, Clone, Default)]
pub struct InstallRequest {
    pub ai: Option<TargetType>,
    pub version: Option<String>,
    /// Forwarded only; existing folders are always replaced.
    pub force: bool,
}

/// Where a run reads from and writes to
#[derive(Debug, Clone)]
pub struct InstallContext {
    pub config: InstallerConfig,
    /// Destination root
    pub cwd: PathBuf,
    /// Parent of the per-run temp root
    pub temp_base: PathBuf,
}

impl InstallContext {
    /// Current working directory and OS temp directory
    pub fn from_env() -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| InstallError::io("Failed to read current directory", e))?;
        Ok(Self {
            config: InstallerConfig::default(),
            cwd,
            temp_base: std::env::temp_dir(),
        })
    }
}

/// Workflow states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    ResolveTarget,
    ResolveRelease,
    Download,
    Extract,
    Install,
    Cleanup,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Stage::ResolveTarget => "Resolving target...",
            Stage::ResolveRelease => "Fetching release info...",
            Stage::Download => "Downloading...",
            Stage::Extract => "Extracting...",
            Stage::Install => "Installing files...",
            Stage::Cleanup => "Cleaning up...",
            Stage::Done => "Installation complete!",
            Stage::Failed => "Installation failed",
        };
        f.write_str(message)
    }
}

/// Result of a completed install
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSummary {
    pub version: String,
    pub target: TargetType,
    /// Destination folder names in the order they were written
    pub folders: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed(InstallSummary),
    /// The user dismissed the target prompt; not an error
    Cancelled,
}

/// Run the whole install workflow
pub async fn run_install(
    request: &InstallRequest,
    ctx: &InstallContext,
    prompter: &dyn TargetPrompter,
) -> Result<InstallOutcome> {
    debug!("stage: {:?}", Stage::ResolveTarget);
    let Some(target) = resolve_target(request.ai, &ctx.cwd, prompter)? else {
        info!("target selection cancelled");
        return Ok(InstallOutcome::Cancelled);
    };
    wizard::show_target(target);

    if request.force {
        debug!("--force given; existing folders are replaced regardless");
    }

    let spinner = stage_spinner();
    let result = install_target(request, ctx, target, &spinner).await;

    match &result {
        Ok(_) => spinner.finish_with_message(Stage::Done.to_string()),
        Err(e) => {
            debug!("stage: {:?} ({e})", Stage::Failed);
            spinner.abandon_with_message(Stage::Failed.to_string());
        }
    }

    result.map(InstallOutcome::Installed)
}

/// Explicit target, or detection plus prompt. `None` when the user cancels.
pub fn resolve_target(
    explicit: Option<TargetType>,
    cwd: &Path,
    prompter: &dyn TargetPrompter,
) -> Result<Option<TargetType>> {
    if let Some(target) = explicit {
        return Ok(Some(target));
    }

    let detected = detection::detect_targets(cwd);
    debug!("detected targets: {detected:?}");
    let default = detection::suggested_target(&detected);
    prompter.select_target(&detected, default)
}

/// Exact tag from the full list when a version is requested, else latest
pub async fn resolve_release(client: &ReleaseClient, version: Option<&str>) -> Result<Release> {
    match version {
        Some(tag) => {
            let releases = client.list_releases().await?;
            download::find_release_by_tag(&releases, tag)
                .cloned()
                .ok_or_else(|| InstallError::VersionNotFound {
                    tag: tag.to_string(),
                })
        }
        None => client.get_latest_release().await,
    }
}

async fn install_target(
    request: &InstallRequest,
    ctx: &InstallContext,
    target: TargetType,
    spinner: &ProgressBar,
) -> Result<InstallSummary> {
    advance(spinner, Stage::ResolveRelease);
    let client = ReleaseClient::new(ctx.config.clone())?;
    let release = resolve_release(&client, request.version.as_deref()).await?;
    spinner.set_message(format!("Found version: {}", release.tag_name));

    let asset_url = download::resolve_asset_url(&release)
        .ok_or_else(|| InstallError::AssetNotFound {
            tag: release.tag_name.clone(),
        })?
        .to_string();

    advance(spinner, Stage::Download);
    let work = WorkDirs::create_in(&ctx.temp_base)?;
    download::download(client.http(), &asset_url, work.archive_path()).await?;

    advance(spinner, Stage::Extract);
    download::extract_archive(
        work.archive_path().to_path_buf(),
        work.extracted_dir().to_path_buf(),
    )
    .await?;

    advance(spinner, Stage::Install);
    let extracted = work.extracted_dir().to_path_buf();
    let cwd = ctx.cwd.clone();
    let installed =
        tokio::task::spawn_blocking(move || folders::install_folders(&extracted, &cwd, target))
            .await
            .map_err(|e| InstallError::io("Folder install task failed", std::io::Error::other(e)))??;

    advance(spinner, Stage::Cleanup);
    if let Err(e) = work.cleanup() {
        warn!("{e}");
    }

    info!(
        "installed {} for {}: {}",
        release.tag_name,
        target.id(),
        installed.join(", ")
    );

    Ok(InstallSummary {
        version: release.tag_name,
        target,
        folders: installed,
    })
}

fn advance(spinner: &ProgressBar, stage: Stage) {
    debug!("stage: {stage:?}");
    spinner.set_message(stage.to_string());
}

fn stage_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
