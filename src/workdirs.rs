//! Per-run temporary working directories
//!
//! Each run mints a fresh `uipro-<unix-millis>-XXXXXX` directory. The guard
//! owns it exclusively: dropping it on any error path removes the tree, and
//! [`WorkDirs::cleanup`] removes it explicitly on success.

use std::path::{Path, PathBuf};

use log::debug;
use tempfile::TempDir;

use crate::error::{InstallError, Result};

pub const ARCHIVE_FILE_NAME: &str = "release.zip";
pub const EXTRACTED_DIR_NAME: &str = "extracted";

#[derive(Debug)]
pub struct WorkDirs {
    root: TempDir,
    archive: PathBuf,
    extracted: PathBuf,
}

impl WorkDirs {
    /// Create a new temp root under `base`
    pub fn create_in(base: &Path) -> Result<Self> {
        let prefix = format!("uipro-{}-", chrono::Utc::now().timestamp_millis());
        let root = tempfile::Builder::new()
            .prefix(&prefix)
            .tempdir_in(base)
            .map_err(|e| {
                InstallError::io(
                    format!("Failed to create temp directory in {}", base.display()),
                    e,
                )
            })?;

        let archive = root.path().join(ARCHIVE_FILE_NAME);
        let extracted = root.path().join(EXTRACTED_DIR_NAME);
        std::fs::create_dir_all(&extracted).map_err(|e| {
            InstallError::io(format!("Failed to create {}", extracted.display()), e)
        })?;

        debug!("created work directory {}", root.path().display());
        Ok(Self {
            root,
            archive,
            extracted,
        })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn archive_path(&self) -> &Path {
        &self.archive
    }

    pub fn extracted_dir(&self) -> &Path {
        &self.extracted
    }

    /// Remove the temp root, reporting failures instead of swallowing them
    pub fn cleanup(self) -> Result<()> {
        let path = self.root.path().to_path_buf();
        self.root.close().map_err(|e| {
            InstallError::io(format!("Failed to remove {}", path.display()), e)
        })?;
        debug!("removed work directory {}", path.display());
        Ok(())
    }
}
