//! Zip extraction for downloaded releases

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use zip::ZipArchive;

use crate::error::{InstallError, Result};

/// Unpack `archive` into `destination`, recreating its directory structure
///
/// Entries whose names would escape `destination` fail the whole extraction.
/// On error the destination tree must be treated as incomplete.
pub fn extract(archive: &Path, destination: &Path) -> Result<()> {
    let fail = |reason: String| InstallError::Extraction {
        archive: archive.to_path_buf(),
        reason,
    };

    std::fs::create_dir_all(destination)
        .map_err(|e| fail(format!("cannot create {}: {e}", destination.display())))?;

    let zip_file = File::open(archive).map_err(|e| fail(format!("cannot open archive: {e}")))?;
    let mut zip = ZipArchive::new(zip_file).map_err(|e| fail(e.to_string()))?;

    debug!(
        "extracting {} entries from {} to {}",
        zip.len(),
        archive.display(),
        destination.display()
    );

    for i in 0..zip.len() {
        let entry = zip.by_index(i).map_err(|e| fail(e.to_string()))?;
        if entry.enclosed_name().is_none() {
            return Err(fail(format!("entry {} escapes the destination", entry.name())));
        }
    }

    zip.extract(destination).map_err(|e| fail(e.to_string()))?;
    Ok(())
}

/// [`extract`] on the blocking pool
pub async fn extract_archive(archive: PathBuf, destination: PathBuf) -> Result<()> {
    let archive_for_error = archive.clone();
    tokio::task::spawn_blocking(move || extract(&archive, &destination))
        .await
        .map_err(|e| InstallError::Extraction {
            archive: archive_for_error,
            reason: format!("extraction task failed: {e}"),
        })?
}
