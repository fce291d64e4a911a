//! Release archive download

use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{InstallError, Result};

/// Download `url` to `destination`
///
/// The whole body is buffered, written to a sibling `.part` file in one write
/// and renamed into place, so `destination` never holds a truncated payload.
/// Non-2xx responses fail with the provider's status text. No retry.
pub async fn download(client: &reqwest::Client, url: &str, destination: &Path) -> Result<()> {
    debug!("downloading {url} to {}", destination.display());

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| InstallError::network("download", e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(InstallError::network("download", status));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| InstallError::network("download", e))?;

    let partial = partial_path(destination);
    tokio::fs::write(&partial, &bytes)
        .await
        .map_err(|e| InstallError::io(format!("Failed to write {}", partial.display()), e))?;

    if let Err(e) = tokio::fs::rename(&partial, destination).await {
        let _ = tokio::fs::remove_file(&partial).await;
        return Err(InstallError::io(
            format!("Failed to move download to {}", destination.display()),
            e,
        ));
    }

    debug!("downloaded {} bytes", bytes.len());
    Ok(())
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}
