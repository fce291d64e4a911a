//! Error types for the installer pipeline

use std::path::PathBuf;

use thiserror::Error;

/// Every way an install run can fail.
///
/// All variants are terminal for the run; nothing is retried.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Non-2xx response, transport failure or undecodable body
    #[error("Failed to {action}: {reason}")]
    Network { action: &'static str, reason: String },

    /// The chosen release has no archive-typed asset
    #[error("No downloadable asset found in release {tag}")]
    AssetNotFound { tag: String },

    /// The requested tag is not in the release list
    #[error("Version {tag} not found")]
    VersionNotFound { tag: String },

    /// Malformed archive or unwritable destination
    #[error("Failed to extract {}: {reason}", archive.display())]
    Extraction { archive: PathBuf, reason: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The selection prompt failed for a reason other than cancellation
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl InstallError {
    pub(crate) fn network(action: &'static str, reason: impl ToString) -> Self {
        Self::Network {
            action,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T, E = InstallError> = std::result::Result<T, E>;
