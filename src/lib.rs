//! uipro installation library
//!
//! Fetches a UI/UX Pro Max release from GitHub, extracts it, and installs the
//! folders for the chosen AI assistant into the working directory.

pub mod cli;
pub mod config;
pub mod detection;
pub mod download;
pub mod error;
pub mod folders;
pub mod orchestration;
pub mod runners;
pub mod target;
pub mod wizard;
pub mod workdirs;

pub use config::InstallerConfig;
pub use error::InstallError;
pub use orchestration::{
    InstallContext, InstallOutcome, InstallRequest, InstallSummary, run_install,
};
pub use target::TargetType;
pub use wizard::TargetPrompter;
