//! CLI argument parsing for the uipro installer

use clap::{Parser, Subcommand};

use crate::orchestration::InstallRequest;
use crate::target::TargetType;

#[derive(Parser, Debug)]
#[command(name = "uipro")]
#[command(version, about = "Install the UI/UX Pro Max skill for your AI coding assistant")]
pub struct Args {
    /// Show debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub sub: Cmd,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Download a release and install its folders into the current directory
    Init {
        /// AI assistant to install for (prompted when omitted)
        #[arg(long, short = 'a', value_enum)]
        ai: Option<TargetType>,

        /// Exact release tag to install, e.g. v1.2.0 (latest when omitted)
        #[arg(long = "version", value_name = "TAG")]
        tag: Option<String>,

        /// Accepted for compatibility; existing folders are always replaced
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// List available release tags, newest first
    Versions,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Cmd {
    /// Install request for `init`, `None` for other subcommands
    pub fn install_request(&self) -> Option<InstallRequest> {
        match self {
            Cmd::Init { ai, tag, force } => Some(InstallRequest {
                ai: *ai,
                version: tag.clone(),
                force: *force,
            }),
            Cmd::Versions => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_with_all_flags() {
        let args = Args::try_parse_from([
            "uipro", "init", "--ai", "claude", "--version", "v1.2.0", "--force",
        ])
        .unwrap();

        let request = args.sub.install_request().unwrap();
        assert_eq!(request.ai, Some(TargetType::Claude));
        assert_eq!(request.version.as_deref(), Some("v1.2.0"));
        assert!(request.force);
        assert!(!args.verbose);
    }

    #[test]
    fn init_without_flags_prompts() {
        let args = Args::try_parse_from(["uipro", "init"]).unwrap();
        let request = args.sub.install_request().unwrap();
        assert_eq!(request.ai, None);
        assert_eq!(request.version, None);
        assert!(!request.force);
    }

    #[test]
    fn unknown_target_is_rejected() {
        assert!(Args::try_parse_from(["uipro", "init", "--ai", "vim"]).is_err());
    }

    #[test]
    fn versions_subcommand_with_global_verbose() {
        let args = Args::try_parse_from(["uipro", "versions", "-v"]).unwrap();
        assert!(matches!(args.sub, Cmd::Versions));
        assert!(args.verbose);
        assert!(args.sub.install_request().is_none());
    }
}
