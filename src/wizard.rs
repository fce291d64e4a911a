//! Interactive pieces of the installer: target selection and terminal output

use std::io::Write;

use inquire::{InquireError, Select};
use log::warn;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::{InstallError, Result};
use crate::orchestration::InstallSummary;
use crate::target::TargetType;

/// The single user-input step of an install run
pub trait TargetPrompter {
    /// Ask which target to install for. `Ok(None)` means the user cancelled.
    fn select_target(
        &self,
        detected: &[TargetType],
        default: TargetType,
    ) -> Result<Option<TargetType>>;
}

/// Terminal prompt backed by `inquire`
#[derive(Debug, Default, Clone, Copy)]
pub struct InteractivePrompter;

impl TargetPrompter for InteractivePrompter {
    fn select_target(
        &self,
        detected: &[TargetType],
        default: TargetType,
    ) -> Result<Option<TargetType>> {
        if !detected.is_empty() {
            show_detected(detected);
        }

        let starting_cursor = TargetType::ALL
            .iter()
            .position(|t| *t == default)
            .unwrap_or(0);

        let answer = Select::new("Select AI assistant to install for:", TargetType::ALL.to_vec())
            .with_starting_cursor(starting_cursor)
            .with_help_message("↑↓ to move, enter to select, esc to cancel")
            .prompt();

        selection_from(answer)
    }
}

/// Map a prompt answer to a selection. No terminal counts as no answer.
fn selection_from(
    answer: std::result::Result<TargetType, InquireError>,
) -> Result<Option<TargetType>> {
    match answer {
        Ok(target) => Ok(Some(target)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(InquireError::NotTTY) => {
            warn!("no terminal available for the prompt; pass --ai to choose a target");
            Ok(None)
        }
        Err(e) => Err(InstallError::Prompt(e.to_string())),
    }
}

fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}

/// Display welcome banner
pub fn show_welcome() {
    let mut stdout = stdout();

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    let _ = writeln!(stdout, "\nUI/UX Pro Max Installer\n");
    let _ = stdout.reset();
}

fn show_detected(detected: &[TargetType]) {
    let mut stdout = stdout();

    let _ = write!(stdout, "Detected: ");
    for (i, target) in detected.iter().enumerate() {
        if i > 0 {
            let _ = write!(stdout, ", ");
        }
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
        let _ = write!(stdout, "{}", target.id());
        let _ = stdout.reset();
    }
    let _ = writeln!(stdout);
}

pub fn show_target(target: TargetType) {
    let mut stdout = stdout();

    let _ = write!(stdout, "Installing for: ");
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)));
    let _ = writeln!(stdout, "{}", target.description());
    let _ = stdout.reset();
}

pub fn show_cancelled() {
    let mut stdout = stdout();

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
    let _ = writeln!(stdout, "Installation cancelled");
    let _ = stdout.reset();
}

/// Display installation completion summary
pub fn show_completion(summary: &InstallSummary) {
    let mut stdout = stdout();

    let _ = writeln!(stdout, "\nInstalled folders:");
    for folder in &summary.folders {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
        let _ = write!(stdout, "  + ");
        let _ = stdout.reset();
        let _ = writeln!(stdout, "{folder}");
    }
    if summary.folders.is_empty() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(stdout, "  (release contained no folders for this assistant)");
        let _ = stdout.reset();
    }

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    let _ = writeln!(
        stdout,
        "\n✓ UI/UX Pro Max {} installed successfully!",
        summary.version
    );
    let _ = stdout.reset();

    let _ = stdout.set_color(ColorSpec::new().set_bold(true));
    let _ = writeln!(stdout, "\nNext steps:");
    let _ = stdout.reset();
    let _ = stdout.set_color(ColorSpec::new().set_dimmed(true));
    let _ = writeln!(stdout, "  1. Restart your AI coding assistant");
    let _ = writeln!(
        stdout,
        "  2. Try: \"Build a landing page for a SaaS product\"\n"
    );
    let _ = stdout.reset();
}

/// List release tags, newest first
pub fn show_versions(tags: &[String]) {
    let mut stdout = stdout();

    if tags.is_empty() {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(stdout, "No releases published yet");
        let _ = stdout.reset();
        return;
    }

    let _ = writeln!(stdout, "Available versions:");
    for (i, tag) in tags.iter().enumerate() {
        let _ = write!(stdout, "  {tag}");
        if i == 0 {
            let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)));
            let _ = write!(stdout, " (latest)");
            let _ = stdout.reset();
        }
        let _ = writeln!(stdout);
    }
}

/// Fatal error report, on stderr
pub fn show_error(message: &str) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "✗ ");
    let _ = stderr.reset();
    let _ = writeln!(stderr, "{message}");
}
