//! Folder installation into the working directory
//!
//! Copies the extracted top-level folders selected by the target's mapping
//! table into the destination root. Existing destinations are replaced
//! wholesale; nothing is merged.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use walkdir::WalkDir;

use crate::error::{InstallError, Result};
use crate::target::TargetType;

/// Install the folders of `extracted_root` that `target` maps, into
/// `destination_root`.
///
/// Source folders are processed in name order. Returns the destination names
/// in the order they were written.
pub fn install_folders(
    extracted_root: &Path,
    destination_root: &Path,
    target: TargetType,
) -> Result<Vec<String>> {
    let mut sources = Vec::new();
    let entries = fs::read_dir(extracted_root).map_err(|e| {
        InstallError::io(format!("Failed to read {}", extracted_root.display()), e)
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| {
            InstallError::io(format!("Failed to read {}", extracted_root.display()), e)
        })?;
        let file_type = entry.file_type().map_err(|e| {
            InstallError::io(format!("Failed to inspect {}", entry.path().display()), e)
        })?;
        if file_type.is_dir() {
            sources.push(entry.file_name().to_string_lossy().into_owned());
        } else if file_type.is_symlink() {
            warn!("skipping symlink {}", entry.path().display());
        }
    }
    sources.sort();

    let mut installed = Vec::new();
    for source in &sources {
        let destinations = target.destinations_for(source);
        if destinations.is_empty() {
            debug!("skipping {source}: not part of {}", target.id());
            continue;
        }

        for destination in destinations {
            let dest_path = destination_root.join(destination);
            replace_with_copy(&extracted_root.join(source), &dest_path)?;
            debug!("installed {source} -> {}", dest_path.display());
            installed.push(destination.to_string());
        }
    }

    Ok(installed)
}

/// Remove whatever is at `dest`, then copy `src` there recursively
fn replace_with_copy(src: &Path, dest: &Path) -> Result<()> {
    if let Ok(meta) = fs::symlink_metadata(dest) {
        let removed = if meta.is_dir() {
            fs::remove_dir_all(dest)
        } else {
            fs::remove_file(dest)
        };
        removed
            .map_err(|e| InstallError::io(format!("Failed to replace {}", dest.display()), e))?;
    }

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| InstallError::io(format!("Failed to create {}", parent.display()), e))?;
    }

    copy_dir_recursive(src, dest)
}

fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src).follow_root_links(false) {
        let entry = entry.map_err(|e| {
            let context = format!("Failed to walk {}", src.display());
            match e.into_io_error() {
                Some(io) => InstallError::io(context, io),
                None => InstallError::io(context, std::io::Error::other("filesystem loop")),
            }
        })?;

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| InstallError::io("Failed to resolve copy path", std::io::Error::other(e)))?;
        let target = dest.join(relative);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                InstallError::io(format!("Failed to create {}", target.display()), e)
            })?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).map_err(|e| {
                InstallError::io(
                    format!(
                        "Failed to copy {} to {}",
                        entry.path().display(),
                        target.display()
                    ),
                    e,
                )
            })?;
        } else {
            warn!("skipping symlink {}", entry.path().display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn claude_maps_agents_and_commands_and_overwrites() {
        let extracted = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        write(&extracted.path().join("agents/designer.md"), "new designer");
        write(&extracted.path().join("commands/ui/build.md"), "build");
        write(&extracted.path().join("README.md"), "ignored top-level file");

        // Pre-existing install with a file the new release no longer ships
        write(&cwd.path().join(".claude/agents/designer.md"), "old designer");
        write(&cwd.path().join(".claude/agents/stale.md"), "stale");
        write(&cwd.path().join(".claude/settings.json"), "{}");

        let installed = install_folders(extracted.path(), cwd.path(), TargetType::Claude).unwrap();

        assert_eq!(installed, vec![".claude/agents", ".claude/commands"]);
        assert_eq!(
            fs::read_to_string(cwd.path().join(".claude/agents/designer.md")).unwrap(),
            "new designer"
        );
        assert!(!cwd.path().join(".claude/agents/stale.md").exists());
        assert!(cwd.path().join(".claude/commands/ui/build.md").is_file());
        // Siblings of a replaced folder are untouched
        assert!(cwd.path().join(".claude/settings.json").is_file());
        assert!(!cwd.path().join("README.md").exists());
    }

    #[test]
    fn dot_folders_install_before_generic_renames() {
        let extracted = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        write(&extracted.path().join(".claude/skills/ui/SKILL.md"), "skill");
        write(&extracted.path().join("commands/a.md"), "a");

        let installed = install_folders(extracted.path(), cwd.path(), TargetType::Claude).unwrap();

        assert_eq!(installed, vec![".claude", ".claude/commands"]);
        assert!(cwd.path().join(".claude/skills/ui/SKILL.md").is_file());
        assert!(cwd.path().join(".claude/commands/a.md").is_file());
    }

    #[test]
    fn unmapped_folders_are_skipped() {
        let extracted = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        write(&extracted.path().join(".claude/x.md"), "x");
        write(&extracted.path().join(".shared/data.csv"), "a,b");
        write(&extracted.path().join("docs/guide.md"), "guide");

        let installed = install_folders(extracted.path(), cwd.path(), TargetType::Cursor).unwrap();

        assert_eq!(installed, vec![".shared"]);
        assert!(!cwd.path().join(".claude").exists());
        assert!(!cwd.path().join("docs").exists());
    }

    #[test]
    fn file_in_the_way_is_replaced() {
        let extracted = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        write(&extracted.path().join(".shared/data.csv"), "a,b");
        write(&cwd.path().join(".shared"), "a file, not a folder");

        let installed =
            install_folders(extracted.path(), cwd.path(), TargetType::Windsurf).unwrap();

        assert_eq!(installed, vec![".shared"]);
        assert!(cwd.path().join(".shared/data.csv").is_file());
    }

    #[test]
    fn all_writes_every_mapping() {
        let extracted = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        write(&extracted.path().join(".shared/data.csv"), "a,b");
        write(&extracted.path().join("commands/a.md"), "a");

        let installed = install_folders(extracted.path(), cwd.path(), TargetType::All).unwrap();

        assert_eq!(
            installed,
            vec![
                ".shared",
                ".claude/commands",
                ".cursor/commands",
                ".windsurf/workflows",
                ".agent/workflows",
                ".github/prompts",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_folders_are_skipped() {
        let extracted = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        let cwd = tempfile::tempdir().unwrap();

        write(&outside.path().join("secret.txt"), "secret");
        std::os::unix::fs::symlink(outside.path(), extracted.path().join(".claude")).unwrap();
        write(&extracted.path().join("agents/designer.md"), "designer");
        std::os::unix::fs::symlink(
            outside.path().join("secret.txt"),
            extracted.path().join("agents/link.txt"),
        )
        .unwrap();

        let installed = install_folders(extracted.path(), cwd.path(), TargetType::Claude).unwrap();

        assert_eq!(installed, vec![".claude/agents"]);
        assert!(cwd.path().join(".claude/agents/designer.md").is_file());
        assert!(!cwd.path().join(".claude/agents/link.txt").exists());
        assert!(!cwd.path().join(".claude/secret.txt").exists());
    }

    #[test]
    fn missing_extracted_root_is_io_error() {
        let cwd = tempfile::tempdir().unwrap();
        let err = install_folders(&cwd.path().join("nope"), cwd.path(), TargetType::Claude)
            .unwrap_err();
        assert!(matches!(err, InstallError::Io { .. }));
    }
}
