//! Target environment detection
//!
//! Inspects the working directory for marker files and folders left behind by
//! each AI assistant:
//! - Claude Code: `.claude/`, `CLAUDE.md`
//! - Cursor: `.cursor/`, `.cursorrules`
//! - Windsurf: `.windsurf/`, `.windsurfrules`
//! - Antigravity: `.agent/`
//! - GitHub Copilot: `.github/copilot-instructions.md`, `.github/prompts/`
//!
//! Detection only reads the filesystem; prompting happens in the wizard.

use std::path::Path;

use crate::target::TargetType;

/// Marker paths per target, relative to the working directory
const MARKERS: &[(TargetType, &[&str])] = &[
    (TargetType::Claude, &[".claude", "CLAUDE.md"]),
    (TargetType::Cursor, &[".cursor", ".cursorrules"]),
    (TargetType::Windsurf, &[".windsurf", ".windsurfrules"]),
    (TargetType::Antigravity, &[".agent"]),
    (
        TargetType::Copilot,
        &[".github/copilot-instructions.md", ".github/prompts"],
    ),
];

/// Targets whose markers exist under `dir`, in enumeration order
pub fn detect_targets(dir: &Path) -> Vec<TargetType> {
    MARKERS
        .iter()
        .filter(|(_, markers)| markers.iter().any(|m| dir.join(m).exists()))
        .map(|(target, _)| *target)
        .collect()
}

/// Default selection: the first detected candidate, otherwise the first entry
/// of the fixed enumeration.
pub fn suggested_target(detected: &[TargetType]) -> TargetType {
    detected.first().copied().unwrap_or(TargetType::ALL[0])
}
