//! Target environments and their folder mapping table
//!
//! Which extracted folders get installed, and under which name, is pure data
//! here. The folder installer only walks this table.

use std::fmt;

use clap::ValueEnum;

/// AI coding assistant the skill is installed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum TargetType {
    Claude,
    Cursor,
    Windsurf,
    Antigravity,
    Copilot,
    All,
}

impl TargetType {
    /// Fixed enumeration, in prompt order
    pub const ALL: [TargetType; 6] = [
        TargetType::Claude,
        TargetType::Cursor,
        TargetType::Windsurf,
        TargetType::Antigravity,
        TargetType::Copilot,
        TargetType::All,
    ];

    /// CLI value, e.g. `claude`
    pub fn id(self) -> &'static str {
        match self {
            TargetType::Claude => "claude",
            TargetType::Cursor => "cursor",
            TargetType::Windsurf => "windsurf",
            TargetType::Antigravity => "antigravity",
            TargetType::Copilot => "copilot",
            TargetType::All => "all",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            TargetType::Claude => "Claude Code (.claude/)",
            TargetType::Cursor => "Cursor (.cursor/ + .shared/)",
            TargetType::Windsurf => "Windsurf (.windsurf/ + .shared/)",
            TargetType::Antigravity => "Antigravity (.agent/ + .shared/)",
            TargetType::Copilot => "GitHub Copilot (.github/ + .shared/)",
            TargetType::All => "All assistants",
        }
    }

    /// Folder mappings for this target, in table order
    pub fn folder_mappings(self) -> Vec<FolderMapping> {
        match self {
            TargetType::Claude => CLAUDE.to_vec(),
            TargetType::Cursor => CURSOR.to_vec(),
            TargetType::Windsurf => WINDSURF.to_vec(),
            TargetType::Antigravity => ANTIGRAVITY.to_vec(),
            TargetType::Copilot => COPILOT.to_vec(),
            TargetType::All => {
                let mut merged: Vec<FolderMapping> = Vec::new();
                for table in [CLAUDE, CURSOR, WINDSURF, ANTIGRAVITY, COPILOT] {
                    for mapping in table {
                        if !merged.contains(mapping) {
                            merged.push(*mapping);
                        }
                    }
                }
                merged
            }
        }
    }

    /// Destination names a top-level source folder is installed under.
    /// Empty when the folder is not part of this target.
    pub fn destinations_for(self, source: &str) -> Vec<&'static str> {
        self.folder_mappings()
            .into_iter()
            .filter(|m| m.source == source)
            .map(|m| m.destination)
            .collect()
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One row of the mapping table: extracted top-level folder to destination path
/// relative to the working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderMapping {
    pub source: &'static str,
    pub destination: &'static str,
}

const fn map(source: &'static str, destination: &'static str) -> FolderMapping {
    FolderMapping {
        source,
        destination,
    }
}

const CLAUDE: &[FolderMapping] = &[
    map(".claude", ".claude"),
    map("agents", ".claude/agents"),
    map("commands", ".claude/commands"),
];

const CURSOR: &[FolderMapping] = &[
    map(".cursor", ".cursor"),
    map(".shared", ".shared"),
    map("commands", ".cursor/commands"),
];

const WINDSURF: &[FolderMapping] = &[
    map(".windsurf", ".windsurf"),
    map(".shared", ".shared"),
    map("commands", ".windsurf/workflows"),
];

const ANTIGRAVITY: &[FolderMapping] = &[
    map(".agent", ".agent"),
    map(".shared", ".shared"),
    map("commands", ".agent/workflows"),
];

const COPILOT: &[FolderMapping] = &[
    map(".github", ".github"),
    map(".shared", ".shared"),
    map("commands", ".github/prompts"),
];
