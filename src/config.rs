//! Tunable data used by a scan: the target drive, the classification word lists and the
//! executable search limits.
//!
//! Every field has a default, so a configuration file only needs to contain what it changes:
//!
//! ```json
//! {
//!     "drive_prefix": "E:",
//!     "rules": { "game_keywords": ["game", "quest"] },
//!     "finder": { "max_results": 10 }
//! }
//! ```

#[cfg(feature = "serde")]
use std::{fs::read_to_string, path::Path};

use crate::error::ScanError;

const DEFAULT_DRIVE_PREFIX: &str = "D:";

const GAME_PUBLISHERS: [&str; 24] = [
    "steam",
    "valve",
    "epic games",
    "electronic arts",
    "ea",
    "ubisoft",
    "activision",
    "blizzard",
    "bethesda",
    "cd projekt",
    "rockstar",
    "square enix",
    "capcom",
    "konami",
    "sega",
    "nintendo",
    "sony",
    "microsoft studios",
    "xbox game studios",
    "riot games",
    "epic",
    "gog",
    "origin",
    "battle.net",
];

const GAME_KEYWORDS: [&str; 17] = [
    "game",
    "games",
    "simulator",
    "racing",
    "adventure",
    "rpg",
    "strategy",
    "action",
    "shooter",
    "warfare",
    "battle",
    "combat",
    "quest",
    "fantasy",
    "online",
    "multiplayer",
    "edition",
];

const NON_GAME_KEYWORDS: [&str; 14] = [
    "microsoft",
    "adobe",
    "driver",
    "update",
    "runtime",
    "framework",
    "redistributable",
    "tool",
    "utility",
    "browser",
    "antivirus",
    "office",
    "visual studio",
    "windows",
];

const EXECUTABLE_EXTENSIONS: [&str; 1] = ["exe"];

const EXCLUDED_EXECUTABLE_FRAGMENTS: [&str; 6] =
    ["unins", "setup", "install", "update", "redist", "crash"];

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Substring lists used to decide whether a program is a game
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HeuristicRules {
    /// Matched against the publisher, a match always means "game"
    pub game_publishers: Vec<String>,
    /// Matched against the name, a match means "game" unless excluded
    pub game_keywords: Vec<String>,
    /// Matched against the name, a match means "not a game" unless the publisher is trusted
    pub non_game_keywords: Vec<String>,
}

impl Default for HeuristicRules {
    fn default() -> Self {
        HeuristicRules {
            game_publishers: to_strings(&GAME_PUBLISHERS),
            game_keywords: to_strings(&GAME_KEYWORDS),
            non_game_keywords: to_strings(&NON_GAME_KEYWORDS),
        }
    }
}

impl HeuristicRules {
    /// Trims and lower-cases every term, dropping empty ones (which would match everything)
    pub fn normalised(self) -> Self {
        fn normalise(terms: Vec<String>) -> Vec<String> {
            terms
                .into_iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect()
        }

        HeuristicRules {
            game_publishers: normalise(self.game_publishers),
            game_keywords: normalise(self.game_keywords),
            non_game_keywords: normalise(self.non_game_keywords),
        }
    }
}

/// Limits and filters for the executable search in a game's install directory
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinderConfig {
    /// File extensions, without the leading dot, matched case-insensitively
    pub extensions: Vec<String>,
    /// File names containing any of these (case-insensitive) are skipped
    pub excluded_name_fragments: Vec<String>,
    pub max_results: usize,
    /// Upper bound on directory entries looked at before giving up
    pub max_entries_visited: usize,
    /// Maximum directory depth below the install directory, unbounded if `None`
    pub max_depth: Option<usize>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        FinderConfig {
            extensions: to_strings(&EXECUTABLE_EXTENSIONS),
            excluded_name_fragments: to_strings(&EXCLUDED_EXECUTABLE_FRAGMENTS),
            max_results: 5,
            max_entries_visited: 20_000,
            max_depth: None,
        }
    }
}

/// Everything a scan needs besides the registry itself
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScanConfig {
    /// Install paths must start with this (case-insensitive), e.g. `D:`
    pub drive_prefix: String,
    pub rules: HeuristicRules,
    pub finder: FinderConfig,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            drive_prefix: DEFAULT_DRIVE_PREFIX.to_owned(),
            rules: HeuristicRules::default(),
            finder: FinderConfig::default(),
        }
    }
}

impl ScanConfig {
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.finder.max_results == 0 {
            return Err(ScanError::InvalidConfig(
                "finder.max_results must be at least 1".to_owned(),
            ));
        }

        if self.finder.extensions.iter().all(|e| e.trim().is_empty()) {
            return Err(ScanError::InvalidConfig(
                "finder.extensions must contain at least one extension".to_owned(),
            ));
        }

        Ok(())
    }

    /// Parses a configuration from JSON, using defaults for anything left out
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self, ScanError> {
        let config: ScanConfig = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    #[cfg(feature = "serde")]
    #[tracing::instrument(level = "debug")]
    pub fn from_json_file(path: &Path) -> Result<Self, ScanError> {
        let json = read_to_string(path).inspect_err(|e| {
            tracing::error!("Error with reading configuration file at {path:?}:\n{e}");
        })?;

        Self::from_json_str(&json)
    }
}
