use std::{
    fmt::{self, Debug, Display, Formatter},
    path::PathBuf,
    sync::Arc,
};

use crate::error::ScanError;

/// Data structure which defines all relevant data about one installed program
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProgramRecord {
    /// Display name, never empty
    pub name: String,
    /// Raw install path as found in the registry, not checked for existence
    pub install_location: Option<String>,
    pub publisher: Option<String>,
    /// Identifier given by the source, e.g. a Steam app id
    pub source_tag: Option<String>,
    pub source: SupportedSources,
}

/// Custom Result type for programs read from a single source
pub type ProgramsResult = Result<Vec<ProgramRecord>, ScanError>;

/// Data structure representing a supported source of installed programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SupportedSources {
    UninstallMachine,
    UninstallMachineWow64,
    UninstallUser,
    Steam,
}

impl Display for SupportedSources {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SupportedSources::UninstallMachine => "Uninstall - Local Machine",
                SupportedSources::UninstallMachineWow64 => "Uninstall - Local Machine (32-bit)",
                SupportedSources::UninstallUser => "Uninstall - Current User",
                SupportedSources::Steam => "Steam",
            }
        )
    }
}

// Program detection is divided up by "sources", which are specific places in the registry
// that list installed programs, e.g. the uninstall lists or Steam's app list
pub trait ProgramSource: Send + Sync + Debug {
    fn get_detected_programs(&self) -> ProgramsResult;
    fn is_detected(&self) -> bool;
    fn get_source_type(&self) -> SupportedSources;
}
pub type Sources = Vec<Arc<dyn ProgramSource>>;
pub type ProgramsPerSource = Vec<(SupportedSources, Vec<ProgramRecord>)>;

/// A program classified as a game on the target drive, with a sample of its executables
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DetectedGame {
    pub record: ProgramRecord,
    pub executables: Vec<PathBuf>,
}

/// Everything gathered by a single scan, ready to be printed
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScanReport {
    pub drive_prefix: String,
    pub steam_programs: usize,
    pub total_programs: usize,
    pub likely_games: usize,
    pub games: Vec<DetectedGame>,
}
