//! A Rust library, and command line tool, for finding installed games on a specific drive by
//! scanning the Windows registry.
//!
//! # Description
//!
//! Installed programs are read from the registry's uninstall lists and from Steam's list of
//! registered titles. Each program is then classified as a likely game or not, using
//! publisher and keyword lists, and the likely games installed on the target drive are listed
//! together with a few of the executables found in their install directories.
//!
//! Registry access goes through the [`registry::Registry`] trait. On Windows this reads the
//! live registry, anywhere else no programs are found unless a different backend, such as a
//! [`registry::MemoryRegistry`], is used.
//!
//! # Usage
//!
//! ```rust
//! use drive_game_finder::{config::ScanConfig, get_scanner, report::render_report, run_scan};
//!
//! let scanner = get_scanner();
//! let all_programs = scanner.get_all_programs();
//! let report = run_scan(&scanner, &ScanConfig::default());
//! println!("{}", render_report(&report));
//! ```
//!
//! # Currently supported program sources
//!
//! - `HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall`
//! - `HKLM\SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\Uninstall`
//! - `HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall`
//! - Steam (`HKLM\SOFTWARE\WOW6432Node\Valve\Steam\Apps`)
//!   - Only titles flagged as installed are listed, and all of them share Steam's install
//!     directory as their install location

pub mod classifier;
pub mod config;
pub mod data;
pub mod error;
pub mod executables;
pub mod location;
mod macros;
mod parsers;
pub mod registry;
pub mod report;
mod scan;
pub mod sources;

pub use scan::run_scan;
use sources::ProgramScanner;

/// Primary entry point into the crate - get a [`ProgramScanner`] reading the registry of the
/// current platform
pub fn get_scanner() -> ProgramScanner {
    ProgramScanner::new(registry::get_registry())
}
