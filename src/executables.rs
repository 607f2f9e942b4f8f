use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::FinderConfig;

/// Searches a game's install directory for a small sample of executables, skipping
/// installers, updaters and crash handlers
#[derive(Debug, Clone)]
pub struct ExecutableFinder {
    extensions: Vec<String>,
    excluded_name_fragments: Vec<String>,
    max_results: usize,
    max_entries_visited: usize,
    max_depth: Option<usize>,
}

impl Default for ExecutableFinder {
    fn default() -> Self {
        Self::new(&FinderConfig::default())
    }
}

impl ExecutableFinder {
    pub fn new(config: &FinderConfig) -> Self {
        ExecutableFinder {
            extensions: config
                .extensions
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_lowercase())
                .filter(|e| !e.is_empty())
                .collect(),
            excluded_name_fragments: config
                .excluded_name_fragments
                .iter()
                .map(|f| f.trim().to_lowercase())
                .filter(|f| !f.is_empty())
                .collect(),
            max_results: config.max_results,
            max_entries_visited: config.max_entries_visited,
            max_depth: config.max_depth,
        }
    }

    fn is_wanted_file_name(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();

        let has_extension = Path::new(&file_name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.extensions.iter().any(|wanted| wanted == e));

        has_extension
            && !self
                .excluded_name_fragments
                .iter()
                .any(|fragment| file_name.contains(fragment.as_str()))
    }

    /// Returns up to `max_results` executables below `install_location`, in file name order.
    ///
    /// The walk stops at the first error (e.g. a directory which can't be read), returning
    /// whatever was found up to that point.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn find(&self, install_location: &Path) -> Vec<PathBuf> {
        let mut executables = Vec::new();

        if !install_location.is_dir() {
            trace!("Install location is not a directory: {install_location:?}");
            return executables;
        }

        let mut walker = WalkDir::new(install_location)
            .min_depth(1)
            .sort_by_file_name();
        if let Some(max_depth) = self.max_depth {
            walker = walker.max_depth(max_depth);
        }

        for (visited, entry) in walker.into_iter().enumerate() {
            if visited >= self.max_entries_visited {
                debug!(
                    "Stopped searching {install_location:?} after visiting {visited} entries"
                );
                break;
            }

            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Stopped searching {install_location:?} early: {e}");
                    break;
                }
            };

            let Some(file_name) = entry.file_name().to_str() else {
                trace!("Could not convert OS string to str: {:?}", entry.file_name());
                continue;
            };

            if self.is_wanted_file_name(file_name) && entry.path().is_file() {
                trace!("Found executable: {:?}", entry.path());
                executables.push(entry.into_path());

                if executables.len() >= self.max_results {
                    break;
                }
            }
        }

        executables
    }
}
