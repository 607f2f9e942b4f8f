use std::sync::Arc;

use tracing::{debug, error, trace};

use crate::{
    data::{ProgramRecord, ProgramSource, ProgramsResult, SupportedSources},
    macros::logs::{debug_key, trace_skipped_entry, warn_no_programs},
    parsers::parse_uninstall_directory,
    registry::{Hive, KeyPath, Registry},
};

/// The registry subtrees Windows uses to list installed programs
pub const UNINSTALL_LISTS: [(SupportedSources, Hive, &str); 3] = [
    (
        SupportedSources::UninstallMachine,
        Hive::LocalMachine,
        r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall",
    ),
    (
        SupportedSources::UninstallMachineWow64,
        Hive::LocalMachine,
        r"SOFTWARE\WOW6432Node\Microsoft\Windows\CurrentVersion\Uninstall",
    ),
    (
        SupportedSources::UninstallUser,
        Hive::CurrentUser,
        r"SOFTWARE\Microsoft\Windows\CurrentVersion\Uninstall",
    ),
];

/// Returns the value if present and not just whitespace
fn non_blank(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

// UNINSTALL LIST ------------------------------------------------------------------------
/// One of the `...\CurrentVersion\Uninstall` subtrees, with one subkey per installed program
#[derive(Debug)]
pub struct UninstallList {
    registry: Arc<dyn Registry>,
    source: SupportedSources,
    key: KeyPath,
}

impl UninstallList {
    pub fn new(registry: Arc<dyn Registry>, source: SupportedSources, key: KeyPath) -> Self {
        debug_key!(source, "uninstall list", registry, key);

        UninstallList {
            registry,
            source,
            key,
        }
    }

    /// All the uninstall lists known to Windows
    pub fn all(registry: &Arc<dyn Registry>) -> Vec<Self> {
        UNINSTALL_LISTS
            .iter()
            .map(|(source, hive, path)| {
                UninstallList::new(Arc::clone(registry), *source, KeyPath::new(*hive, *path))
            })
            .collect()
    }

    /// Install location from `InstallLocation`, falling back to the directory of the
    /// uninstaller named in `UninstallString`
    fn get_install_location(&self, key: &KeyPath) -> Option<String> {
        if let Some(location) = self
            .registry
            .get_string(key, "InstallLocation")
            .ok()
            .and_then(non_blank)
        {
            return Some(location);
        }

        let uninstall_string = self.registry.get_string(key, "UninstallString").ok()?;
        let location = parse_uninstall_directory(&uninstall_string);
        trace!(
            "{} - Install location from uninstall string {uninstall_string:?}: {location:?}",
            self.source
        );

        location
    }

    /// Returns a new program from a single uninstall entry, or `None` if it has no name
    #[tracing::instrument(level = "trace", skip(self))]
    fn get_program(&self, key: &KeyPath) -> Option<ProgramRecord> {
        let name = match self.registry.get_string(key, "DisplayName").map(non_blank) {
            Ok(Some(name)) => name,
            Ok(None) => {
                trace_skipped_entry!(self.source, key, "blank DisplayName");
                return None;
            }
            Err(e) => {
                trace_skipped_entry!(self.source, key, e);
                return None;
            }
        };

        let install_location = self.get_install_location(key);
        let publisher = self
            .registry
            .get_string(key, "Publisher")
            .ok()
            .and_then(non_blank);

        trace!("{} - Install location for '{name}': {install_location:?}", self.source);

        Some(ProgramRecord {
            name,
            install_location,
            publisher,
            source_tag: None,
            source: self.source,
        })
    }
}

impl ProgramSource for UninstallList {
    fn get_source_type(&self) -> SupportedSources {
        self.source
    }

    fn is_detected(&self) -> bool {
        self.registry.key_exists(&self.key)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn get_detected_programs(&self) -> ProgramsResult {
        let entries = self.registry.subkey_names(&self.key).map_err(|e| {
            error!("{} - Error with reading {}:\n{e}", self.source, self.key);
            e
        })?;

        debug!("{} - {} entries under {}", self.source, entries.len(), self.key);

        let programs: Vec<ProgramRecord> = entries
            .iter()
            .filter_map(|entry| self.get_program(&self.key.join(entry)))
            .collect();

        if programs.is_empty() {
            warn_no_programs!(self.source);
        }

        Ok(programs)
    }
}
