use std::sync::Arc;

use tracing::{debug, error, trace};

use crate::{
    data::{ProgramRecord, ProgramSource, ProgramsResult, SupportedSources},
    error::RegistryResult,
    macros::logs::{debug_key, trace_skipped_entry, warn_no_programs},
    registry::{Hive, KeyPath, Registry},
};

const SOURCE: SupportedSources = SupportedSources::Steam;

const STEAM_KEY: &str = r"SOFTWARE\WOW6432Node\Valve\Steam";
const STEAM_PUBLISHER: &str = "Steam";

/// Data about a single Steam app which is readable from its registry key
#[derive(Debug)]
struct ParsableAppData {
    app_id: String,
    title: String,
}

// STEAM ---------------------------------------------------------------------------------
/// Titles registered by the Steam client. They all share Steam's install directory as their
/// install location.
#[derive(Debug)]
pub struct Steam {
    registry: Arc<dyn Registry>,
    key_steam: KeyPath,
    key_apps: KeyPath,
}

impl Steam {
    pub fn new(registry: Arc<dyn Registry>) -> Self {
        let key_steam = KeyPath::new(Hive::LocalMachine, STEAM_KEY);
        let key_apps = key_steam.join("Apps");

        debug_key!(SOURCE, "main Steam key", registry, key_steam);
        debug_key!(SOURCE, "apps key", registry, key_apps);

        Steam {
            registry,
            key_steam,
            key_apps,
        }
    }

    /// Steam's own install directory, used as the install location of all its titles
    fn get_install_root(&self) -> RegistryResult<String> {
        self.registry.get_string(&self.key_steam, "InstallPath")
    }

    /// Returns the app's data if it has a name and is flagged as installed
    #[tracing::instrument(level = "trace", skip(self))]
    fn get_app(&self, app_id: &str) -> Option<ParsableAppData> {
        let key = self.key_apps.join(app_id);

        let title = self
            .registry
            .get_string(&key, "Name")
            .map_err(|e| {
                trace_skipped_entry!(SOURCE, key, e);
            })
            .ok()?;

        let is_installed = self
            .registry
            .get_dword(&key, "Installed")
            .map_err(|e| {
                trace_skipped_entry!(SOURCE, key, e);
            })
            .ok()?;

        if is_installed != 1 {
            trace!("{SOURCE} - Skipped '{title}' as it is not installed");
            return None;
        }

        Some(ParsableAppData {
            app_id: app_id.to_owned(),
            title,
        })
    }
}

impl ProgramSource for Steam {
    fn get_source_type(&self) -> SupportedSources {
        SOURCE
    }

    fn is_detected(&self) -> bool {
        self.get_install_root().is_ok()
    }

    #[tracing::instrument(level = "trace", skip(self))]
    fn get_detected_programs(&self) -> ProgramsResult {
        let install_root = self.get_install_root().map_err(|e| {
            error!("{SOURCE} - Error with reading the Steam install path:\n{e}");
            e
        })?;

        debug!("{SOURCE} - install path: {install_root}");

        let app_ids = self.registry.subkey_names(&self.key_apps).map_err(|e| {
            error!("{SOURCE} - Error with reading the Steam apps list:\n{e}");
            e
        })?;

        let programs: Vec<ProgramRecord> = app_ids
            .iter()
            .filter_map(|app_id| self.get_app(app_id))
            .map(|ParsableAppData { app_id, title }| ProgramRecord {
                name: title,
                install_location: Some(install_root.clone()),
                publisher: Some(STEAM_PUBLISHER.to_owned()),
                source_tag: Some(app_id),
                source: SOURCE,
            })
            .collect();

        if programs.is_empty() {
            warn_no_programs!(SOURCE);
        }
        debug!("{SOURCE} - installed titles: {programs:?}");

        Ok(programs)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{error::ScanError, registry::MemoryRegistry, sources::test_utils::get_mock_registry};

    #[test]
    fn test_steam() -> Result<(), ScanError> {
        let steam = Steam::new(Arc::new(get_mock_registry()));

        assert!(steam.is_detected());
        assert_eq!(format!("{}", steam.get_source_type()), "Steam");

        let programs = steam.get_detected_programs()?;

        // Only installed titles with a name are listed
        assert_eq!(
            programs,
            vec![
                ProgramRecord {
                    name: "Steamworks Common Redistributables".into(),
                    install_location: Some(r"D:\Steam".into()),
                    publisher: Some("Steam".into()),
                    source_tag: Some("228980".into()),
                    source: SupportedSources::Steam,
                },
                ProgramRecord {
                    name: "Stardew Valley".into(),
                    install_location: Some(r"D:\Steam".into()),
                    publisher: Some("Steam".into()),
                    source_tag: Some("413150".into()),
                    source: SupportedSources::Steam,
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn test_steam_without_install_path() {
        let registry = MemoryRegistry::new().with_dword(
            Hive::LocalMachine,
            &format!(r"{STEAM_KEY}\Apps\620"),
            "Installed",
            1,
        );
        let steam = Steam::new(Arc::new(registry));

        assert!(!steam.is_detected());
        assert!(steam.get_detected_programs().is_err());
    }

    #[test]
    fn test_steam_without_apps() -> Result<(), ScanError> {
        let registry = MemoryRegistry::new().with_string(
            Hive::LocalMachine,
            STEAM_KEY,
            "InstallPath",
            r"C:\Program Files (x86)\Steam",
        );
        let steam = Steam::new(Arc::new(registry));

        assert!(steam.is_detected());
        assert!(matches!(
            steam.get_detected_programs(),
            Err(ScanError::Registry(_))
        ));

        let registry = MemoryRegistry::new()
            .with_string(Hive::LocalMachine, STEAM_KEY, "InstallPath", r"C:\Steam")
            .with_key(Hive::LocalMachine, &format!(r"{STEAM_KEY}\Apps"));

        assert!(Steam::new(Arc::new(registry)).get_detected_programs()?.is_empty());

        Ok(())
    }
}
