//! Read-only access to a Windows-style registry.
//!
//! All program sources go through the [`Registry`] trait, so the live registry can be swapped
//! for a [`MemoryRegistry`] in tests or on platforms without one.

mod memory;
mod unsupported;
#[cfg(windows)]
mod windows;

use std::{
    fmt::{self, Debug, Display, Formatter},
    sync::Arc,
};

use cfg_if::cfg_if;

pub use memory::MemoryRegistry;
pub use unsupported::UnsupportedRegistry;
#[cfg(windows)]
pub use windows::WindowsRegistry;

use crate::error::RegistryResult;

/// Root of a registry tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hive {
    LocalMachine,
    CurrentUser,
}

impl Display for Hive {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Hive::LocalMachine => "HKLM",
                Hive::CurrentUser => "HKCU",
            }
        )
    }
}

/// Full path of a registry key, e.g. `HKLM\SOFTWARE\Valve\Steam`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    pub hive: Hive,
    pub path: String,
}

impl KeyPath {
    pub fn new(hive: Hive, path: impl Into<String>) -> Self {
        KeyPath {
            hive,
            path: path.into(),
        }
    }

    /// Path of the direct subkey with the given name
    pub fn join(&self, name: &str) -> Self {
        let path = if self.path.is_empty() {
            name.to_owned()
        } else {
            format!("{}\\{name}", self.path.trim_end_matches('\\'))
        };

        KeyPath::new(self.hive, path)
    }
}

impl Display for KeyPath {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}\\{}", self.hive, self.path)
    }
}

/// Read-only view of a registry. Every call reports its own failure, so callers decide
/// whether a missing key or value is fatal.
pub trait Registry: Debug + Send + Sync {
    /// Names of the direct subkeys of `key`
    fn subkey_names(&self, key: &KeyPath) -> RegistryResult<Vec<String>>;

    /// String (`REG_SZ`/`REG_EXPAND_SZ`) value `value` of `key`
    fn get_string(&self, key: &KeyPath, value: &str) -> RegistryResult<String>;

    /// 32-bit (`REG_DWORD`) value `value` of `key`
    fn get_dword(&self, key: &KeyPath, value: &str) -> RegistryResult<u32>;

    fn key_exists(&self, key: &KeyPath) -> bool {
        self.subkey_names(key).is_ok()
    }
}

cfg_if! {
    if #[cfg(windows)] {
        /// Registry backend for the current platform
        pub fn get_registry() -> Arc<dyn Registry> {
            Arc::new(WindowsRegistry)
        }
    } else {
        /// Registry backend for the current platform
        pub fn get_registry() -> Arc<dyn Registry> {
            tracing::warn!("No system registry on this platform, no programs will be detected");
            Arc::new(UnsupportedRegistry)
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("SOFTWARE", "Valve", "SOFTWARE\\Valve"; "simple")]
    #[test_case("SOFTWARE\\", "Valve", "SOFTWARE\\Valve"; "trailing separator")]
    #[test_case("", "SOFTWARE", "SOFTWARE"; "root")]
    fn test_key_path_join(base: &str, name: &str, expected: &str) {
        let key = KeyPath::new(Hive::LocalMachine, base).join(name);
        assert_eq!(key.path, expected);
    }

    #[test]
    fn test_key_path_display() {
        let key = KeyPath::new(Hive::CurrentUser, "SOFTWARE\\Valve");
        assert_eq!(key.to_string(), "HKCU\\SOFTWARE\\Valve");
    }
}
