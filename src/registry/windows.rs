use std::io;

use winreg::{
    RegKey,
    enums::{HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE},
};

use super::{Hive, KeyPath, Registry};
use crate::error::{RegistryError, RegistryResult};

/// The live Windows registry, read through `winreg`
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsRegistry;

impl WindowsRegistry {
    fn open(&self, key: &KeyPath) -> RegistryResult<RegKey> {
        let root = match key.hive {
            Hive::LocalMachine => RegKey::predef(HKEY_LOCAL_MACHINE),
            Hive::CurrentUser => RegKey::predef(HKEY_CURRENT_USER),
        };

        root.open_subkey(&key.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => RegistryError::KeyNotFound(key.to_string()),
            io::ErrorKind::PermissionDenied => RegistryError::AccessDenied(key.to_string()),
            _ => RegistryError::Io(e),
        })
    }
}

fn value_error(key: &KeyPath, value: &str, e: io::Error) -> RegistryError {
    match e.kind() {
        io::ErrorKind::NotFound => RegistryError::ValueNotFound {
            key: key.to_string(),
            value: value.to_owned(),
        },
        io::ErrorKind::PermissionDenied => RegistryError::AccessDenied(key.to_string()),
        io::ErrorKind::InvalidData => RegistryError::UnexpectedType {
            key: key.to_string(),
            value: value.to_owned(),
        },
        _ => RegistryError::Io(e),
    }
}

impl Registry for WindowsRegistry {
    fn subkey_names(&self, key: &KeyPath) -> RegistryResult<Vec<String>> {
        // Subkeys which can't be enumerated are skipped rather than failing the whole key
        Ok(self.open(key)?.enum_keys().flatten().collect())
    }

    fn get_string(&self, key: &KeyPath, value: &str) -> RegistryResult<String> {
        self.open(key)?
            .get_value::<String, _>(value)
            .map_err(|e| value_error(key, value, e))
    }

    fn get_dword(&self, key: &KeyPath, value: &str) -> RegistryResult<u32> {
        self.open(key)?
            .get_value::<u32, _>(value)
            .map_err(|e| value_error(key, value, e))
    }
}
