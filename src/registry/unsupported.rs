use super::{KeyPath, Registry};
use crate::error::{RegistryError, RegistryResult};

/// Stand-in for platforms without a system registry, every read fails with
/// [`RegistryError::Unsupported`]
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedRegistry;

impl Registry for UnsupportedRegistry {
    fn subkey_names(&self, _key: &KeyPath) -> RegistryResult<Vec<String>> {
        Err(RegistryError::Unsupported)
    }

    fn get_string(&self, _key: &KeyPath, _value: &str) -> RegistryResult<String> {
        Err(RegistryError::Unsupported)
    }

    fn get_dword(&self, _key: &KeyPath, _value: &str) -> RegistryResult<u32> {
        Err(RegistryError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Hive;

    #[test]
    fn test_every_read_fails() {
        let key = KeyPath::new(Hive::LocalMachine, "SOFTWARE");

        assert!(!UnsupportedRegistry.key_exists(&key));
        assert!(matches!(
            UnsupportedRegistry.get_string(&key, "Name"),
            Err(RegistryError::Unsupported)
        ));
        assert!(matches!(
            UnsupportedRegistry.get_dword(&key, "Installed"),
            Err(RegistryError::Unsupported)
        ));
    }
}
