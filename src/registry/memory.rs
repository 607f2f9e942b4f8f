use std::collections::BTreeMap;

use super::{Hive, KeyPath, Registry};
use crate::error::{RegistryError, RegistryResult};

#[derive(Debug, Clone)]
enum MemoryValue {
    String(String),
    Dword(u32),
}

#[derive(Debug, Clone, Default)]
struct MemoryKey {
    /// Last path component with its original casing
    name: String,
    /// Values keyed by lower-cased value name
    values: BTreeMap<String, MemoryValue>,
    is_denied: bool,
}

/// In-memory registry, case-insensitive like the real one.
///
/// Keys are created implicitly, along with all of their parents, when a value is added.
///
/// ```rust
/// use drive_game_finder::registry::{Hive, KeyPath, MemoryRegistry, Registry};
///
/// let registry = MemoryRegistry::new()
///     .with_string(Hive::LocalMachine, r"SOFTWARE\Valve\Steam", "InstallPath", r"D:\Steam");
///
/// let key = KeyPath::new(Hive::LocalMachine, r"software\valve\steam");
/// assert_eq!(registry.get_string(&key, "installpath").unwrap(), r"D:\Steam");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryRegistry {
    keys: BTreeMap<(Hive, String), MemoryKey>,
}

fn normalise(path: &str) -> String {
    path.trim_matches('\\').to_lowercase()
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key and all of its parents, without any values
    pub fn with_key(mut self, hive: Hive, path: &str) -> Self {
        self.insert_key(hive, path);
        self
    }

    pub fn with_string(mut self, hive: Hive, path: &str, name: &str, value: &str) -> Self {
        self.insert_key(hive, path)
            .values
            .insert(name.to_lowercase(), MemoryValue::String(value.to_owned()));
        self
    }

    pub fn with_dword(mut self, hive: Hive, path: &str, name: &str, value: u32) -> Self {
        self.insert_key(hive, path)
            .values
            .insert(name.to_lowercase(), MemoryValue::Dword(value));
        self
    }

    /// Makes the key, and everything below it, fail with [`RegistryError::AccessDenied`]
    pub fn deny(mut self, hive: Hive, path: &str) -> Self {
        self.insert_key(hive, path).is_denied = true;
        self
    }

    fn insert_key(&mut self, hive: Hive, path: &str) -> &mut MemoryKey {
        let components: Vec<&str> = path.split('\\').filter(|c| !c.is_empty()).collect();

        for i in 1..components.len() {
            let parent = components[..i].join("\\");
            self.keys
                .entry((hive, parent.to_lowercase()))
                .or_insert_with(|| MemoryKey {
                    name: components[i - 1].to_owned(),
                    ..Default::default()
                });
        }

        self.keys
            .entry((hive, components.join("\\").to_lowercase()))
            .or_insert_with(|| MemoryKey {
                name: components.last().copied().unwrap_or_default().to_owned(),
                ..Default::default()
            })
    }

    /// Finds a key, honouring denied keys anywhere along its path
    fn get_key(&self, key: &KeyPath) -> RegistryResult<&MemoryKey> {
        let path = normalise(&key.path);

        let is_denied = self
            .keys
            .iter()
            .any(|((hive, p), k)| *hive == key.hive && k.is_denied && is_within(&path, p));
        if is_denied {
            return Err(RegistryError::AccessDenied(key.to_string()));
        }

        self.keys
            .get(&(key.hive, path))
            .ok_or_else(|| RegistryError::KeyNotFound(key.to_string()))
    }

    fn get_value(&self, key: &KeyPath, value: &str) -> RegistryResult<&MemoryValue> {
        self.get_key(key)?
            .values
            .get(&value.to_lowercase())
            .ok_or_else(|| RegistryError::ValueNotFound {
                key: key.to_string(),
                value: value.to_owned(),
            })
    }
}

/// Whether `path` is `ancestor` itself or lies below it
fn is_within(path: &str, ancestor: &str) -> bool {
    path == ancestor
        || path
            .strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('\\'))
}

impl Registry for MemoryRegistry {
    fn subkey_names(&self, key: &KeyPath) -> RegistryResult<Vec<String>> {
        let path = normalise(&key.path);
        self.get_key(key)?;

        Ok(self
            .keys
            .iter()
            .filter(|((hive, p), _)| {
                *hive == key.hive
                    && p.strip_prefix(path.as_str())
                        .and_then(|rest| rest.strip_prefix('\\'))
                        .is_some_and(|rest| !rest.is_empty() && !rest.contains('\\'))
            })
            .map(|(_, k)| k.name.clone())
            .collect())
    }

    fn get_string(&self, key: &KeyPath, value: &str) -> RegistryResult<String> {
        match self.get_value(key, value)? {
            MemoryValue::String(s) => Ok(s.clone()),
            MemoryValue::Dword(_) => Err(RegistryError::UnexpectedType {
                key: key.to_string(),
                value: value.to_owned(),
            }),
        }
    }

    fn get_dword(&self, key: &KeyPath, value: &str) -> RegistryResult<u32> {
        match self.get_value(key, value)? {
            MemoryValue::Dword(d) => Ok(*d),
            MemoryValue::String(_) => Err(RegistryError::UnexpectedType {
                key: key.to_string(),
                value: value.to_owned(),
            }),
        }
    }
}
