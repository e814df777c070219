//! File-backed role storage
//!
//! Keeps a small JSON object (`{"vaultflow-demo-role": "editor"}`) on disk so
//! the demo role survives a restart. Other keys in the file are preserved.

use super::store::{RoleStore, DEMO_ROLE_KEY};
use crate::error::{Error, Result};
use crate::rbac::Role;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Persistent role store backed by a JSON file
pub struct FileRoleStore {
    path: PathBuf,
    key: String,
    // Serializes read-modify-write cycles within this process
    write_lock: Mutex<()>,
}

impl FileRoleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_key(path, DEMO_ROLE_KEY)
    }

    pub fn with_key(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self { path: path.into(), key: key.into(), write_lock: Mutex::new(()) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => Ok(map),
            _ => Err(Error::Storage(format!("{} does not hold a JSON object", self.path.display()))),
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(map)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut Map<String, Value>)) -> Result<()> {
        let _guard = self.write_lock.lock().map_err(|_| Error::Storage("role file lock poisoned".to_string()))?;
        // An unreadable file is overwritten rather than left to block every write
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(e @ (Error::Serialization(_) | Error::Storage(_))) => {
                log::warn!("Discarding unreadable role file {}: {}", self.path.display(), e);
                Map::new()
            }
            Err(e) => return Err(e),
        };
        f(&mut map);
        self.write_map(&map)
    }
}

impl RoleStore for FileRoleStore {
    fn load(&self) -> Result<Option<Role>> {
        match self.read_map()?.get(&self.key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(raw)) => raw.parse::<Role>().map(Some),
            Some(other) => Err(Error::UnknownRole(other.to_string())),
        }
    }

    fn save(&self, role: Role) -> Result<()> {
        self.update(|map| {
            map.insert(self.key.clone(), Value::String(role.as_str().to_string()));
        })?;
        log::debug!("Saved role {} to {}", role, self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.update(|map| {
            map.remove(&self.key);
        })
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state").join("vaultflow.json");

        let store = FileRoleStore::new(&path);
        assert_eq!(store.load().unwrap(), None);
        store.save(Role::Viewer).unwrap();

        // A fresh instance simulates a process restart
        let reopened = FileRoleStore::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(Role::Viewer));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"vaultflow-demo-role\""));
        assert!(content.contains("\"viewer\""));
    }

    #[test]
    fn test_file_store_clear_keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vaultflow.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = FileRoleStore::new(&path);
        store.save(Role::Admin).unwrap();
        store.clear().unwrap();

        assert_eq!(store.load().unwrap(), None);
        let value: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["theme"], "dark");
    }

    #[test]
    fn test_file_store_clear_without_file() {
        let dir = TempDir::new().unwrap();
        let store = FileRoleStore::new(dir.path().join("missing.json"));

        store.clear().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_rejects_unknown_role() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vaultflow.json");
        std::fs::write(&path, r#"{"vaultflow-demo-role":"root"}"#).unwrap();

        assert!(matches!(FileRoleStore::new(&path).load(), Err(Error::UnknownRole(_))));
    }

    #[test]
    fn test_file_store_writes_repair_truncated_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vaultflow.json");
        std::fs::write(&path, r#"{"vaultflow-demo-role": "edi"#).unwrap();

        let store = FileRoleStore::new(&path);
        assert!(matches!(store.load(), Err(Error::Serialization(_))));

        store.save(Role::Viewer).unwrap();
        assert_eq!(store.load().unwrap(), Some(Role::Viewer));

        std::fs::write(&path, "{not json").unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vaultflow.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(matches!(FileRoleStore::new(&path).load(), Err(Error::Storage(_))));
    }
}
