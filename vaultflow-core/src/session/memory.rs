//! In-memory role storage
//!
//! Thread-safe HashMap behind an RwLock. Values are lost when the process
//! exits; use [`FileRoleStore`](super::FileRoleStore) to keep them.

use super::store::{RoleStore, DEMO_ROLE_KEY};
use crate::error::{Error, Result};
use crate::rbac::Role;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory role store
///
/// Clones share the same map, so several managers can observe one store.
#[derive(Clone)]
pub struct MemoryRoleStore {
    key: String,
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryRoleStore {
    pub fn new() -> Self {
        Self::with_key(DEMO_ROLE_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into(), values: Arc::new(RwLock::new(HashMap::new())) }
    }

    /// Raw stored value, bypassing role parsing
    pub fn raw(&self) -> Option<String> {
        self.values.read().ok().and_then(|values| values.get(&self.key).cloned())
    }

    /// Store a raw value, e.g. to simulate a corrupted entry
    pub fn set_raw(&self, value: impl Into<String>) -> Result<()> {
        let mut values = self.values.write().map_err(|_| poisoned())?;
        values.insert(self.key.clone(), value.into());
        Ok(())
    }
}

impl Default for MemoryRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> Error {
    Error::Storage("role store lock poisoned".to_string())
}

impl RoleStore for MemoryRoleStore {
    fn load(&self) -> Result<Option<Role>> {
        let values = self.values.read().map_err(|_| poisoned())?;
        values.get(&self.key).map(|raw| raw.parse::<Role>()).transpose()
    }

    fn save(&self, role: Role) -> Result<()> {
        self.set_raw(role.as_str())
    }

    fn clear(&self) -> Result<()> {
        let mut values = self.values.write().map_err(|_| poisoned())?;
        values.remove(&self.key);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
