pub mod inspect;
pub mod session;

use anyhow::Result;
use std::path::{Path, PathBuf};
use vaultflow_core::config::{RoleStoreKind, VaultflowConfig};

/// Role store used when the configuration keeps the role in memory
pub const DEFAULT_STORE_PATH: &str = ".vaultflow/session.json";

/// Load and validate configuration for a CLI invocation.
///
/// An in-memory role store would forget the role when the process exits, so
/// the CLI always persists to a file.
pub fn load_config(path: &Path, store: Option<PathBuf>) -> Result<VaultflowConfig> {
    let mut config = VaultflowConfig::load_from(path)?;

    if let Some(store) = store {
        config.auth.role_store_path = Some(store.to_string_lossy().into_owned());
    }
    if config.auth.role_store == RoleStoreKind::Memory {
        config.auth.role_store = RoleStoreKind::File;
    }
    if config.auth.role_store_path.is_none() {
        config.auth.role_store_path = Some(DEFAULT_STORE_PATH.to_string());
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_always_uses_file_store() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load_config(&tmp.path().join("missing.toml"), None).unwrap();

        assert_eq!(config.auth.role_store, RoleStoreKind::File);
        assert_eq!(config.auth.role_store_path.as_deref(), Some(DEFAULT_STORE_PATH));
    }

    #[test]
    fn store_flag_overrides_config() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("vaultflow.toml");
        std::fs::write(&config_path, "[auth]\nrole_store = \"file\"\nrole_store_path = \"a.json\"\n")
            .unwrap();

        let store = tmp.path().join("b.json");
        let config = load_config(&config_path, Some(store.clone())).unwrap();
        assert_eq!(config.auth.role_store_path, Some(store.to_string_lossy().into_owned()));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let config_path = tmp.path().join("vaultflow.toml");
        std::fs::write(&config_path, "[auth]\nlanding_route = \"dashboard\"\n").unwrap();

        assert!(load_config(&config_path, None).is_err());
    }
}
