//! Commands that act on the persisted demo session

use anyhow::Result;
use vaultflow_core::config::VaultflowConfig;
use vaultflow_core::rbac::{role_options, PermissionGate, Role};
use vaultflow_core::session::{SessionManager, SessionState};

fn open(config: &VaultflowConfig) -> Result<SessionManager> {
    log::debug!(
        "Opening role store {}",
        config.auth.role_store_path.as_deref().unwrap_or("(memory)")
    );
    Ok(SessionManager::from_config(&config.auth)?)
}

fn describe(state: &SessionState) -> String {
    match &state.user {
        Some(user) => format!(
            "{} <{}> {} ({})",
            user.full_name,
            user.email,
            user.role.display_name(),
            user.department.as_deref().unwrap_or("-")
        ),
        None => "not signed in".to_string(),
    }
}

pub async fn login(config: &VaultflowConfig, identifier: &str, password: &str) -> Result<String> {
    let session = open(config)?;
    session.login(identifier, password).await?;
    Ok(format!("Signed in as {}", describe(&session.current())))
}

pub fn switch(config: &VaultflowConfig, role: Role) -> Result<String> {
    let session = open(config)?;
    session.switch_role(role);

    let options: Vec<String> = role_options(session.role())
        .into_iter()
        .map(|option| format!("{} {}", if option.current { "*" } else { " " }, option.label))
        .collect();
    Ok(format!("Now viewing as {}\n{}", describe(&session.current()), options.join("\n")))
}

/// Resumes the persisted role; with nothing persisted this is the default role
pub async fn whoami(config: &VaultflowConfig) -> Result<String> {
    let session = open(config)?;
    let state = session.restore().await?;
    Ok(describe(&state))
}

pub async fn logout(config: &VaultflowConfig) -> Result<String> {
    let session = open(config)?;
    session.restore().await?;
    session.logout().await?;
    Ok(describe(&session.current()))
}

pub async fn gate(config: &VaultflowConfig, permission: &str) -> Result<String> {
    let session = open(config)?;
    let state = session.restore().await?;
    let gate = PermissionGate::from_token(permission);

    let verdict = if gate.permits(session.catalog(), &state) { "rendered" } else { "hidden" };
    log::debug!("Gate '{}' {} for role {:?}", gate.token(), verdict, state.role());
    Ok(format!("{} for {}", verdict, describe(&state)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, Once};
    use vaultflow_core::config::RoleStoreKind;

    static RECORDS: Mutex<Vec<String>> = Mutex::new(Vec::new());

    struct CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            RECORDS.lock().unwrap().push(record.args().to_string());
        }

        fn flush(&self) {}
    }

    fn capture_logs() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            log::set_logger(&CaptureLogger).unwrap();
            log::set_max_level(log::LevelFilter::Debug);
        });
    }

    fn logged(needle: &str) -> bool {
        RECORDS.lock().unwrap().iter().any(|line| line.contains(needle))
    }

    fn config_in(dir: &std::path::Path) -> VaultflowConfig {
        let mut config = VaultflowConfig::default();
        config.auth.role_store = RoleStoreKind::File;
        config.auth.role_store_path = Some(dir.join("session.json").to_string_lossy().into_owned());
        config.auth.login_delay_ms = 0;
        config.auth.logout_delay_ms = 0;
        config.auth.restore_delay_ms = 0;
        config
    }

    #[tokio::test]
    async fn login_persists_between_invocations() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let output = login(&config, "accountant@vaultflow.com", "pw").await.unwrap();
        assert!(output.contains("Mike Chen"));

        let output = whoami(&config).await.unwrap();
        assert!(output.contains("Editor (Accountant)"));
    }

    #[tokio::test]
    async fn switch_changes_gate_outcome() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        let output = switch(&config, Role::Viewer).unwrap();
        assert!(output.contains("* Viewer (Employee)"));
        assert!(gate(&config, "export:reports").await.unwrap().starts_with("hidden"));

        switch(&config, Role::Editor).unwrap();
        assert!(gate(&config, "export:reports").await.unwrap().starts_with("rendered"));
        assert!(gate(&config, "no:such:permission").await.unwrap().starts_with("hidden"));
    }

    #[tokio::test]
    async fn whoami_defaults_to_admin_without_stored_role() {
        let tmp = tempfile::tempdir().unwrap();
        let output = whoami(&config_in(tmp.path())).await.unwrap();
        assert!(output.contains("Sarah Johnson"));
    }

    #[tokio::test]
    async fn logout_clears_session() {
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());

        switch(&config, Role::Viewer).unwrap();
        assert_eq!(logout(&config).await.unwrap(), "not signed in");

        let output = whoami(&config).await.unwrap();
        assert!(output.contains("Sarah Johnson"));
    }

    #[tokio::test]
    async fn gate_logs_store_and_verdict() {
        capture_logs();
        let tmp = tempfile::tempdir().unwrap();
        let config = config_in(tmp.path());
        let store = config.auth.role_store_path.clone().unwrap();

        switch(&config, Role::Viewer).unwrap();
        gate(&config, "manage:users").await.unwrap();

        assert!(logged(&format!("Opening role store {}", store)));
        assert!(logged("Gate 'manage:users' hidden for role Some(Viewer)"));
    }

    #[tokio::test]
    async fn login_rejects_empty_identifier() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(login(&config_in(tmp.path()), "  ", "pw").await.is_err());
    }
}
