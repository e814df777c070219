//! User profiles and the demo user directory

use crate::rbac::Role;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Authenticated user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).single().unwrap_or_default()
}

/// Fixed demo profile for `role`
///
/// Login, role switching and session restore all hand out these records, so a
/// role always maps to the same user.
pub fn demo_user(role: Role) -> UserProfile {
    match role {
        Role::Admin => UserProfile {
            id: "user_001".to_string(),
            email: "cfo@vaultflow.com".to_string(),
            full_name: "Sarah Johnson".to_string(),
            avatar_url: None,
            role,
            department: Some("Executive".to_string()),
            created_at: date(2023, 1, 15),
            updated_at: date(2024, 1, 15),
        },
        Role::Editor => UserProfile {
            id: "user_002".to_string(),
            email: "accountant@vaultflow.com".to_string(),
            full_name: "Mike Chen".to_string(),
            avatar_url: None,
            role,
            department: Some("Finance".to_string()),
            created_at: date(2023, 3, 20),
            updated_at: date(2024, 1, 10),
        },
        Role::Viewer => UserProfile {
            id: "user_003".to_string(),
            email: "employee@vaultflow.com".to_string(),
            full_name: "Lisa Park".to_string(),
            avatar_url: None,
            role,
            department: Some("Engineering".to_string()),
            created_at: date(2023, 6, 1),
            updated_at: date(2024, 1, 5),
        },
    }
}
