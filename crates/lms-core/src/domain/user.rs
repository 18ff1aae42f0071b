//! User Profile
//!
//! Registered-user record and the guest-data export embedded in it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::milestone::MilestonesMap;
use super::note::NotesMap;
use super::sandbox::SandboxCodeMap;
use super::video_progress::VideoProgressMap;

/// Identity handed over by an auth provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    /// Display name from provider metadata
    #[serde(default)]
    pub name: Option<String>,
}

/// Stored profile; its presence means the app is not in guest mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    /// Snapshot of guest-mode storage taken at registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_data: Option<Box<ExportedData>>,
    pub registered_at: DateTime<Utc>,
}

impl UserData {
    pub fn register(user: &AuthUser, guest_data: Option<ExportedData>, registered_at: DateTime<Utc>) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone().unwrap_or_default(),
            guest_data: guest_data.map(Box::new),
            registered_at,
        }
    }

    /// Name shown in the navigation bar; the email when no name was given
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// Every stored collection as one document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedData {
    pub user_data: Option<UserData>,
    #[serde(default)]
    pub notes: NotesMap,
    #[serde(default)]
    pub video_progress: VideoProgressMap,
    #[serde(default)]
    pub milestones: MilestonesMap,
    #[serde(default)]
    pub sandbox_code: SandboxCodeMap,
}

impl ExportedData {
    pub fn is_empty(&self) -> bool {
        self.user_data.is_none()
            && self.notes.is_empty()
            && self.video_progress.is_empty()
            && self.milestones.is_empty()
            && self.sandbox_code.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_register_uses_empty_name_without_metadata() {
        let user = AuthUser {
            id: "u1".to_string(),
            email: "a@b.c".to_string(),
            name: None,
        };
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap();
        let data = UserData::register(&user, Some(ExportedData::default()), at);
        assert_eq!(data.name, "");
        assert!(data.guest_data.as_ref().is_some_and(|g| g.is_empty()));

        let json = serde_json::to_value(&data).unwrap();
        assert!(json.get("registeredAt").is_some());
        assert!(json.get("guestData").is_some());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 9, 0, 0).unwrap();
        let mut user = AuthUser {
            id: "u1".to_string(),
            email: "learner@daiel.dev".to_string(),
            name: None,
        };
        assert_eq!(UserData::register(&user, None, at).display_name(), "learner@daiel.dev");

        user.name = Some("  ".to_string());
        assert_eq!(UserData::register(&user, None, at).display_name(), "learner@daiel.dev");

        user.name = Some("Ada".to_string());
        assert_eq!(UserData::register(&user, None, at).display_name(), "Ada");
    }
}
