//! Storage key names

/// The five document keys, all sharing one namespace prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub user_data: String,
    pub notes: String,
    pub video_progress: String,
    pub milestones: String,
    pub sandbox_code: String,
}

impl StorageKeys {
    pub const DEFAULT_NAMESPACE: &'static str = "daiel";

    pub fn new(namespace: &str) -> Self {
        Self {
            user_data: format!("{}_user_data", namespace),
            notes: format!("{}_notes", namespace),
            video_progress: format!("{}_video_progress", namespace),
            milestones: format!("{}_milestones", namespace),
            sandbox_code: format!("{}_sandbox_code", namespace),
        }
    }

    pub fn all(&self) -> [&str; 5] {
        [
            &self.user_data,
            &self.notes,
            &self.video_progress,
            &self.milestones,
            &self.sandbox_code,
        ]
    }
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMESPACE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let keys = StorageKeys::default();
        assert_eq!(
            keys.all(),
            ["daiel_user_data", "daiel_notes", "daiel_video_progress", "daiel_milestones", "daiel_sandbox_code"]
        );
    }
}
