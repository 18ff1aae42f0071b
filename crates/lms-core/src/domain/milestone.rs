//! Milestone Entity
//!
//! Completion markers recorded per course.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_id: Option<u32>,
    pub completed_at: DateTime<Utc>,
}

impl Milestone {
    pub fn from_draft(draft: MilestoneDraft, id: String, completed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            module_id: draft.module_id,
            completed_at,
        }
    }
}

impl Entity for Milestone {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Milestones keyed by `"course_{courseId}"`
pub type MilestonesMap = BTreeMap<String, Vec<Milestone>>;
