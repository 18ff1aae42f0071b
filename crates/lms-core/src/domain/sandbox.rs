//! Sandbox Code
//!
//! Code editor snapshots keyed by sandbox id.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SandboxCode {
    pub code: String,
    pub saved_at: DateTime<Utc>,
}

pub type SandboxCodeMap = BTreeMap<String, SandboxCode>;
