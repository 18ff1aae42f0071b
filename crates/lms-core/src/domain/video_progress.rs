//! Video Progress
//!
//! Last known playback position per video. Last write wins.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position report coming from the player
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProgressUpdate {
    pub current_time: f64,
    pub duration: f64,
    /// Percent watched
    pub progress: f64,
}

impl VideoProgressUpdate {
    /// Percent is zero until the duration is known
    pub fn from_playback(current_time: f64, duration: f64) -> Self {
        let progress = if duration > 0.0 {
            current_time / duration * 100.0
        } else {
            0.0
        };
        Self {
            current_time,
            duration,
            progress,
        }
    }
}

/// Stored progress record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProgress {
    pub current_time: f64,
    pub duration: f64,
    pub progress: f64,
    pub last_watched: DateTime<Utc>,
}

impl VideoProgress {
    pub fn from_update(update: VideoProgressUpdate, last_watched: DateTime<Utc>) -> Self {
        Self {
            current_time: update.current_time,
            duration: update.duration,
            progress: update.progress,
            last_watched,
        }
    }
}

/// Progress keyed by video id
pub type VideoProgressMap = BTreeMap<String, VideoProgress>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent() {
        let update = VideoProgressUpdate::from_playback(30.0, 120.0);
        assert_eq!(update.progress, 25.0);
        let unknown = VideoProgressUpdate::from_playback(30.0, 0.0);
        assert_eq!(unknown.progress, 0.0);
    }
}
