//! Playback State
//!
//! State behind the custom transport controls. The media element does the
//! decoding; this tracks what the controls show and what gets reported.

use crate::domain::VideoProgressUpdate;
use crate::timestamp::{current_timestamp, format_clock, timestamp_to_seconds};

/// Rates offered by the speed selector
pub const PLAYBACK_RATES: [f64; 6] = [0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

pub const DEFAULT_VOLUME: f64 = 0.8;

/// What a progress report from the media element produces
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressTick {
    /// `HH:MM:SS` for the note form
    pub timestamp: String,
    pub update: VideoProgressUpdate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    /// Seconds, zero until metadata loads
    pub duration: f64,
    pub played_seconds: f64,
    /// Set while the user drags the seek bar; progress reports are ignored
    pub seeking: bool,
    pub volume: f64,
    pub playback_rate: f64,
}

impl PlaybackState {
    pub fn new() -> Self {
        Self {
            playing: false,
            duration: 0.0,
            played_seconds: 0.0,
            seeking: false,
            volume: DEFAULT_VOLUME,
            playback_rate: 1.0,
        }
    }

    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Media started on its own (autoplay, external control)
    pub fn start(&mut self) {
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn set_duration(&mut self, duration: f64) {
        self.duration = if duration.is_finite() && duration > 0.0 { duration } else { 0.0 };
    }

    /// Record a position report. `None` while seeking.
    pub fn on_progress(&mut self, played_seconds: f64) -> Option<ProgressTick> {
        if self.seeking {
            return None;
        }
        self.played_seconds = played_seconds;
        Some(ProgressTick {
            timestamp: current_timestamp(played_seconds),
            update: VideoProgressUpdate::from_playback(played_seconds, self.duration),
        })
    }

    pub fn begin_seek(&mut self) {
        self.seeking = true;
    }

    pub fn end_seek(&mut self) {
        self.seeking = false;
    }

    /// Move the playhead; returns the position the media element should seek to
    pub fn seek(&mut self, seconds: f64) -> f64 {
        let mut target = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        if self.duration > 0.0 {
            target = target.min(self.duration);
        }
        self.played_seconds = target;
        target
    }

    /// Seek to an `HH:MM:SS` / `MM:SS` note timestamp
    pub fn seek_to_timestamp(&mut self, timestamp: &str) -> f64 {
        self.seek(timestamp_to_seconds(timestamp) as f64)
    }

    pub fn set_volume(&mut self, volume: f64) -> f64 {
        self.volume = if volume.is_finite() { volume.clamp(0.0, 1.0) } else { DEFAULT_VOLUME };
        self.volume
    }

    /// Only rates from `PLAYBACK_RATES` are accepted
    pub fn set_playback_rate(&mut self, rate: f64) -> bool {
        if PLAYBACK_RATES.iter().any(|r| (r - rate).abs() < f64::EPSILON) {
            self.playback_rate = rate;
            true
        } else {
            false
        }
    }

    pub fn current_timestamp(&self) -> String {
        current_timestamp(self.played_seconds)
    }

    /// `played / duration` label, e.g. `1:05 / 10:00`
    pub fn time_display(&self) -> String {
        format!("{} / {}", format_clock(self.played_seconds), format_clock(self.duration))
    }
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_ignored_while_seeking() {
        let mut state = PlaybackState::new();
        state.set_duration(200.0);
        let tick = state.on_progress(50.0).unwrap();
        assert_eq!(tick.timestamp, "00:00:50");
        assert_eq!(tick.update.progress, 25.0);

        state.begin_seek();
        assert!(state.on_progress(80.0).is_none());
        assert_eq!(state.played_seconds, 50.0);
        state.end_seek();
        assert!(state.on_progress(80.0).is_some());
    }

    #[test]
    fn test_seek_clamps_to_duration() {
        let mut state = PlaybackState::new();
        assert_eq!(state.seek(500.0), 500.0); // unknown duration
        state.set_duration(120.0);
        assert_eq!(state.seek(500.0), 120.0);
        assert_eq!(state.seek(-3.0), 0.0);
        assert_eq!(state.seek_to_timestamp("01:30"), 90.0);
        assert_eq!(state.seek_to_timestamp("bogus"), 0.0);
    }

    #[test]
    fn test_note_seek_updates_position() {
        let mut state = PlaybackState::new();
        state.set_duration(3600.0);
        assert_eq!(state.seek_to_timestamp("00:12:05"), 725.0);
        assert_eq!(state.current_timestamp(), "00:12:05");
        // past the end clamps, oversized fields read as zero
        assert_eq!(state.seek_to_timestamp("02:00:00"), 3600.0);
        assert_eq!(state.seek_to_timestamp("9999999999999999:00:00"), 0.0);
        assert_eq!(state.played_seconds, 0.0);
    }

    #[test]
    fn test_volume_and_rate() {
        let mut state = PlaybackState::new();
        assert_eq!(state.volume, DEFAULT_VOLUME);
        assert_eq!(state.set_volume(1.7), 1.0);
        assert_eq!(state.set_volume(-0.2), 0.0);
        assert!(state.set_playback_rate(1.5));
        assert!(!state.set_playback_rate(3.0));
        assert_eq!(state.playback_rate, 1.5);
    }

    #[test]
    fn test_toggle_and_display() {
        let mut state = PlaybackState::new();
        assert!(state.toggle_play());
        assert!(!state.toggle_play());
        state.set_duration(f64::NAN);
        assert_eq!(state.duration, 0.0);
        state.set_duration(600.0);
        state.on_progress(65.0);
        assert_eq!(state.time_display(), "1:05 / 10:00");
    }
}
