//! Timestamp Codec
//!
//! Conversion between playback seconds and `HH:MM:SS` strings used by the
//! player and the annotation list.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

static STRICT_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2}):(\d{2})$").expect("valid timestamp regex"));

/// Whole-second playback position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Floors fractional seconds. Zero, negative and non-finite input map to zero.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_finite() && secs > 0.0 {
            Self(secs.floor() as u64)
        } else {
            Self::ZERO
        }
    }

    /// Accepts `H:M:S` and `M:S`; anything else, including fields too large
    /// to add up, is zero.
    pub fn parse_lenient(s: &str) -> Self {
        let parts: Option<Vec<u64>> = s.split(':').map(|p| p.trim().parse::<u64>().ok()).collect();
        let total = match parts.as_deref() {
            Some(&[h, m, s]) => h
                .checked_mul(3600)
                .and_then(|secs| secs.checked_add(m.checked_mul(60)?))
                .and_then(|secs| secs.checked_add(s)),
            Some(&[m, s]) => m.checked_mul(60).and_then(|secs| secs.checked_add(s)),
            _ => None,
        };
        total.map(Self).unwrap_or(Self::ZERO)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn hours(&self) -> u64 {
        self.0 / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.0 % 3600) / 60
    }

    pub fn seconds(&self) -> u64 {
        self.0 % 60
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.seconds())
    }
}

/// Error for strict parsing via `FromStr`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTimestamp(pub String);

impl fmt::Display for InvalidTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid timestamp: {:?}", self.0)
    }
}

impl std::error::Error for InvalidTimestamp {}

impl FromStr for Timestamp {
    type Err = InvalidTimestamp;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_timestamp(s) {
            return Err(InvalidTimestamp(s.to_string()));
        }
        Ok(Self::parse_lenient(s))
    }
}

/// Seconds to `HH:MM:SS`
pub fn seconds_to_timestamp(seconds: f64) -> String {
    Timestamp::from_secs_f64(seconds).to_string()
}

/// `HH:MM:SS` or `MM:SS` to seconds. Malformed input is zero.
pub fn timestamp_to_seconds(timestamp: &str) -> u64 {
    Timestamp::parse_lenient(timestamp).as_secs()
}

/// Running position label for the player
pub fn current_timestamp(current_time: f64) -> String {
    seconds_to_timestamp(current_time)
}

/// Display form: a zero hour field is dropped (`00:04:05` -> `04:05`).
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return "00:00".to_string();
    }
    let parts: Vec<&str> = timestamp.split(':').collect();
    match parts.as_slice() {
        ["00", m, s] => format!("{}:{}", m, s),
        _ => timestamp.to_string(),
    }
}

/// Strict `H:MM:SS` / `HH:MM:SS` check with minutes and seconds below 60
pub fn is_valid_timestamp(timestamp: &str) -> bool {
    let Some(caps) = STRICT_TIMESTAMP.captures(timestamp) else {
        return false;
    };
    let minutes: u32 = caps[2].parse().unwrap_or(60);
    let seconds: u32 = caps[3].parse().unwrap_or(60);
    minutes < 60 && seconds < 60
}

/// Player clock label, `M:SS` with unbounded minutes
pub fn format_clock(seconds: f64) -> String {
    let ts = Timestamp::from_secs_f64(seconds);
    format!("{}:{:02}", ts.as_secs() / 60, ts.seconds())
}
