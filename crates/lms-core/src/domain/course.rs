//! Course Entity
//!
//! Learning tracks and their modules, plus progress aggregation.

use serde::{Deserialize, Serialize};

/// Static description of a learning track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// The five core learning tracks
pub const LEARNING_TRACKS: [TrackInfo; 5] = [
    TrackInfo {
        id: "web-dev",
        name: "Web Development",
        description: "Master HTML, CSS, JavaScript, and React",
        color: "#FF6B6B",
    },
    TrackInfo {
        id: "python-ml",
        name: "Python & Machine Learning",
        description: "Learn Python, NumPy, Pandas, and ML fundamentals",
        color: "#4ECDC4",
    },
    TrackInfo {
        id: "graphics-design",
        name: "Graphics & Design",
        description: "UI/UX, Figma, design principles",
        color: "#FFE66D",
    },
    TrackInfo {
        id: "kdp-publishing",
        name: "KDP Publishing",
        description: "Self-publishing strategies and tools",
        color: "#95E1D3",
    },
    TrackInfo {
        id: "digital-marketing",
        name: "Digital Marketing",
        description: "SEO, content marketing, analytics",
        color: "#A8E6CF",
    },
];

/// Module titles every track starts with (ids 1..=5)
pub const DEFAULT_MODULE_TITLES: [&str; 5] = [
    "Introduction",
    "Fundamentals",
    "Advanced Concepts",
    "Project Build",
    "Assessment",
];

/// A lesson inside a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    pub title: String,
    /// Percent watched, 0-100
    pub progress: f64,
}

impl Module {
    pub fn new(id: u32, title: impl Into<String>, progress: f64) -> Self {
        Self {
            id,
            title: title.into(),
            progress,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.progress >= 100.0
    }

    /// Rounded percent for labels
    pub fn display_progress(&self) -> u8 {
        self.progress.round().clamp(0.0, 100.0) as u8
    }
}

/// A learning track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub description: String,
    pub color: String,
    /// Percent complete, 0-100
    pub progress: u8,
    pub modules: Vec<Module>,
}

impl Course {
    pub fn from_track(track: &TrackInfo) -> Self {
        Self {
            id: track.id.to_string(),
            name: track.name.to_string(),
            description: track.description.to_string(),
            color: track.color.to_string(),
            progress: 0,
            modules: Vec::new(),
        }
    }

    /// Copy of this course with one module per title, ids starting at 1
    pub fn with_modules<S: AsRef<str>>(&self, titles: &[S], mut progress_for: impl FnMut(u32) -> f64) -> Self {
        let modules = titles
            .iter()
            .zip(1u32..)
            .map(|(title, id)| Module::new(id, title.as_ref(), progress_for(id)))
            .collect();
        Self {
            modules,
            ..self.clone()
        }
    }

    pub fn set_progress(&mut self, percentage: i32) {
        self.progress = percentage.clamp(0, 100) as u8;
    }

    /// Progress derived from modules
    pub fn module_progress(&self) -> u8 {
        course_progress(&self.modules)
    }

    pub fn find_module(&self, module_id: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == module_id)
    }
}

/// The course list the dashboard starts with
pub fn learning_tracks() -> Vec<Course> {
    LEARNING_TRACKS.iter().map(Course::from_track).collect()
}

/// Rounded arithmetic mean of module progress; zero modules is 0
pub fn course_progress(modules: &[Module]) -> u8 {
    if modules.is_empty() {
        return 0;
    }
    let total: f64 = modules.iter().map(|m| m.progress).sum();
    (total / modules.len() as f64).round().clamp(0.0, 100.0) as u8
}

/// One "Simulate Progress" step: +10, capped at 100
pub fn simulated_progress(current: u8) -> u8 {
    current.saturating_add(10).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modules(values: &[f64]) -> Vec<Module> {
        values
            .iter()
            .zip(1u32..)
            .map(|(p, id)| Module::new(id, format!("Module {}", id), *p))
            .collect()
    }

    #[test]
    fn test_course_progress_is_rounded_mean() {
        assert_eq!(course_progress(&modules(&[10.0, 20.0, 30.0])), 20);
        assert_eq!(course_progress(&modules(&[0.0, 1.0])), 1); // 0.5 rounds up
        assert_eq!(course_progress(&modules(&[33.3, 33.3, 33.4])), 33);
        assert_eq!(course_progress(&modules(&[100.0, 100.0])), 100);
    }

    #[test]
    fn test_course_progress_empty() {
        assert_eq!(course_progress(&[]), 0);
    }

    #[test]
    fn test_simulated_progress_caps() {
        assert_eq!(simulated_progress(course_progress(&modules(&[50.0]))), 60);
        assert_eq!(simulated_progress(95), 100);
        assert_eq!(simulated_progress(0), 10);
    }

    #[test]
    fn test_learning_tracks() {
        let tracks = learning_tracks();
        assert_eq!(tracks.len(), 5);
        assert_eq!(tracks[0].id, "web-dev");
        assert!(tracks.iter().all(|c| c.progress == 0 && c.modules.is_empty()));
    }

    #[test]
    fn test_with_modules_assigns_ids() {
        let course = Course::from_track(&LEARNING_TRACKS[1]);
        let detailed = course.with_modules(&DEFAULT_MODULE_TITLES, |id| id as f64 * 10.0);
        assert_eq!(detailed.modules.len(), 5);
        assert_eq!(detailed.modules[0].title, "Introduction");
        assert_eq!(detailed.find_module(5).map(|m| m.progress), Some(50.0));
        assert_eq!(detailed.module_progress(), 30);
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut course = Course::from_track(&LEARNING_TRACKS[0]);
        course.set_progress(140);
        assert_eq!(course.progress, 100);
        course.set_progress(-5);
        assert_eq!(course.progress, 0);
    }
}
