//! UI Components
//!
//! Reusable Leptos components.

mod annotations;
mod category_selector;
mod course_card;
mod course_player;
mod dashboard;
mod delete_confirm_button;
mod nav_bar;
mod note_item;
mod progress_bar;
mod track_detail;

pub use annotations::TimestampedAnnotations;
pub use category_selector::CategorySelector;
pub use course_card::CourseCard;
pub use course_player::CoursePlayer;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use nav_bar::NavBar;
pub use note_item::NoteItem;
pub use progress_bar::ProgressBar;
pub use track_detail::TrackDetail;
