//! A small console trainer that runs exercises from a fixed curriculum.
//!
//! Lessons are grouped by day. Each lesson is a type implementing
//! [`lesson::Lesson`], declared inside a `dayN` module under [`lessons`] and
//! registered in [`lessons::all`]. The [`Catalog`] lists the lessons of a day in
//! name order and runs one of them by name; the [`console`] module drives the
//! interactive pick-a-day, pick-a-lesson flow on top of it.

pub mod console;
pub mod error;
pub mod lesson;
pub mod lessons;
pub mod logger;
mod registry;

/// Just a convenient re-export of the lesson registry.
///
/// See [`Catalog`] for listing and running lessons.
pub use registry::{Catalog, DEFAULT_DAYS};

pub use error::LessonError;
