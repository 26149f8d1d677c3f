use crate::error::{LessonError, Result};
use crate::lesson::LessonFactory;
use std::io::Write;
use tracing::{debug, info, warn};

/// Days offered by the built-in curriculum.
pub const DEFAULT_DAYS: &[&str] = &["1", "2"];

/// Registry of every lesson compiled into the program.
///
/// The catalog holds a fixed list of [`LessonFactory`] entries and answers two
/// questions: which lessons belong to a day, and how to run one of them. The
/// registration list is never mutated after construction, so listings are
/// recomputed on each query and always agree with each other.
///
/// Example
/// ```
/// use lesson_runner::Catalog;
/// let catalog = Catalog::default();
/// let lessons = catalog.list_lessons("1");
/// assert_eq!(lessons, ["Lesson2", "Lesson4"]);
/// catalog.run_lesson("1", "Lesson2", &mut std::io::sink()).unwrap();
/// ```
pub struct Catalog {
    days: Vec<String>,
    lessons: Vec<Box<dyn LessonFactory>>,
}

impl Catalog {
    /// Create a catalog from a custom set of lesson factories, offering the default days.
    pub fn new(lessons: Vec<Box<dyn LessonFactory>>) -> Self {
        Self {
            days: DEFAULT_DAYS.iter().map(|d| d.to_string()).collect(),
            lessons,
        }
    }

    /// Replace the list of days offered to the user.
    pub fn with_days<I, S>(mut self, days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Days the curriculum offers, in the order they were configured.
    pub fn days(&self) -> &[String] {
        &self.days
    }

    /// Whether `day` is one of the offered days.
    pub fn is_known_day(&self, day: &str) -> bool {
        self.days.iter().any(|d| d == day)
    }

    /// Names of the lessons of `day`, sorted and without duplicates.
    ///
    /// Any label is accepted; a day with no lessons yields an empty list.
    pub fn list_lessons(&self, day: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .lessons
            .iter()
            .filter(|f| f.belongs_to(day))
            .map(|f| f.name().to_string())
            .collect();
        names.sort();
        names.dedup();
        debug!(day, count = names.len(), "listed lessons");
        names
    }

    /// Build the lesson `name` of `day` and run it, writing its output to `stdout`.
    ///
    /// `name` must match exactly. Nothing runs when no lesson matches, or when
    /// more than one does: either the same type was registered twice, or the
    /// loose day match pulls in a same-named lesson from another day (day "1"
    /// also covers `day12`).
    pub fn run_lesson(&self, day: &str, name: &str, stdout: &mut dyn Write) -> Result<()> {
        let mut matches = self
            .lessons
            .iter()
            .filter(|f| f.belongs_to(day) && f.name() == name);

        let factory = match (matches.next(), matches.count()) {
            (Some(factory), 0) => factory,
            (Some(_), rest) => {
                return Err(LessonError::Ambiguous {
                    day: day.to_string(),
                    name: name.to_string(),
                    count: rest + 1,
                });
            }
            (None, _) => {
                warn!(day, lesson = name, "lesson not found");
                return Err(LessonError::NotFound {
                    day: day.to_string(),
                    name: name.to_string(),
                });
            }
        };

        debug!(namespace = factory.namespace(), "dispatching lesson");
        info!(day, lesson = name, "running lesson");
        factory
            .create()
            .run(stdout)
            .map_err(|source| LessonError::Failed {
                name: name.to_string(),
                source,
            })?;
        info!(day, lesson = name, "lesson finished");
        Ok(())
    }
}

impl Default for Catalog {
    /// Catalog with every lesson shipped in [`crate::lessons`].
    fn default() -> Self {
        Self::new(crate::lessons::all())
    }
}
