use anyhow::Result;
use std::io::Write;

/// A single exercise of the curriculum.
///
/// Lessons are stateless: a fresh value is built with [`Default`] right before
/// [`Lesson::run`] and dropped as soon as it returns. The day a lesson belongs to
/// is not a field, it is taken from the module the lesson is declared in, so
/// `namespace` should almost always be implemented as `module_path!()`.
pub trait Lesson: Default {
    /// Name shown in the menu, e.g. "Lesson4".
    fn name() -> &'static str;

    /// Module path of the declaring module, e.g. "lesson_runner::lessons::day1::lesson4".
    fn namespace() -> &'static str;

    /// Runs the exercise, writing any console output to `stdout`.
    fn run(self, stdout: &mut dyn Write) -> Result<()>;
}

/// Object-safe counterpart of [`Lesson`] used once a lesson has been built.
///
/// Implemented for every [`Lesson`] through a blanket impl.
pub trait ExecutableLesson {
    fn run(self: Box<Self>, stdout: &mut dyn Write) -> Result<()>;
}

impl<T: Lesson> ExecutableLesson for T {
    fn run(self: Box<Self>, stdout: &mut dyn Write) -> Result<()> {
        <T as Lesson>::run(*self, stdout)
    }
}

/// Registration entry describing one lesson and knowing how to build it.
pub trait LessonFactory {
    /// Display name of the lesson this factory builds.
    fn name(&self) -> &'static str;

    /// Module path the lesson was declared in.
    fn namespace(&self) -> &'static str;

    /// Build a fresh lesson instance.
    fn create(&self) -> Box<dyn ExecutableLesson>;

    /// Whether the lesson belongs to `day`.
    ///
    /// Matching is a substring test of `day{day}` against the namespace, so day
    /// "1" also accepts a `day10` module.
    fn belongs_to(&self, day: &str) -> bool {
        self.namespace()
            .to_ascii_lowercase()
            .contains(&format!("day{}", day.to_ascii_lowercase()))
    }
}

/// Generic factory for any [`Lesson`] type.
pub struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T: Lesson + 'static> LessonFactory for Factory<T> {
    fn name(&self) -> &'static str {
        T::name()
    }

    fn namespace(&self) -> &'static str {
        T::namespace()
    }

    fn create(&self) -> Box<dyn ExecutableLesson> {
        Box::new(T::default())
    }
}
