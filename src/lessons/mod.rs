//! The built-in curriculum.
//!
//! Every lesson lives in a `dayN` module; the module path is what puts it on
//! that day's menu. To add a lesson, implement [`Lesson`](crate::lesson::Lesson)
//! for a `Default` type in the right day module and add its factory to [`all`].

use crate::lesson::{Factory, LessonFactory};
use std::fmt::Display;
use std::io::{self, Write};

pub mod day1;
pub mod day2;

/// Registration list of every lesson shipped with the program.
pub fn all() -> Vec<Box<dyn LessonFactory>> {
    let mut lessons: Vec<Box<dyn LessonFactory>> = vec![
        Box::new(Factory::<day1::Lesson2>::default()),
        Box::new(Factory::<day1::Lesson4>::default()),
    ];
    lessons.extend(day2::all());
    lessons
}

/// Write every element of `items` on its own line.
pub fn print_array<I>(stdout: &mut dyn Write, items: I) -> io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(stdout, "{}", item)?;
    }
    Ok(())
}
