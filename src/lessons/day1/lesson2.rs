use crate::lesson::Lesson;
use anyhow::Result;
use std::io::Write;

#[derive(Default)]
pub struct Lesson2;

impl Lesson for Lesson2 {
    fn name() -> &'static str {
        "Lesson2"
    }

    fn namespace() -> &'static str {
        module_path!()
    }

    fn run(self, _stdout: &mut dyn Write) -> Result<()> {
        // your code
        Ok(())
    }
}
