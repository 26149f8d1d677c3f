use crate::lesson::Lesson;
use crate::lessons::print_array;
use anyhow::Result;
use std::io::Write;

/// Arrays and a first look at iterating over them.
#[derive(Default)]
pub struct Lesson4;

impl Lesson for Lesson4 {
    fn name() -> &'static str {
        "Lesson4"
    }

    fn namespace() -> &'static str {
        module_path!()
    }

    fn run(self, stdout: &mut dyn Write) -> Result<()> {
        // your code; replace the sample array with your own
        let numbers = [1, 2, 3];

        // print_array is generic, but you don't need to worry about that yet
        print_array(stdout, numbers)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson4_prints_sample_array() {
        let mut out = Vec::new();
        Lesson4.run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2\n3\n");
    }

    #[test]
    fn test_lesson4_is_a_day1_lesson() {
        assert!(Lesson4::namespace().ends_with("lessons::day1::lesson4"));
    }
}
