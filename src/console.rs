use crate::Catalog;
use anyhow::{Context, Result, bail};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::Write;
use thiserror::Error;
use tracing::debug;

/// Invalid answer to the lesson prompt.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("not a lesson number: {0:?}")]
    NotANumber(String),

    #[error("no lesson number {choice}, pick one between 1 and {len}")]
    OutOfRange { choice: usize, len: usize },
}

/// Resolve the user's answer to a menu entry.
///
/// `input` is either an exact lesson name or a 1-based menu number.
pub fn resolve_choice<'a>(lessons: &'a [String], input: &str) -> Result<&'a str, MenuError> {
    let input = input.trim();
    if let Some(name) = lessons.iter().find(|l| *l == input) {
        return Ok(name.as_str());
    }
    let choice: usize = input
        .parse()
        .map_err(|_| MenuError::NotANumber(input.to_string()))?;
    match choice.checked_sub(1).and_then(|i| lessons.get(i)) {
        Some(name) => Ok(name.as_str()),
        None => Err(MenuError::OutOfRange {
            choice,
            len: lessons.len(),
        }),
    }
}

/// Print the day header followed by the numbered lesson menu.
pub fn write_menu(stdout: &mut dyn Write, day: &str, lessons: &[String]) -> std::io::Result<()> {
    writeln!(stdout, "Day {}", day)?;
    for (i, lesson) in lessons.iter().enumerate() {
        writeln!(stdout, "{}. {}", i + 1, lesson)?;
    }
    Ok(())
}

/// Print the menu of every offered day.
pub fn write_catalog(stdout: &mut dyn Write, catalog: &Catalog) -> std::io::Result<()> {
    for day in catalog.days() {
        write_menu(stdout, day, &catalog.list_lessons(day))?;
    }
    Ok(())
}

/// Source of user answers for the interactive prompts.
///
/// Returns `None` when the user gave up (end of input or Ctrl-C).
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Terminal-backed [`LineSource`] with line editing and history.
pub struct Terminal {
    editor: DefaultEditor,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new().context("can't open terminal")?;
        Ok(Self { editor })
    }
}

impl LineSource for Terminal {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.editor.add_history_entry(line.as_str())?;
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err).context("can't read from terminal"),
        }
    }
}

/// One pass through the pick-a-day, pick-a-lesson flow.
///
/// Answers given up front (from the command line) skip the matching prompt and
/// are validated strictly; answers typed at a prompt are asked again until valid.
pub struct Session<'a, L> {
    catalog: &'a Catalog,
    input: L,
}

impl<'a, L: LineSource> Session<'a, L> {
    pub fn new(catalog: &'a Catalog, input: L) -> Self {
        Self { catalog, input }
    }

    /// Run the flow, writing menus and lesson output to `stdout`.
    pub fn run(
        &mut self,
        day: Option<&str>,
        lesson: Option<&str>,
        stdout: &mut dyn Write,
    ) -> Result<()> {
        let day = match day {
            Some(day) if self.catalog.is_known_day(day) => day.to_string(),
            Some(day) => bail!(
                "unknown day {:?}, expected one of: {}",
                day,
                self.catalog.days().join(", ")
            ),
            None => match self.choose_day()? {
                Some(day) => day,
                None => return Ok(()),
            },
        };

        let lessons = self.catalog.list_lessons(&day);
        write_menu(stdout, &day, &lessons)?;
        if lessons.is_empty() {
            writeln!(stdout, "No lessons for day {}", day)?;
            return Ok(());
        }

        let name = match lesson {
            Some(answer) => resolve_choice(&lessons, answer)?.to_string(),
            None => match self.choose_lesson(&lessons, stdout)? {
                Some(name) => name,
                None => return Ok(()),
            },
        };

        writeln!(stdout)?;
        self.catalog.run_lesson(&day, &name, stdout)?;
        Ok(())
    }

    fn choose_day(&mut self) -> Result<Option<String>> {
        let prompt = format!("Select a day ({}): ", self.catalog.days().join(", "));
        loop {
            let Some(line) = self.input.read_line(&prompt)? else {
                return Ok(None);
            };
            let day = line.trim();
            if self.catalog.is_known_day(day) {
                return Ok(Some(day.to_string()));
            }
            debug!(day, "rejected day");
        }
    }

    fn choose_lesson(
        &mut self,
        lessons: &[String],
        stdout: &mut dyn Write,
    ) -> Result<Option<String>> {
        loop {
            let Some(line) = self.input.read_line("Select a lesson: ")? else {
                return Ok(None);
            };
            match resolve_choice(lessons, &line) {
                Ok(name) => return Ok(Some(name.to_string())),
                Err(e) => writeln!(stdout, "{}", e)?,
            }
        }
    }
}
