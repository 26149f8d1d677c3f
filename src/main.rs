use anyhow::Result;
use argh::FromArgs;
use lesson_runner::Catalog;
use lesson_runner::console::{self, Session, Terminal};
use lesson_runner::logger::init_cli_logger;
use std::io::Write;
use std::process::ExitCode;

#[derive(FromArgs)]
/// Pick a day and a lesson from the training curriculum and run its exercise.
struct Args {
    #[argh(option, short = 'd')]
    /// day to open instead of asking for one.
    day: Option<String>,

    #[argh(option, short = 'l')]
    /// lesson to run instead of asking for one: a menu number or an exact lesson name.
    lesson: Option<String>,

    #[argh(switch)]
    /// print the lessons of every day and exit.
    list: bool,

    #[argh(switch, short = 'v')]
    /// log what the runner is doing.
    verbose: bool,
}

fn run(args: Args) -> Result<()> {
    let catalog = Catalog::default();
    let mut stdout = std::io::stdout().lock();

    if args.list {
        console::write_catalog(&mut stdout, &catalog)?;
        return Ok(());
    }

    let mut session = Session::new(&catalog, Terminal::new()?);
    session.run(args.day.as_deref(), args.lesson.as_deref(), &mut stdout)?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    init_cli_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
