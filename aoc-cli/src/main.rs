//! AOC CLI - scaffolding for Advent of Code puzzles

mod cli;
mod config;
mod error;
mod logging;
mod output;
mod prompt;

use aoc_scaffold::Generator;
use clap::Parser;
use cli::{Args, Command, CreateArgs};
use error::CliError;
use output::Output;
use prompt::TerminalConfirm;

fn main() {
    let args = Args::parse();
    let output = Output::new();

    let result = logging::init_logging(&args.global).and_then(|()| run(args.command, &output));

    match result {
        Ok(()) => {}
        Err(e) if e.is_cancelled() => {
            output.warning(&e.user_message()).ok();
        }
        Err(e) => {
            output.error(&e.user_message()).ok();
            std::process::exit(1);
        }
    }
}

fn run(command: Command, output: &Output) -> Result<(), CliError> {
    match command {
        Command::Create(args) => create(args, output),
    }
}

/// `aoc create`: validate, generate, then point the user at the new directory
fn create(args: CreateArgs, output: &Output) -> Result<(), CliError> {
    let today = chrono::Local::now().date_naive();
    let generator = Generator::new(config::from_args(args, today))?;
    let puzzle = generator.puzzle();

    let mut confirm = TerminalConfirm::new(output);
    let mut reporter = output;
    generator.run(&mut confirm, &mut reporter)?;

    output.success("All files created successfully!")?;
    output.highlight(&format!(
        "You can now start solving the puzzle in: ./y{:04}/d{:02}",
        puzzle.year(),
        puzzle.day()
    ))?;

    Ok(())
}
