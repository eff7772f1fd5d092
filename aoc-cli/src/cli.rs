//! CLI argument parsing using clap

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code helper
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Scaffold Advent of Code puzzles",
    version,
    propagate_version = true
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags accepted by every subcommand
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate code for a new day
    Create(CreateArgs),
}

#[derive(clap::Args, Debug)]
pub struct CreateArgs {
    /// The day to build scaffolding for (defaults to today)
    #[arg(short, long)]
    pub day: Option<u8>,

    /// The year of Advent of Code you are working on (defaults to the latest event)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Your Advent of Code working directory
    #[arg(short, long, env = "AOC_WORKDIR")]
    pub workdir: Option<PathBuf>,

    /// Your session cookie for adventofcode.com
    #[arg(short, long, env = "AOC_SESSION", hide_env_values = true)]
    pub cookie: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_create_flags() {
        let args = Args::try_parse_from([
            "aoc", "-vv", "create", "-d", "5", "-y", "2023", "-w", "/tmp/aoc", "-c", "abc",
        ])
        .unwrap();

        assert_eq!(args.global.verbose, 2);
        let Command::Create(create) = args.command;
        assert_eq!(create.day, Some(5));
        assert_eq!(create.year, Some(2023));
        assert_eq!(create.workdir, Some(PathBuf::from("/tmp/aoc")));
        assert_eq!(create.cookie.as_deref(), Some("abc"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["aoc", "create", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["aoc"]).is_err());
    }
}
